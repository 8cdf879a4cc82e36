//! Scenario file loading
//!
//! A scenario bundles one base year with the assumption set and horizon
//! to apply to it, stored as a JSON document. The demo scenario mirrors
//! the reference model's 2023 historical data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::ForecastAssumptions;
use crate::financials::{BaseYearFinancials, CashFlowComponents, OperatingExpenses};

/// Default forecast horizon when a scenario file omits it
fn default_horizon() -> u32 {
    3
}

/// Failure reading or parsing a scenario file
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete forecast request: base year, assumptions, horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastScenario {
    /// Historical base year
    pub base: BaseYearFinancials,

    /// Assumption set applied uniformly across the horizon
    pub assumptions: ForecastAssumptions,

    /// Number of years to project
    #[serde(default = "default_horizon")]
    pub horizon_years: u32,
}

impl ForecastScenario {
    /// Load a scenario from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ScenarioLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScenarioLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in demo scenario: the reference model's 2023 figures with
    /// its default slider assumptions and a 325.00 capital increase
    pub fn demo() -> Self {
        let base = BaseYearFinancials {
            year: 2023,
            revenue: 1000.0,
            cogs: 600.0,
            opex: OperatingExpenses::new(100.0, 80.0, 20.0),
            cash: 1260.0,
            receivables: 110.0,
            prepayments: 6.0,
            fixed_assets: 16.0,
            payables: 120.0,
            customer_advances: 10.0,
            long_term_debt: 0.0,
            share_capital: 1333.52,
            retained_earnings: -71.52,
            // Base-year operating CF = net income plus depreciation on
            // fixed assets; no investing or financing activity reported.
            cash_flow: CashFlowComponents {
                operating: 201.6,
                investing: 0.0,
                financing: 0.0,
            },
        };

        Self {
            base,
            assumptions: ForecastAssumptions {
                capital_increase: 325.0,
                ..Default::default()
            },
            horizon_years: 3,
        }
    }
}
