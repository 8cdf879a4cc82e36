//! Scenario runner for comparing assumption sets
//!
//! Holds one base year and evaluates any number of assumption sets
//! against it. The engine is stateless and takes its inputs by value,
//! so batch runs evaluate scenarios in parallel.

use rayon::prelude::*;

use crate::assumptions::ForecastAssumptions;
use crate::error::ForecastError;
use crate::financials::BaseYearFinancials;
use crate::forecast::{ForecastConfig, ForecastEngine, ForecastResult};

/// Runs forecast scenarios against a fixed base year
///
/// # Example
/// ```
/// use finagen::financials::ForecastScenario;
/// use finagen::forecast::ForecastConfig;
/// use finagen::scenario::ScenarioRunner;
///
/// let demo = ForecastScenario::demo();
/// let runner = ScenarioRunner::new(demo.base);
/// let result = runner
///     .run(demo.assumptions, ForecastConfig { horizon_years: 3 })
///     .unwrap();
/// assert_eq!(result.years.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: BaseYearFinancials,
}

impl ScenarioRunner {
    /// Create a runner for the given base year
    pub fn new(base: BaseYearFinancials) -> Self {
        Self { base }
    }

    /// Run a single forecast with the given assumptions and config
    pub fn run(
        &self,
        assumptions: ForecastAssumptions,
        config: ForecastConfig,
    ) -> Result<ForecastResult, ForecastError> {
        ForecastEngine::new(assumptions, config).run(&self.base)
    }

    /// Run many assumption sets against the same base year in parallel
    ///
    /// Results come back in input order; each scenario succeeds or fails
    /// independently.
    pub fn run_batch(
        &self,
        scenarios: &[ForecastAssumptions],
        config: ForecastConfig,
    ) -> Vec<Result<ForecastResult, ForecastError>> {
        log::debug!(
            "running {} scenarios over a {}-year horizon",
            scenarios.len(),
            config.horizon_years
        );
        scenarios
            .par_iter()
            .map(|assumptions| ForecastEngine::new(*assumptions, config).run(&self.base))
            .collect()
    }

    /// Get a reference to the base year
    pub fn base(&self) -> &BaseYearFinancials {
        &self.base
    }
}
