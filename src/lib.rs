//! FinaGen - financial statement forecasting engine
//!
//! This library provides:
//! - Deterministic P&L, balance sheet, and cash flow projection from a
//!   single base year
//! - Growth-rate and turnover-ratio driven assumptions, validated before
//!   any arithmetic runs
//! - Cross-statement consistency by construction (Assets = Liabilities +
//!   Equity every year; net cash flow ties to the change in cash)
//! - Scenario batch runs and CSV export of the projected statements

pub mod assumptions;
pub mod error;
pub mod export;
pub mod financials;
pub mod forecast;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::ForecastAssumptions;
pub use error::{ComputationError, ForecastError, ValidationError};
pub use financials::{BaseYearFinancials, ForecastScenario};
pub use forecast::{project, ForecastConfig, ForecastEngine, ForecastResult, ForecastedYear};
pub use scenario::ScenarioRunner;
