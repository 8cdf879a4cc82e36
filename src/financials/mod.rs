//! Base-year financial data and scenario loading

mod data;
pub mod loader;

pub use data::{BaseYearFinancials, CashFlowComponents, OperatingExpenses, BALANCE_TOLERANCE};
pub use loader::{ForecastScenario, ScenarioLoadError};
