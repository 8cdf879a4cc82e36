//! Statement forecasting: engine, roll-forward state, and output types

mod engine;
mod state;
mod statements;

pub use engine::{project, ForecastConfig, ForecastEngine};
pub use state::ForecastState;
pub use statements::{
    BalanceSheet, CashFlowStatement, ForecastResult, ForecastSummary, ForecastedYear,
    IncomeStatement, RatioSet,
};
