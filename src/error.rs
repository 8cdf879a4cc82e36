//! Error taxonomy for forecast runs
//!
//! Validation failures are caught before any projection arithmetic runs;
//! computation failures surface mid-run and abort the whole forecast.
//! Neither is retried internally since both stem from user-supplied data.

use thiserror::Error;

/// Input rejected before the projection starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Forecast horizon must cover at least one year
    #[error("forecast horizon must be at least 1 year")]
    EmptyHorizon,

    /// A ratio-type assumption fell outside [0, 1]
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    /// A growth-rate assumption fell below -100%
    #[error("{name} must be at least -1.0, got {value}")]
    GrowthBelowFloor { name: &'static str, value: f64 },

    /// A base-year or assumption figure was not a finite number
    #[error("{name} is not a finite number")]
    NonFinite { name: &'static str },

    /// Base year violates Assets = Liabilities + Equity
    #[error(
        "base year fails the accounting identity: assets {assets:.2} vs \
         liabilities + equity {liabilities_plus_equity:.2}"
    )]
    UnbalancedBaseYear {
        assets: f64,
        liabilities_plus_equity: f64,
    },
}

/// Arithmetic failure during projection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    /// A ratio required dividing by a zero quantity
    #[error("division by zero computing {ratio} for forecast year {year}: {denominator} is zero")]
    DivisionByZero {
        ratio: &'static str,
        denominator: &'static str,
        year: u32,
    },

    /// A projected figure overflowed to a non-finite value
    #[error("{quantity} became non-finite in forecast year {year}")]
    NonFiniteResult { quantity: &'static str, year: u32 },
}

/// Top-level error for a forecast run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("computation failed: {0}")]
    Computation(#[from] ComputationError),
}
