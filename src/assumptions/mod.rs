//! Forecast assumptions: growth rates and turnover ratios
//!
//! One assumption set is supplied per run and applied uniformly across
//! the horizon; there are no per-year overrides.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Driver parameters for a forecast run
///
/// Ratio fields must lie in [0, 1]; growth fields must be at least -1.0
/// (a -100% growth rate zeroes the driven figure, anything below it is
/// meaningless).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAssumptions {
    /// Per-year revenue growth rate (compound)
    pub revenue_growth: f64,

    /// COGS as a fraction of revenue
    pub cogs_ratio: f64,

    /// Per-year growth applied to each operating expense category
    pub opex_growth: f64,

    /// Accounts receivable as a fraction of revenue
    pub receivables_ratio: f64,

    /// Prepayments as a fraction of COGS
    pub prepayment_ratio: f64,

    /// Accounts payable as a fraction of COGS
    pub payables_ratio: f64,

    /// Customer advances as a fraction of revenue
    pub advances_ratio: f64,

    /// Per-year fixed asset growth rate
    pub fixed_asset_growth: f64,

    /// Annual depreciation as a fraction of fixed assets
    pub depreciation_rate: f64,

    /// Share capital injected in forecast year 1
    pub capital_increase: f64,
}

impl ForecastAssumptions {
    /// Check every parameter against its admissible range
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ratios: [(&'static str, f64); 6] = [
            ("cogs_ratio", self.cogs_ratio),
            ("receivables_ratio", self.receivables_ratio),
            ("prepayment_ratio", self.prepayment_ratio),
            ("payables_ratio", self.payables_ratio),
            ("advances_ratio", self.advances_ratio),
            ("depreciation_rate", self.depreciation_rate),
        ];
        for (name, value) in ratios {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { name });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::RatioOutOfRange { name, value });
            }
        }

        let growth_rates: [(&'static str, f64); 3] = [
            ("revenue_growth", self.revenue_growth),
            ("opex_growth", self.opex_growth),
            ("fixed_asset_growth", self.fixed_asset_growth),
        ];
        for (name, value) in growth_rates {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { name });
            }
            if value < -1.0 {
                return Err(ValidationError::GrowthBelowFloor { name, value });
            }
        }

        if !self.capital_increase.is_finite() {
            return Err(ValidationError::NonFinite {
                name: "capital_increase",
            });
        }

        Ok(())
    }
}

impl Default for ForecastAssumptions {
    /// Default assumption set matching the reference model's starting values
    fn default() -> Self {
        Self {
            revenue_growth: 0.15,
            cogs_ratio: 0.60,
            opex_growth: 0.05,
            receivables_ratio: 0.11,
            prepayment_ratio: 0.01,
            payables_ratio: 0.20,
            advances_ratio: 0.01,
            fixed_asset_growth: 0.20,
            depreciation_rate: 0.10,
            capital_increase: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions_validate() {
        assert!(ForecastAssumptions::default().validate().is_ok());
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        let assumptions = ForecastAssumptions {
            cogs_ratio: 1.2,
            ..Default::default()
        };
        assert_eq!(
            assumptions.validate(),
            Err(ValidationError::RatioOutOfRange {
                name: "cogs_ratio",
                value: 1.2
            })
        );
    }

    #[test]
    fn test_negative_ratio_rejected() {
        let assumptions = ForecastAssumptions {
            payables_ratio: -0.01,
            ..Default::default()
        };
        assert!(matches!(
            assumptions.validate(),
            Err(ValidationError::RatioOutOfRange {
                name: "payables_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_growth_below_minus_one_rejected() {
        let assumptions = ForecastAssumptions {
            revenue_growth: -1.5,
            ..Default::default()
        };
        assert!(matches!(
            assumptions.validate(),
            Err(ValidationError::GrowthBelowFloor {
                name: "revenue_growth",
                ..
            })
        ));
    }

    #[test]
    fn test_boundary_values_accepted() {
        let assumptions = ForecastAssumptions {
            revenue_growth: -1.0,
            cogs_ratio: 0.0,
            depreciation_rate: 1.0,
            ..Default::default()
        };
        assert!(assumptions.validate().is_ok());
    }
}
