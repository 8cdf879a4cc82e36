//! Output structures for forecast runs

use serde::{Deserialize, Serialize};

/// Projected P&L for one forecast year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub selling_expense: f64,
    pub admin_expense: f64,
    pub financial_expense: f64,
    pub total_opex: f64,
    /// Pre-tax net income (no tax or interest modeling)
    pub net_income: f64,
}

/// Projected balance sheet for one forecast year
///
/// Cash is the balancing line: it absorbs whatever residual keeps
/// Assets = Liabilities + Equity true, so `total_assets` always equals
/// `total_liabilities + total_equity` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub cash: f64,
    pub receivables: f64,
    pub prepayments: f64,
    pub fixed_assets: f64,
    pub total_assets: f64,
    pub payables: f64,
    pub customer_advances: f64,
    pub long_term_debt: f64,
    pub total_liabilities: f64,
    pub share_capital: f64,
    pub retained_earnings: f64,
    pub total_equity: f64,
}

/// Projected cash flow statement for one forecast year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    /// Depreciation charge added back to operating cash flow
    pub depreciation: f64,
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    pub net: f64,
}

/// Derived ratios for one forecast year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub gross_margin: f64,
    pub net_margin: f64,
    pub debt_ratio: f64,
    pub fixed_asset_ratio: f64,
    pub equity_ratio: f64,
}

/// All statements for a single projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastedYear {
    /// Fiscal year label (base year + offset)
    pub year: u32,
    pub income: IncomeStatement,
    pub balance: BalanceSheet,
    pub cash_flow: CashFlowStatement,
    pub ratios: RatioSet,
}

/// Complete forecast result: one record per projected year, in
/// increasing-year order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Base year the projection chains from
    pub base_year: u32,

    /// Base-year revenue, kept for CAGR reporting
    pub base_revenue: f64,

    /// Projected years, ordered by increasing year
    pub years: Vec<ForecastedYear>,
}

impl ForecastResult {
    pub fn new(base_year: u32, base_revenue: f64) -> Self {
        Self {
            base_year,
            base_revenue,
            years: Vec::new(),
        }
    }

    /// Append a projected year
    pub fn add_year(&mut self, year: ForecastedYear) {
        self.years.push(year);
    }

    /// Number of projected years
    pub fn horizon(&self) -> u32 {
        self.years.len() as u32
    }

    /// Block-level summary statistics
    pub fn summary(&self) -> ForecastSummary {
        let final_year = self.years.last();

        let final_revenue = final_year.map(|y| y.income.revenue).unwrap_or(0.0);
        let horizon = self.horizon();

        // Realized CAGR over the horizon; only meaningful from a
        // positive base revenue.
        let revenue_cagr = if self.base_revenue > 0.0 && horizon > 0 {
            (final_revenue / self.base_revenue).powf(1.0 / horizon as f64) - 1.0
        } else {
            0.0
        };

        ForecastSummary {
            horizon_years: horizon,
            final_revenue,
            revenue_cagr,
            final_net_income: final_year.map(|y| y.income.net_income).unwrap_or(0.0),
            final_gross_margin: final_year.map(|y| y.ratios.gross_margin).unwrap_or(0.0),
            final_net_margin: final_year.map(|y| y.ratios.net_margin).unwrap_or(0.0),
            final_equity: final_year.map(|y| y.balance.total_equity).unwrap_or(0.0),
            cumulative_net_cash_flow: self.years.iter().map(|y| y.cash_flow.net).sum(),
        }
    }
}

/// Summary statistics for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub horizon_years: u32,
    pub final_revenue: f64,
    pub revenue_cagr: f64,
    pub final_net_income: f64,
    pub final_gross_margin: f64,
    pub final_net_margin: f64,
    pub final_equity: f64,
    pub cumulative_net_cash_flow: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dummy_year(year: u32, revenue: f64) -> ForecastedYear {
        ForecastedYear {
            year,
            income: IncomeStatement {
                revenue,
                cogs: 0.0,
                gross_profit: revenue,
                selling_expense: 0.0,
                admin_expense: 0.0,
                financial_expense: 0.0,
                total_opex: 0.0,
                net_income: revenue,
            },
            balance: BalanceSheet {
                cash: 0.0,
                receivables: 0.0,
                prepayments: 0.0,
                fixed_assets: 0.0,
                total_assets: 0.0,
                payables: 0.0,
                customer_advances: 0.0,
                long_term_debt: 0.0,
                total_liabilities: 0.0,
                share_capital: 0.0,
                retained_earnings: 0.0,
                total_equity: 0.0,
            },
            cash_flow: CashFlowStatement {
                depreciation: 0.0,
                operating: 10.0,
                investing: -4.0,
                financing: 0.0,
                net: 6.0,
            },
            ratios: RatioSet {
                gross_margin: 1.0,
                net_margin: 1.0,
                debt_ratio: 0.0,
                fixed_asset_ratio: 0.0,
                equity_ratio: 1.0,
            },
        }
    }

    #[test]
    fn test_summary_cagr() {
        let mut result = ForecastResult::new(2023, 1000.0);
        result.add_year(dummy_year(2024, 1100.0));
        result.add_year(dummy_year(2025, 1210.0));

        let summary = result.summary();
        assert_eq!(summary.horizon_years, 2);
        assert_relative_eq!(summary.revenue_cagr, 0.10, epsilon = 1e-12);
        assert_relative_eq!(summary.cumulative_net_cash_flow, 12.0);
    }

    #[test]
    fn test_empty_result_summary() {
        let result = ForecastResult::new(2023, 1000.0);
        let summary = result.summary();
        assert_eq!(summary.horizon_years, 0);
        assert_relative_eq!(summary.revenue_cagr, 0.0);
    }
}
