//! Roll-forward state for a forecast run
//!
//! Each projected year chains from the prior year's closing figures;
//! year 0 is the base year.

use crate::financials::BaseYearFinancials;

use super::statements::ForecastedYear;

/// Closing figures of the most recently completed year
#[derive(Debug, Clone)]
pub struct ForecastState {
    /// Fiscal year label of the figures held here
    pub year: u32,

    /// Offset from the base year (0 = base)
    pub year_index: u32,

    // P&L carried forward
    pub revenue: f64,
    pub selling_expense: f64,
    pub admin_expense: f64,
    pub financial_expense: f64,

    // Balance sheet carried forward
    pub cash: f64,
    pub receivables: f64,
    pub prepayments: f64,
    pub fixed_assets: f64,
    pub payables: f64,
    pub customer_advances: f64,
    pub long_term_debt: f64,
    pub share_capital: f64,
    pub retained_earnings: f64,
}

impl ForecastState {
    /// Seed state from the validated base year
    pub fn from_base(base: &BaseYearFinancials) -> Self {
        Self {
            year: base.year,
            year_index: 0,
            revenue: base.revenue,
            selling_expense: base.opex.selling,
            admin_expense: base.opex.admin,
            financial_expense: base.opex.financial,
            cash: base.cash,
            receivables: base.receivables,
            prepayments: base.prepayments,
            fixed_assets: base.fixed_assets,
            payables: base.payables,
            customer_advances: base.customer_advances,
            long_term_debt: base.long_term_debt,
            share_capital: base.share_capital,
            retained_earnings: base.retained_earnings,
        }
    }

    /// Roll state forward to a just-computed year's closing figures
    pub fn advance(&mut self, projected: &ForecastedYear) {
        self.year = projected.year;
        self.year_index += 1;

        self.revenue = projected.income.revenue;
        self.selling_expense = projected.income.selling_expense;
        self.admin_expense = projected.income.admin_expense;
        self.financial_expense = projected.income.financial_expense;

        self.cash = projected.balance.cash;
        self.receivables = projected.balance.receivables;
        self.prepayments = projected.balance.prepayments;
        self.fixed_assets = projected.balance.fixed_assets;
        self.payables = projected.balance.payables;
        self.customer_advances = projected.balance.customer_advances;
        self.long_term_debt = projected.balance.long_term_debt;
        self.share_capital = projected.balance.share_capital;
        self.retained_earnings = projected.balance.retained_earnings;
    }

    /// Total equity carried forward
    pub fn total_equity(&self) -> f64 {
        self.share_capital + self.retained_earnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::ForecastScenario;
    use approx::assert_relative_eq;

    #[test]
    fn test_state_seeded_from_base() {
        let base = ForecastScenario::demo().base;
        let state = ForecastState::from_base(&base);

        assert_eq!(state.year, 2023);
        assert_eq!(state.year_index, 0);
        assert_relative_eq!(state.revenue, base.revenue);
        assert_relative_eq!(state.cash, base.cash);
        assert_relative_eq!(state.total_equity(), base.total_equity());
    }
}
