//! Core forecast engine: chained yearly statement projection
//!
//! Given a validated base year and one assumption set, projects P&L,
//! balance sheet, and cash flow for each forecast year. The engine is a
//! pure function of its inputs: no internal state survives a run, and
//! identical inputs produce identical results.

use crate::assumptions::ForecastAssumptions;
use crate::error::{ComputationError, ForecastError, ValidationError};
use crate::financials::BaseYearFinancials;

use super::state::ForecastState;
use super::statements::{
    BalanceSheet, CashFlowStatement, ForecastResult, ForecastedYear, IncomeStatement, RatioSet,
};

/// Configuration for a forecast run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Number of years to project (must be at least 1)
    pub horizon_years: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { horizon_years: 3 }
    }
}

/// Main forecast engine
pub struct ForecastEngine {
    assumptions: ForecastAssumptions,
    config: ForecastConfig,
}

/// Project forecast statements from a base year
///
/// Convenience wrapper over [`ForecastEngine`] for one-shot calls.
pub fn project(
    base: &BaseYearFinancials,
    assumptions: ForecastAssumptions,
    horizon_years: u32,
) -> Result<ForecastResult, ForecastError> {
    ForecastEngine::new(assumptions, ForecastConfig { horizon_years }).run(base)
}

impl ForecastEngine {
    /// Create an engine with the given assumptions and config
    pub fn new(assumptions: ForecastAssumptions, config: ForecastConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    /// Run the full projection for one base year
    ///
    /// Either all horizon years are computed or the run fails outright;
    /// no partial result is ever returned.
    pub fn run(&self, base: &BaseYearFinancials) -> Result<ForecastResult, ForecastError> {
        if self.config.horizon_years == 0 {
            return Err(ValidationError::EmptyHorizon.into());
        }
        self.assumptions.validate()?;
        base.validate()?;

        let mut result = ForecastResult::new(base.year, base.revenue);
        let mut state = ForecastState::from_base(base);

        for _ in 0..self.config.horizon_years {
            let projected = self.project_year(&state)?;
            state.advance(&projected);
            result.add_year(projected);
        }

        Ok(result)
    }

    /// Project one year from the prior year's closing state
    fn project_year(&self, state: &ForecastState) -> Result<ForecastedYear, ComputationError> {
        let a = &self.assumptions;
        let forecast_index = state.year_index + 1;
        let year = state.year + 1;

        // P&L: revenue compounds, COGS follows revenue, each expense
        // category grows independently.
        let revenue = state.revenue * (1.0 + a.revenue_growth);
        let cogs = revenue * a.cogs_ratio;
        let gross_profit = revenue - cogs;

        let selling_expense = state.selling_expense * (1.0 + a.opex_growth);
        let admin_expense = state.admin_expense * (1.0 + a.opex_growth);
        let financial_expense = state.financial_expense * (1.0 + a.opex_growth);
        let total_opex = selling_expense + admin_expense + financial_expense;

        let net_income = gross_profit - total_opex;
        if !net_income.is_finite() {
            return Err(ComputationError::NonFiniteResult {
                quantity: "net income",
                year,
            });
        }

        // Balance sheet: working-capital lines track revenue/COGS via
        // their turnover ratios, fixed assets grow at their own rate,
        // equity rolls forward with net income. Cash is solved last so
        // the accounting identity holds by construction.
        let receivables = revenue * a.receivables_ratio;
        let prepayments = cogs * a.prepayment_ratio;
        let fixed_assets = state.fixed_assets * (1.0 + a.fixed_asset_growth);

        let payables = cogs * a.payables_ratio;
        let customer_advances = revenue * a.advances_ratio;
        let long_term_debt = state.long_term_debt;
        let total_liabilities = payables + customer_advances + long_term_debt;

        // Capital injection applies in the first forecast year only
        let injection = if forecast_index == 1 {
            a.capital_increase
        } else {
            0.0
        };
        let share_capital = state.share_capital + injection;
        let retained_earnings = state.retained_earnings + net_income;
        let total_equity = share_capital + retained_earnings;

        let total_assets = total_liabilities + total_equity;
        let cash = total_assets - (receivables + prepayments + fixed_assets);
        if !cash.is_finite() {
            return Err(ComputationError::NonFiniteResult {
                quantity: "cash",
                year,
            });
        }

        // Cash flow: indirect method. Depreciation is added back to
        // operating and re-spent (with the asset delta) in investing.
        let depreciation = fixed_assets * a.depreciation_rate;
        let operating = net_income + depreciation
            - (receivables - state.receivables)
            - (prepayments - state.prepayments)
            + (payables - state.payables)
            + (customer_advances - state.customer_advances);
        let investing = -((fixed_assets - state.fixed_assets) + depreciation);
        let financing =
            (share_capital - state.share_capital) + (long_term_debt - state.long_term_debt);
        let net = operating + investing + financing;

        let ratios = RatioSet {
            gross_margin: ratio("gross margin", "revenue", gross_profit, revenue, year)?,
            net_margin: ratio("net margin", "revenue", net_income, revenue, year)?,
            debt_ratio: ratio(
                "debt ratio",
                "total assets",
                total_liabilities,
                total_assets,
                year,
            )?,
            fixed_asset_ratio: ratio(
                "fixed asset ratio",
                "total assets",
                fixed_assets,
                total_assets,
                year,
            )?,
            equity_ratio: ratio("equity ratio", "total assets", total_equity, total_assets, year)?,
        };

        Ok(ForecastedYear {
            year,
            income: IncomeStatement {
                revenue,
                cogs,
                gross_profit,
                selling_expense,
                admin_expense,
                financial_expense,
                total_opex,
                net_income,
            },
            balance: BalanceSheet {
                cash,
                receivables,
                prepayments,
                fixed_assets,
                total_assets,
                payables,
                customer_advances,
                long_term_debt,
                total_liabilities,
                share_capital,
                retained_earnings,
                total_equity,
            },
            cash_flow: CashFlowStatement {
                depreciation,
                operating,
                investing,
                financing,
                net,
            },
            ratios,
        })
    }
}

/// Compute a ratio, failing on a zero denominator
fn ratio(
    name: &'static str,
    denominator_name: &'static str,
    numerator: f64,
    denominator: f64,
    year: u32,
) -> Result<f64, ComputationError> {
    if denominator == 0.0 {
        return Err(ComputationError::DivisionByZero {
            ratio: name,
            denominator: denominator_name,
            year,
        });
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(ComputationError::NonFiniteResult {
            quantity: name,
            year,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::{CashFlowComponents, ForecastScenario, OperatingExpenses};
    use approx::assert_relative_eq;

    /// Base year from the engine's reference worked example:
    /// revenue 1,000,000, opex 200,000, assets 800,000,
    /// liabilities 300,000, equity 500,000.
    fn worked_example_base() -> BaseYearFinancials {
        BaseYearFinancials {
            year: 2023,
            revenue: 1_000_000.0,
            cogs: 600_000.0,
            opex: OperatingExpenses::new(200_000.0, 0.0, 0.0),
            cash: 700_000.0,
            receivables: 80_000.0,
            prepayments: 4_000.0,
            fixed_assets: 16_000.0,
            payables: 250_000.0,
            customer_advances: 20_000.0,
            long_term_debt: 30_000.0,
            share_capital: 520_000.0,
            retained_earnings: -20_000.0,
            cash_flow: CashFlowComponents {
                operating: 200_000.0,
                investing: 0.0,
                financing: 0.0,
            },
        }
    }

    fn worked_example_assumptions() -> ForecastAssumptions {
        ForecastAssumptions {
            revenue_growth: 0.10,
            cogs_ratio: 0.60,
            opex_growth: 0.05,
            capital_increase: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_worked_example_two_years() {
        let result = project(&worked_example_base(), worked_example_assumptions(), 2).unwrap();
        assert_eq!(result.years.len(), 2);

        let y1 = &result.years[0];
        assert_eq!(y1.year, 2024);
        assert_relative_eq!(y1.income.revenue, 1_100_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.income.cogs, 660_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.income.gross_profit, 440_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.income.total_opex, 210_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.income.net_income, 230_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.balance.total_equity, 730_000.0, epsilon = 1e-6);

        let y2 = &result.years[1];
        assert_eq!(y2.year, 2025);
        assert_relative_eq!(y2.income.revenue, 1_210_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_accounting_identity_every_year() {
        let scenario = ForecastScenario::demo();
        let result = project(&scenario.base, scenario.assumptions, 6).unwrap();

        for year in &result.years {
            let assets = year.balance.cash
                + year.balance.receivables
                + year.balance.prepayments
                + year.balance.fixed_assets;
            assert_relative_eq!(assets, year.balance.total_assets, epsilon = 1e-6);
            assert_relative_eq!(
                year.balance.total_assets,
                year.balance.total_liabilities + year.balance.total_equity,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_net_cash_flow_articulates_to_cash() {
        // The three statements must tie out: each year's net cash flow
        // equals the change in the balance-sheet cash line.
        let scenario = ForecastScenario::demo();
        let result = project(&scenario.base, scenario.assumptions, 5).unwrap();

        let mut prior_cash = scenario.base.cash;
        for year in &result.years {
            assert_relative_eq!(
                year.cash_flow.net,
                year.balance.cash - prior_cash,
                epsilon = 1e-6
            );
            prior_cash = year.balance.cash;
        }
    }

    #[test]
    fn test_zero_horizon_fails_validation() {
        let result = project(&worked_example_base(), worked_example_assumptions(), 0);
        assert_eq!(
            result,
            Err(ForecastError::Validation(ValidationError::EmptyHorizon))
        );
    }

    #[test]
    fn test_returns_exactly_horizon_years_in_order() {
        let result = project(&worked_example_base(), worked_example_assumptions(), 7).unwrap();
        assert_eq!(result.years.len(), 7);
        for (i, year) in result.years.iter().enumerate() {
            assert_eq!(year.year, 2024 + i as u32);
        }
    }

    #[test]
    fn test_zero_growth_keeps_revenue_constant() {
        let assumptions = ForecastAssumptions {
            revenue_growth: 0.0,
            ..worked_example_assumptions()
        };
        let result = project(&worked_example_base(), assumptions, 4).unwrap();
        for year in &result.years {
            assert_relative_eq!(year.income.revenue, 1_000_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_cogs_ratio_makes_gross_profit_equal_revenue() {
        let assumptions = ForecastAssumptions {
            cogs_ratio: 0.0,
            ..worked_example_assumptions()
        };
        let result = project(&worked_example_base(), assumptions, 3).unwrap();
        for year in &result.years {
            assert_relative_eq!(year.income.gross_profit, year.income.revenue);
            assert_relative_eq!(year.ratios.gross_margin, 1.0);
        }
    }

    #[test]
    fn test_zero_revenue_fails_computation() {
        // An all-zero base year is balanced, but the margin step divides
        // by projected revenue, which stays zero.
        let base = BaseYearFinancials {
            revenue: 0.0,
            cogs: 0.0,
            opex: OperatingExpenses::new(0.0, 0.0, 0.0),
            cash: 0.0,
            receivables: 0.0,
            prepayments: 0.0,
            fixed_assets: 0.0,
            payables: 0.0,
            customer_advances: 0.0,
            long_term_debt: 0.0,
            share_capital: 0.0,
            retained_earnings: 0.0,
            ..worked_example_base()
        };

        let result = project(&base, worked_example_assumptions(), 2);
        assert!(matches!(
            result,
            Err(ForecastError::Computation(
                ComputationError::DivisionByZero { .. }
            ))
        ));
    }

    #[test]
    fn test_identical_inputs_identical_results() {
        let base = worked_example_base();
        let assumptions = worked_example_assumptions();
        let first = project(&base, assumptions, 5).unwrap();
        let second = project(&base, assumptions, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unbalanced_base_rejected_by_run() {
        let mut base = worked_example_base();
        base.cash += 1.0;
        let result = project(&base, worked_example_assumptions(), 2);
        assert!(matches!(
            result,
            Err(ForecastError::Validation(
                ValidationError::UnbalancedBaseYear { .. }
            ))
        ));
    }

    #[test]
    fn test_capital_increase_applies_in_first_year_only() {
        let assumptions = ForecastAssumptions {
            capital_increase: 325_000.0,
            ..worked_example_assumptions()
        };
        let result = project(&worked_example_base(), assumptions, 3).unwrap();

        let y1 = &result.years[0];
        assert_relative_eq!(y1.balance.share_capital, 845_000.0, epsilon = 1e-6);
        assert_relative_eq!(y1.cash_flow.financing, 325_000.0, epsilon = 1e-6);

        let y2 = &result.years[1];
        assert_relative_eq!(y2.balance.share_capital, 845_000.0, epsilon = 1e-6);
        assert_relative_eq!(y2.cash_flow.financing, 0.0, epsilon = 1e-6);
    }
}
