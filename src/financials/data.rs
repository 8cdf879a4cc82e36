//! Base-year financial data structures
//!
//! One historical fiscal year supplies the starting values for every
//! projection. Figures are grouped the way the source statements group
//! them: P&L line items, balance-sheet line items, and the three
//! cash-flow components.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Tolerance (in currency units) for the base-year accounting identity
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Operating expenses split by category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingExpenses {
    /// Selling expense
    pub selling: f64,
    /// Administrative expense
    pub admin: f64,
    /// Financial expense (interest, fees)
    pub financial: f64,
}

impl OperatingExpenses {
    pub fn new(selling: f64, admin: f64, financial: f64) -> Self {
        Self {
            selling,
            admin,
            financial,
        }
    }

    /// Sum across all categories
    pub fn total(&self) -> f64 {
        self.selling + self.admin + self.financial
    }
}

/// Cash-flow components of a single year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowComponents {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
}

impl CashFlowComponents {
    /// Net cash flow across the three activities
    pub fn net(&self) -> f64 {
        self.operating + self.investing + self.financing
    }
}

/// Immutable snapshot of one historical fiscal year
///
/// The balance sheet is carried at line-item granularity because the
/// working-capital lines (receivables, prepayments, payables, customer
/// advances) each follow their own turnover ratio during projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseYearFinancials {
    /// Fiscal year label (e.g. 2023)
    pub year: u32,

    // P&L
    /// Total revenue
    pub revenue: f64,
    /// Cost of goods sold
    pub cogs: f64,
    /// Operating expenses by category
    pub opex: OperatingExpenses,

    // Balance sheet: assets
    /// Cash and equivalents
    pub cash: f64,
    /// Accounts receivable
    pub receivables: f64,
    /// Prepayments to suppliers
    pub prepayments: f64,
    /// Fixed assets, net
    pub fixed_assets: f64,

    // Balance sheet: liabilities
    /// Accounts payable
    pub payables: f64,
    /// Advances from customers
    pub customer_advances: f64,
    /// Long-term debt
    pub long_term_debt: f64,

    // Balance sheet: equity
    /// Paid-in share capital
    pub share_capital: f64,
    /// Accumulated retained earnings
    pub retained_earnings: f64,

    /// Reported cash-flow components for the base year
    pub cash_flow: CashFlowComponents,
}

impl BaseYearFinancials {
    /// Gross profit = revenue - COGS
    pub fn gross_profit(&self) -> f64 {
        self.revenue - self.cogs
    }

    /// Total operating expense across categories
    pub fn total_opex(&self) -> f64 {
        self.opex.total()
    }

    /// Net income = gross profit - total opex (pre-tax simplification)
    pub fn net_income(&self) -> f64 {
        self.gross_profit() - self.total_opex()
    }

    /// Current assets = cash + receivables + prepayments
    pub fn current_assets(&self) -> f64 {
        self.cash + self.receivables + self.prepayments
    }

    /// Total assets = current assets + fixed assets
    pub fn total_assets(&self) -> f64 {
        self.current_assets() + self.fixed_assets
    }

    /// Current liabilities = payables + customer advances
    pub fn current_liabilities(&self) -> f64 {
        self.payables + self.customer_advances
    }

    /// Total liabilities = current liabilities + long-term debt
    pub fn total_liabilities(&self) -> f64 {
        self.current_liabilities() + self.long_term_debt
    }

    /// Total equity = share capital + retained earnings
    pub fn total_equity(&self) -> f64 {
        self.share_capital + self.retained_earnings
    }

    /// Check the accounting identity and figure finiteness
    ///
    /// The identity is validated at input, never recomputed: the engine
    /// trusts a balanced base year and keeps the identity true by
    /// construction in every projected year.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let figures: [(&'static str, f64); 12] = [
            ("revenue", self.revenue),
            ("cogs", self.cogs),
            ("opex", self.opex.total()),
            ("cash", self.cash),
            ("receivables", self.receivables),
            ("prepayments", self.prepayments),
            ("fixed_assets", self.fixed_assets),
            ("payables", self.payables),
            ("customer_advances", self.customer_advances),
            ("long_term_debt", self.long_term_debt),
            ("share_capital", self.share_capital),
            ("retained_earnings", self.retained_earnings),
        ];
        for (name, value) in figures {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { name });
            }
        }

        let assets = self.total_assets();
        let liabilities_plus_equity = self.total_liabilities() + self.total_equity();
        if (assets - liabilities_plus_equity).abs() > BALANCE_TOLERANCE {
            return Err(ValidationError::UnbalancedBaseYear {
                assets,
                liabilities_plus_equity,
            });
        }

        Ok(())
    }
}
