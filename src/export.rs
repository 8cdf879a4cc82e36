//! CSV export of forecast statements
//!
//! Tables are oriented the way the source model displays them: one row
//! per line item, one column per year. The base year is labeled with an
//! "A" (actual) suffix and forecast years with "E" (estimate).

use std::io::Write;

use crate::financials::BaseYearFinancials;
use crate::forecast::{ForecastResult, ForecastedYear};

fn year_header(base: &BaseYearFinancials, result: &ForecastResult) -> Vec<String> {
    let mut header = vec!["Line Item".to_string(), format!("{}A", base.year)];
    header.extend(result.years.iter().map(|y| format!("{}E", y.year)));
    header
}

fn amount_row<'a>(
    name: &str,
    base_value: Option<f64>,
    values: impl Iterator<Item = &'a ForecastedYear>,
    pick: impl Fn(&ForecastedYear) -> f64,
) -> Vec<String> {
    let mut row = vec![name.to_string()];
    row.push(base_value.map(|v| format!("{:.2}", v)).unwrap_or_default());
    row.extend(values.map(|y| format!("{:.2}", pick(y))));
    row
}

/// Write the projected income statement as CSV
pub fn write_income_csv<W: Write>(
    writer: W,
    base: &BaseYearFinancials,
    result: &ForecastResult,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(year_header(base, result))?;

    let years = || result.years.iter();
    wtr.write_record(amount_row("Revenue", Some(base.revenue), years(), |y| {
        y.income.revenue
    }))?;
    wtr.write_record(amount_row("COGS", Some(base.cogs), years(), |y| y.income.cogs))?;
    wtr.write_record(amount_row(
        "Gross Profit",
        Some(base.gross_profit()),
        years(),
        |y| y.income.gross_profit,
    ))?;
    wtr.write_record(amount_row(
        "Selling Expense",
        Some(base.opex.selling),
        years(),
        |y| y.income.selling_expense,
    ))?;
    wtr.write_record(amount_row(
        "Admin Expense",
        Some(base.opex.admin),
        years(),
        |y| y.income.admin_expense,
    ))?;
    wtr.write_record(amount_row(
        "Financial Expense",
        Some(base.opex.financial),
        years(),
        |y| y.income.financial_expense,
    ))?;
    wtr.write_record(amount_row(
        "Net Income",
        Some(base.net_income()),
        years(),
        |y| y.income.net_income,
    ))?;

    wtr.flush()?;
    Ok(())
}

/// Write the projected balance sheet as CSV
pub fn write_balance_csv<W: Write>(
    writer: W,
    base: &BaseYearFinancials,
    result: &ForecastResult,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(year_header(base, result))?;

    let years = || result.years.iter();
    wtr.write_record(amount_row("Cash", Some(base.cash), years(), |y| {
        y.balance.cash
    }))?;
    wtr.write_record(amount_row(
        "Accounts Receivable",
        Some(base.receivables),
        years(),
        |y| y.balance.receivables,
    ))?;
    wtr.write_record(amount_row(
        "Prepayments",
        Some(base.prepayments),
        years(),
        |y| y.balance.prepayments,
    ))?;
    wtr.write_record(amount_row(
        "Fixed Assets",
        Some(base.fixed_assets),
        years(),
        |y| y.balance.fixed_assets,
    ))?;
    wtr.write_record(amount_row(
        "Total Assets",
        Some(base.total_assets()),
        years(),
        |y| y.balance.total_assets,
    ))?;
    wtr.write_record(amount_row(
        "Accounts Payable",
        Some(base.payables),
        years(),
        |y| y.balance.payables,
    ))?;
    wtr.write_record(amount_row(
        "Customer Advances",
        Some(base.customer_advances),
        years(),
        |y| y.balance.customer_advances,
    ))?;
    wtr.write_record(amount_row(
        "Long-Term Debt",
        Some(base.long_term_debt),
        years(),
        |y| y.balance.long_term_debt,
    ))?;
    wtr.write_record(amount_row(
        "Total Liabilities",
        Some(base.total_liabilities()),
        years(),
        |y| y.balance.total_liabilities,
    ))?;
    wtr.write_record(amount_row(
        "Share Capital",
        Some(base.share_capital),
        years(),
        |y| y.balance.share_capital,
    ))?;
    wtr.write_record(amount_row(
        "Retained Earnings",
        Some(base.retained_earnings),
        years(),
        |y| y.balance.retained_earnings,
    ))?;
    wtr.write_record(amount_row(
        "Total Equity",
        Some(base.total_equity()),
        years(),
        |y| y.balance.total_equity,
    ))?;

    wtr.flush()?;
    Ok(())
}

/// Write the projected cash flow statement as CSV
pub fn write_cash_flow_csv<W: Write>(
    writer: W,
    base: &BaseYearFinancials,
    result: &ForecastResult,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(year_header(base, result))?;

    let years = || result.years.iter();
    // The base year reports no depreciation split, so that cell is blank.
    wtr.write_record(amount_row("Depreciation", None, years(), |y| {
        y.cash_flow.depreciation
    }))?;
    wtr.write_record(amount_row(
        "Operating Cash Flow",
        Some(base.cash_flow.operating),
        years(),
        |y| y.cash_flow.operating,
    ))?;
    wtr.write_record(amount_row(
        "Investing Cash Flow",
        Some(base.cash_flow.investing),
        years(),
        |y| y.cash_flow.investing,
    ))?;
    wtr.write_record(amount_row(
        "Financing Cash Flow",
        Some(base.cash_flow.financing),
        years(),
        |y| y.cash_flow.financing,
    ))?;
    wtr.write_record(amount_row(
        "Net Cash Flow",
        Some(base.cash_flow.net()),
        years(),
        |y| y.cash_flow.net,
    ))?;

    wtr.flush()?;
    Ok(())
}

/// Write the derived ratio table (forecast years only) as CSV
pub fn write_ratios_csv<W: Write>(writer: W, result: &ForecastResult) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Ratio".to_string()];
    header.extend(result.years.iter().map(|y| format!("{}E", y.year)));
    wtr.write_record(header)?;

    let rows: [(&str, fn(&ForecastedYear) -> f64); 5] = [
        ("Gross Margin", |y| y.ratios.gross_margin),
        ("Net Margin", |y| y.ratios.net_margin),
        ("Debt Ratio", |y| y.ratios.debt_ratio),
        ("Fixed Asset Ratio", |y| y.ratios.fixed_asset_ratio),
        ("Equity Ratio", |y| y.ratios.equity_ratio),
    ];
    for (name, pick) in rows {
        let mut row = vec![name.to_string()];
        row.extend(result.years.iter().map(|y| format!("{:.4}", pick(y))));
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
