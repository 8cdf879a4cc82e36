//! FinaGen CLI
//!
//! Runs a statement forecast from a scenario file (or the built-in demo)
//! and prints the projected statements, optionally exporting them as CSV.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use finagen::export;
use finagen::financials::ForecastScenario;
use finagen::forecast::{ForecastConfig, ForecastEngine};

#[derive(Parser)]
#[command(name = "finagen", about = "Financial statement forecasting from a base year")]
struct Args {
    /// Scenario JSON file (base year + assumptions). Uses the built-in
    /// demo scenario when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's forecast horizon in years
    #[arg(long)]
    horizon: Option<u32>,

    /// Directory to write statement CSVs into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => ForecastScenario::from_path(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => {
            log::info!("no scenario file given, using built-in demo scenario");
            ForecastScenario::demo()
        }
    };

    let horizon = args.horizon.unwrap_or(scenario.horizon_years);
    let config = ForecastConfig {
        horizon_years: horizon,
    };

    println!("FinaGen Forecast");
    println!("================\n");
    println!("Base year: {}", scenario.base.year);
    println!("  Revenue:      {:>14.2}", scenario.base.revenue);
    println!("  Net Income:   {:>14.2}", scenario.base.net_income());
    println!("  Total Assets: {:>14.2}", scenario.base.total_assets());
    println!("  Total Equity: {:>14.2}", scenario.base.total_equity());
    println!();

    let engine = ForecastEngine::new(scenario.assumptions, config);
    let result = engine.run(&scenario.base)?;

    println!("Projection ({} years):", result.years.len());
    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>14} {:>14} {:>12}",
        "Year", "Revenue", "Gross Profit", "Net Income", "Total Assets", "Equity", "Net CF"
    );
    println!("{}", "-".repeat(94));
    for year in &result.years {
        println!(
            "{:>5}E {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
            year.year,
            year.income.revenue,
            year.income.gross_profit,
            year.income.net_income,
            year.balance.total_assets,
            year.balance.total_equity,
            year.cash_flow.net,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Revenue CAGR:       {:>8.2}%", summary.revenue_cagr * 100.0);
    println!(
        "  Final Gross Margin: {:>8.2}%",
        summary.final_gross_margin * 100.0
    );
    println!(
        "  Final Net Margin:   {:>8.2}%",
        summary.final_net_margin * 100.0
    );
    println!("  Final Equity:       {:>12.2}", summary.final_equity);
    println!(
        "  Cumulative Net CF:  {:>12.2}",
        summary.cumulative_net_cash_flow
    );

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;

        let income_path = dir.join("income_statement.csv");
        export::write_income_csv(File::create(&income_path)?, &scenario.base, &result)?;

        let balance_path = dir.join("balance_sheet.csv");
        export::write_balance_csv(File::create(&balance_path)?, &scenario.base, &result)?;

        let cash_flow_path = dir.join("cash_flow.csv");
        export::write_cash_flow_csv(File::create(&cash_flow_path)?, &scenario.base, &result)?;

        let ratios_path = dir.join("ratios.csv");
        export::write_ratios_csv(File::create(&ratios_path)?, &result)?;

        println!("\nStatements written to: {}", dir.display());
    }

    Ok(())
}
