//! The `run` command: load a portfolio, simulate, report.

use std::fs;

use serde::Serialize;
use tracing::info;

use risk_core::matrix::CorrelationMatrix;
use risk_core::types::{PortfolioAsset, RiskMetrics, SimulationSummary};
use risk_mc::{RiskEngine, SimulationConfig};

use crate::error::{CliError, Result};

/// JSON output shape: the metric scalars plus the distribution
/// summary, without the raw per-trial returns.
#[derive(Serialize)]
struct RunReport {
    var_95: f64,
    var_99: f64,
    cvar_95: f64,
    cvar_99: f64,
    expected_return: f64,
    portfolio_vol: f64,
    num_simulations: usize,
    time_horizon_days: u32,
    simulation_summary: SimulationSummary,
}

/// Executes a risk calculation from portfolio and matrix files.
pub fn run(
    portfolio_path: &str,
    correlation_path: Option<&str>,
    simulations: usize,
    horizon_days: u32,
    format: &str,
) -> Result<()> {
    let assets = load_portfolio(portfolio_path)?;
    info!("Loaded {} assets from {}", assets.len(), portfolio_path);

    let correlation = match correlation_path {
        Some(path) => load_correlation(path)?,
        None => CorrelationMatrix::identity(assets.len()),
    };

    let config = SimulationConfig::new(simulations, f64::from(horizon_days) / 252.0)?;
    let engine = RiskEngine::new(assets, correlation, config)?;

    let metrics = engine.run_simulation();
    let summary = SimulationSummary::from_returns(&metrics.simulation_results);

    match format {
        "table" => print_table(&metrics, &summary, simulations, horizon_days),
        "json" => {
            let report = RunReport {
                var_95: metrics.var_95,
                var_99: metrics.var_99,
                cvar_95: metrics.cvar_95,
                cvar_99: metrics.cvar_99,
                expected_return: metrics.expected_return,
                portfolio_vol: metrics.portfolio_vol,
                num_simulations: simulations,
                time_horizon_days: horizon_days,
                simulation_summary: summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => {
            return Err(CliError::BadArgument(format!(
                "unknown output format '{other}' (expected 'table' or 'json')"
            )));
        }
    }

    Ok(())
}

fn load_portfolio(path: &str) -> Result<Vec<PortfolioAsset>> {
    let contents = fs::read_to_string(path)?;
    let assets: Vec<PortfolioAsset> = serde_json::from_str(&contents)?;
    Ok(assets)
}

fn load_correlation(path: &str) -> Result<CorrelationMatrix> {
    let contents = fs::read_to_string(path)?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&contents)?;
    let matrix = CorrelationMatrix::from_rows(rows).map_err(risk_mc::EngineError::from)?;
    Ok(matrix)
}

fn print_table(
    metrics: &RiskMetrics,
    summary: &SimulationSummary,
    simulations: usize,
    horizon_days: u32,
) {
    println!("Risk metrics ({simulations} trials, {horizon_days} day horizon)");
    println!("  VaR 95%          {:>12.6}", metrics.var_95);
    println!("  VaR 99%          {:>12.6}", metrics.var_99);
    println!("  CVaR 95%         {:>12.6}", metrics.cvar_95);
    println!("  CVaR 99%         {:>12.6}", metrics.cvar_99);
    println!("  Expected return  {:>12.6}", metrics.expected_return);
    println!("  Portfolio vol    {:>12.6}", metrics.portfolio_vol);
    println!("Trial distribution");
    println!("  mean             {:>12.6}", summary.mean);
    println!("  std              {:>12.6}", summary.std);
    println!("  min              {:>12.6}", summary.min);
    println!("  max              {:>12.6}", summary.max);
    println!("  skewness         {:>12.4}", summary.skewness);
    println!("  kurtosis         {:>12.4}", summary.kurtosis);
}
