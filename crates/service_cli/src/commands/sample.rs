//! The `sample` command: emit the bundled demonstration portfolio.

use std::fs;

use serde::Serialize;

use risk_core::types::{sample_portfolio, PortfolioAsset};

use crate::error::Result;

#[derive(Serialize)]
struct SampleOutput {
    assets: Vec<PortfolioAsset>,
    correlation_matrix: Vec<Vec<f64>>,
}

/// Writes the sample portfolio as JSON to `output`, or stdout when no
/// path is given.
pub fn run(output: Option<&str>) -> Result<()> {
    let (assets, correlation_matrix) = sample_portfolio();
    let sample = SampleOutput {
        assets,
        correlation_matrix,
    };
    let json = serde_json::to_string_pretty(&sample)?;

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
