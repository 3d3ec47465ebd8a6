//! REST API handlers.
//!
//! The gateway applies a stricter validation tier than the engine
//! itself (bounded simulation counts, weights summing to one,
//! correlation entries in [-1, 1]) so that malformed requests fail
//! fast with a 400 before any compute is scheduled. The engine core
//! deliberately does not enforce the sum-to-one rule; only this
//! boundary does.

use std::time::Instant;

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use risk_core::matrix::CorrelationMatrix;
use risk_core::types::{PortfolioAsset, SimulationSummary};
use risk_mc::{RiskEngine, SimulationConfig};

use crate::error::ServerError;

/// Inclusive bounds on the requested trial count.
const SIMULATION_BOUNDS: (usize, usize) = (1_000, 1_000_000);

/// Inclusive bounds on the horizon in trading days.
const HORIZON_DAY_BOUNDS: (u32, u32) = (1, 252);

/// Maximum number of assets accepted per request.
const MAX_ASSETS: usize = 100;

/// Tolerance for the weights-sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One asset in a risk request
#[derive(Clone, Deserialize, Serialize)]
pub struct AssetInput {
    pub asset_name: String,
    pub weight: f64,
    pub expected_return: f64,
    pub volatility: f64,
}

/// Risk calculation request
#[derive(Deserialize)]
pub struct RiskRequest {
    pub assets: Vec<AssetInput>,
    /// Defaults to the identity matrix (uncorrelated assets).
    pub correlation_matrix: Option<Vec<Vec<f64>>>,
    /// Defaults to 100 000.
    pub num_simulations: Option<usize>,
    /// Defaults to 1 trading day.
    pub time_horizon_days: Option<u32>,
}

/// Risk calculation response
///
/// The raw per-trial returns are deliberately not serialised: at the
/// default trial count they would add ~800 KB per response. Callers
/// needing the full distribution should embed the engine directly.
#[derive(Serialize)]
pub struct RiskResponse {
    pub var_95: f64,
    pub var_99: f64,
    pub cvar_95: f64,
    pub cvar_99: f64,
    pub expected_return: f64,
    pub portfolio_volatility: f64,
    pub simulation_summary: SimulationSummary,
    pub num_simulations: usize,
    pub time_horizon_days: u32,
    pub calculation_time_ms: f64,
}

/// Sample portfolio response
#[derive(Serialize)]
pub struct SamplePortfolioResponse {
    pub assets: Vec<PortfolioAsset>,
    pub correlation_matrix: Vec<Vec<f64>>,
    pub description: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Sample portfolio endpoint
pub async fn sample_portfolio() -> Json<SamplePortfolioResponse> {
    let (assets, correlation_matrix) = risk_core::types::sample_portfolio();

    Json(SamplePortfolioResponse {
        assets,
        correlation_matrix,
        description: "Sample 3-asset portfolio (AAPL, GOOGL, MSFT) with correlation matrix"
            .to_string(),
    })
}

/// Full VaR/CVaR calculation endpoint
pub async fn calculate_risk(
    Json(request): Json<RiskRequest>,
) -> Result<Json<RiskResponse>, ServerError> {
    let start = Instant::now();

    validate_request(&request)?;

    let num_simulations = request.num_simulations.unwrap_or(100_000);
    let time_horizon_days = request.time_horizon_days.unwrap_or(1);

    let assets: Vec<PortfolioAsset> = request
        .assets
        .iter()
        .map(|a| {
            PortfolioAsset::new(
                a.asset_name.clone(),
                a.weight,
                a.expected_return,
                a.volatility,
            )
        })
        .collect();

    let correlation = match request.correlation_matrix {
        Some(rows) => CorrelationMatrix::from_rows(rows)
            .map_err(risk_mc::EngineError::from)?,
        None => CorrelationMatrix::identity(assets.len()),
    };

    let config = SimulationConfig::new(num_simulations, f64::from(time_horizon_days) / 252.0)?;
    let engine = RiskEngine::new(assets, correlation, config)?;

    // The simulation is CPU-bound and blocking; keep it off the
    // async workers.
    let metrics = tokio::task::spawn_blocking(move || engine.run_simulation())
        .await
        .map_err(|e| ServerError::Internal(format!("simulation task failed: {e}")))?;

    let summary = SimulationSummary::from_returns(&metrics.simulation_results);
    let calculation_time_ms = start.elapsed().as_secs_f64() * 1_000.0;

    info!(
        "Risk calculation completed in {:.2}ms for {} assets, {} simulations",
        calculation_time_ms,
        request.assets.len(),
        num_simulations
    );

    Ok(Json(RiskResponse {
        var_95: metrics.var_95,
        var_99: metrics.var_99,
        cvar_95: metrics.cvar_95,
        cvar_99: metrics.cvar_99,
        expected_return: metrics.expected_return,
        portfolio_volatility: metrics.portfolio_vol,
        simulation_summary: summary,
        num_simulations,
        time_horizon_days,
        calculation_time_ms,
    }))
}

// ============================================================================
// Validation
// ============================================================================

/// Applies the gateway validation tier.
fn validate_request(request: &RiskRequest) -> Result<(), ServerError> {
    if request.assets.is_empty() {
        return Err(ServerError::InvalidRequest(
            "At least one asset is required".to_string(),
        ));
    }
    if request.assets.len() > MAX_ASSETS {
        return Err(ServerError::InvalidRequest(format!(
            "Maximum {} assets allowed, got {}",
            MAX_ASSETS,
            request.assets.len()
        )));
    }

    for asset in &request.assets {
        if !(0.0..=1.0).contains(&asset.weight) {
            return Err(ServerError::InvalidRequest(format!(
                "Weight for '{}' must be between 0 and 1, got {}",
                asset.asset_name, asset.weight
            )));
        }
        if asset.volatility < 0.0 {
            return Err(ServerError::InvalidRequest(format!(
                "Volatility for '{}' must be non-negative, got {}",
                asset.asset_name, asset.volatility
            )));
        }
    }

    let total_weight: f64 = request.assets.iter().map(|a| a.weight).sum();
    if (total_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ServerError::InvalidRequest(format!(
            "Asset weights must sum to 1.0, got {total_weight:.6}"
        )));
    }

    if let Some(n) = request.num_simulations {
        if n < SIMULATION_BOUNDS.0 || n > SIMULATION_BOUNDS.1 {
            return Err(ServerError::InvalidRequest(format!(
                "num_simulations must be in [{}, {}], got {}",
                SIMULATION_BOUNDS.0, SIMULATION_BOUNDS.1, n
            )));
        }
    }

    if let Some(days) = request.time_horizon_days {
        if days < HORIZON_DAY_BOUNDS.0 || days > HORIZON_DAY_BOUNDS.1 {
            return Err(ServerError::InvalidRequest(format!(
                "time_horizon_days must be in [{}, {}], got {}",
                HORIZON_DAY_BOUNDS.0, HORIZON_DAY_BOUNDS.1, days
            )));
        }
    }

    if let Some(matrix) = &request.correlation_matrix {
        for (i, row) in matrix.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(ServerError::InvalidRequest(format!(
                        "Correlation values must be between -1 and 1, got m[{i}][{j}] = {value}"
                    )));
                }
            }
        }
        // Shape, symmetry and diagonal checks run in the engine core.
    }

    Ok(())
}
