//! Statistical and behavioural properties of the full engine.
//!
//! These tests run real simulations; tolerances are deliberately loose
//! because the engine derives its seeds from process entropy and every
//! run draws a fresh sample.

use risk_core::matrix::CorrelationMatrix;
use risk_core::types::{PortfolioAsset, SimulationSummary};
use risk_mc::{RiskEngine, SimulationConfig};

fn config(num_simulations: usize) -> SimulationConfig {
    SimulationConfig::builder()
        .num_simulations(num_simulations)
        .time_horizon(1.0 / 252.0)
        .build()
        .unwrap()
}

fn two_asset_engine(num_simulations: usize) -> RiskEngine {
    let assets = vec![
        PortfolioAsset::new("A", 0.6, 0.12, 0.25),
        PortfolioAsset::new("B", 0.4, 0.10, 0.30),
    ];
    let corr = CorrelationMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.3, 1.0]]).unwrap();
    RiskEngine::new(assets, corr, config(num_simulations)).unwrap()
}

#[test]
fn higher_confidence_means_larger_var() {
    let engine = two_asset_engine(50_000);
    let metrics = engine.run_simulation();

    assert!(
        metrics.var_99 >= metrics.var_95,
        "var_99 = {}, var_95 = {}",
        metrics.var_99,
        metrics.var_95
    );
}

#[test]
fn cvar_dominates_var_at_every_level() {
    let engine = two_asset_engine(50_000);
    let metrics = engine.run_simulation();

    assert!(metrics.cvar_95 >= metrics.var_95);
    assert!(metrics.cvar_99 >= metrics.var_99);
}

#[test]
fn single_asset_sample_moments_match_parameters() {
    let assets = vec![PortfolioAsset::new("Solo", 1.0, 0.10, 0.20)];
    let engine =
        RiskEngine::new(assets, CorrelationMatrix::identity(1), config(100_000)).unwrap();
    let metrics = engine.run_simulation();
    let summary = SimulationSummary::from_returns(&metrics.simulation_results);

    let horizon: f64 = 1.0 / 252.0;
    let expected_mean = 0.10 * horizon;
    let expected_std = 0.20 * horizon.sqrt();

    // Mean standard error is sigma / sqrt(N) ~ 4e-5; allow five of
    // those.
    assert!(
        (summary.mean - expected_mean).abs() < 2e-4,
        "sample mean = {}, expected ~{}",
        summary.mean,
        expected_mean
    );
    assert!(
        (summary.std - expected_std).abs() / expected_std < 0.02,
        "sample std = {}, expected ~{}",
        summary.std,
        expected_std
    );
}

#[test]
fn two_asset_scenario_closed_form_figures() {
    let engine = two_asset_engine(100_000);
    let metrics = engine.run_simulation();

    // expected_return = 0.6 * 0.12 + 0.4 * 0.10
    assert!((metrics.expected_return - 0.112).abs() < 1e-12);

    // portfolio_vol = sqrt(0.6^2 * 0.25^2 + 0.4^2 * 0.30^2
    //                      + 2 * 0.6 * 0.4 * 0.25 * 0.30 * 0.3)
    let analytic_vol = (0.6f64.powi(2) * 0.25f64.powi(2)
        + 0.4f64.powi(2) * 0.30f64.powi(2)
        + 2.0 * 0.6 * 0.4 * 0.25 * 0.30 * 0.3)
        .sqrt();
    assert!((metrics.portfolio_vol - analytic_vol).abs() < 1e-12);
    assert!((metrics.portfolio_vol - 0.236).abs() < 0.002);
}

#[test]
fn two_asset_var_near_normal_approximation() {
    let engine = two_asset_engine(100_000);
    let metrics = engine.run_simulation();

    // Normal approximation: 1.645 * sigma_daily - mu_daily.
    let horizon: f64 = 1.0 / 252.0;
    let daily_vol = metrics.portfolio_vol * horizon.sqrt();
    let analytic_var95 = 1.645 * daily_vol - metrics.expected_return * horizon;

    // Loose band: this is a stochastic estimate.
    assert!(
        (metrics.var_95 - analytic_var95).abs() / analytic_var95 < 0.15,
        "var_95 = {}, analytic ~{}",
        metrics.var_95,
        analytic_var95
    );
}

#[test]
fn rerun_with_new_trial_count_leaves_prior_results_untouched() {
    let mut engine = two_asset_engine(10_000);

    let first = engine.run_simulation();
    let first_copy = first.clone();

    engine.set_num_simulations(4_000).unwrap();
    let second = engine.run_simulation();

    assert_eq!(first, first_copy);
    assert_eq!(first.simulation_results.len(), 10_000);
    assert_eq!(second.simulation_results.len(), 4_000);
}

#[test]
fn runs_are_statistically_consistent_but_not_identical() {
    let engine = two_asset_engine(50_000);

    let a = engine.run_simulation();
    let b = engine.run_simulation();

    // Fresh entropy per run: the raw samples differ.
    assert_ne!(a.simulation_results, b.simulation_results);

    // But the estimated risk level agrees within sampling noise.
    assert!((a.var_95 - b.var_95).abs() / a.var_95 < 0.10);
}

#[test]
fn horizon_scales_dispersion() {
    let assets = vec![PortfolioAsset::new("Solo", 1.0, 0.0, 0.20)];
    let mut engine =
        RiskEngine::new(assets, CorrelationMatrix::identity(1), config(50_000)).unwrap();

    let daily = engine.run_simulation();
    let daily_std = SimulationSummary::from_returns(&daily.simulation_results).std;

    engine.set_time_horizon(4.0 / 252.0).unwrap();
    let four_day = engine.run_simulation();
    let four_day_std = SimulationSummary::from_returns(&four_day.simulation_results).std;

    // Dispersion grows with sqrt(h): four days ~ twice the daily std.
    let ratio = four_day_std / daily_std;
    assert!((ratio - 2.0).abs() < 0.1, "ratio = {}", ratio);
}

#[test]
fn weights_are_used_as_given() {
    // Doubling every weight doubles the closed-form figures; the
    // engine never normalises.
    let base = vec![PortfolioAsset::new("A", 1.0, 0.10, 0.20)];
    let levered = vec![PortfolioAsset::new("A", 2.0, 0.10, 0.20)];

    let corr = CorrelationMatrix::identity(1);
    let metrics_base = RiskEngine::new(base, corr.clone(), config(1_000))
        .unwrap()
        .run_simulation();
    let metrics_levered = RiskEngine::new(levered, corr, config(1_000))
        .unwrap()
        .run_simulation();

    assert!((metrics_levered.expected_return - 2.0 * metrics_base.expected_return).abs() < 1e-12);
    assert!((metrics_levered.portfolio_vol - 2.0 * metrics_base.portfolio_vol).abs() < 1e-12);
}
