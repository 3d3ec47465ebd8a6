//! Portfolio asset representation.

use serde::{Deserialize, Serialize};

/// One asset in the simulated portfolio.
///
/// Weights are used exactly as given: the engine performs no
/// normalisation, so a portfolio whose weights do not sum to one
/// produces proportionally scaled return and volatility figures.
/// Callers wanting a sum-to-one guarantee must enforce it at their own
/// boundary.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::PortfolioAsset;
///
/// let asset = PortfolioAsset::new("AAPL", 0.4, 0.12, 0.25);
/// assert_eq!(asset.weight, 0.4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAsset {
    /// Asset identifier.
    pub name: String,
    /// Portfolio weight.
    pub weight: f64,
    /// Expected annual return.
    pub expected_return: f64,
    /// Annualised volatility.
    pub volatility: f64,
}

impl PortfolioAsset {
    /// Creates a new asset.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        expected_return: f64,
        volatility: f64,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            expected_return,
            volatility,
        }
    }
}

/// Returns the bundled three-asset demonstration portfolio and its
/// correlation matrix rows.
///
/// Useful as a smoke-test fixture and served by the gateway's
/// sample-portfolio endpoint.
pub fn sample_portfolio() -> (Vec<PortfolioAsset>, Vec<Vec<f64>>) {
    let assets = vec![
        PortfolioAsset::new("AAPL", 0.4, 0.12, 0.25),
        PortfolioAsset::new("GOOGL", 0.3, 0.10, 0.30),
        PortfolioAsset::new("MSFT", 0.3, 0.11, 0.28),
    ];

    let correlation = vec![
        vec![1.0, 0.7, 0.8],
        vec![0.7, 1.0, 0.6],
        vec![0.8, 0.6, 1.0],
    ];

    (assets, correlation)
}
