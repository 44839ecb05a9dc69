//! Graham number intrinsic-value model.
//!
//! Benjamin Graham's heuristic for the maximum price a defensive investor
//! should pay, combining earnings power and asset backing in one figure.

use crate::{
    FinancialMetrics,
    registry::ModelCategory,
    traits::{ConfigurableModel, ValuationModel},
};

/// Configuration for the Graham number model.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct GrahamNumberConfig {
    /// Multiplier applied to `eps × book_value` before the square root.
    ///
    /// Graham's classic 22.5 is a P/E of 15 times a P/B of 1.5.
    pub multiplier: f64,
}

impl Default for GrahamNumberConfig {
    fn default() -> Self {
        Self { multiplier: 22.5 }
    }
}

/// Graham number intrinsic-value model.
///
/// # Formula
///
/// ```text
/// GrahamValue = sqrt(22.5 × EPS × BookValuePerShare)
/// ```
///
/// When `eps × book_value` is negative the radicand has no real root and
/// the result is NaN, matching `f64::sqrt` on a negative argument. The
/// model propagates that rather than erroring so callers can still render
/// the other figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrahamNumber {
    config: GrahamNumberConfig,
}

impl ValuationModel for GrahamNumber {
    fn name(&self) -> &str {
        "graham_number"
    }

    fn description(&self) -> &str {
        "Graham number - square root of 22.5 times EPS times book value per share"
    }

    fn category(&self) -> ModelCategory {
        ModelCategory::Intrinsic
    }

    fn required_fields(&self) -> &[&str] {
        &["eps", "book_value"]
    }

    fn value(&self, metrics: &FinancialMetrics) -> f64 {
        (self.config.multiplier * metrics.eps * metrics.book_value).sqrt()
    }
}

impl ConfigurableModel for GrahamNumber {
    type Config = GrahamNumberConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
