//! Core trait definitions for valuation models.
//!
//! All models implement the [`ValuationModel`] trait, which provides a
//! unified interface for turning a [`FinancialMetrics`] snapshot into a
//! single per-share figure.

use crate::{FinancialMetrics, registry::ModelCategory};

/// A valuation model computed from a financial-metrics snapshot.
///
/// Implementations are pure functions of their input: the same metrics
/// record always produces the same figure, with no hidden state. A model
/// never returns an error and never panics; degenerate inputs (negative
/// radicand, zero shares, discount rate equal to growth rate) produce NaN
/// or infinity, which the caller is expected to render as-is.
pub trait ValuationModel: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this model.
    ///
    /// Should be snake_case and stable across versions.
    fn name(&self) -> &str;

    /// Human-readable description of what this model estimates.
    fn description(&self) -> &str;

    /// Model category for grouping and analysis.
    fn category(&self) -> ModelCategory;

    /// Names of the [`FinancialMetrics`] fields this model reads.
    ///
    /// Purely informational; every model receives the full record.
    fn required_fields(&self) -> &[&str];

    /// Compute the per-share value for the given metrics snapshot.
    fn value(&self, metrics: &FinancialMetrics) -> f64;
}

/// Marker trait for model configuration types.
///
/// All config types should implement Default, Clone, Send, Sync, and Debug.
pub trait ModelConfig: Default + Clone + Send + Sync + std::fmt::Debug {}

/// A valuation model that supports runtime configuration.
///
/// This trait extends `ValuationModel` to allow customization of formula
/// constants such as the Graham multiplier or the DCF projection horizon.
pub trait ConfigurableModel: ValuationModel {
    /// Configuration type for this model.
    type Config: ModelConfig;

    /// Create a new model with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Returns the current configuration.
    fn config(&self) -> &Self::Config;
}

/// Blanket implementation for any type that satisfies the trait bounds.
impl<T: Default + Clone + Send + Sync + std::fmt::Debug> ModelConfig for T {}
