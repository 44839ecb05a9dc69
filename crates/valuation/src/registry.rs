//! Model registry for discovery and introspection.
//!
//! The registry provides a centralized way to discover, instantiate, and
//! query valuation models. It supports grouping by category and computing
//! every registered model against one metrics snapshot.

use crate::{FinancialMetrics, Result, ValuationError, traits::ValuationModel};
use derive_more::Display;
use std::collections::HashMap;
use std::sync::Arc;

/// Model category for grouping related valuation approaches.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    /// Intrinsic - earnings-and-assets heuristics
    Intrinsic,
    /// CashFlow - projected cash generation
    CashFlow,
    /// Liquidation - asset-backed floor values
    Liquidation,
}

/// Metadata for model introspection.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Model name (unique identifier)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Model category
    pub category: ModelCategory,
    /// Metrics fields the model reads
    pub required_fields: Vec<String>,
}

/// Registry for model discovery and instantiation.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, Arc<dyn ValuationModel>>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Register all standard models.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(crate::models::GrahamNumber::default()));
        registry.register(Arc::new(crate::models::DiscountedCashFlow::default()));
        registry.register(Arc::new(crate::models::NetCurrentAssetValue::default()));

        registry
    }

    /// Register a model in the registry.
    pub fn register(&mut self, model: Arc<dyn ValuationModel>) {
        self.models.insert(model.name().to_string(), model);
    }

    /// Get a model by name.
    pub fn get(&self, name: &str) -> Option<&dyn ValuationModel> {
        self.models.get(name).map(|m| m.as_ref())
    }

    /// Get models by category.
    pub fn by_category(&self, category: ModelCategory) -> Vec<&dyn ValuationModel> {
        self.models
            .values()
            .filter(|m| m.category() == category)
            .map(|m| m.as_ref())
            .collect()
    }

    /// Get all model metadata.
    pub fn all_info(&self) -> Vec<ModelInfo> {
        self.models
            .values()
            .map(|m| ModelInfo {
                name: m.name().to_string(),
                description: m.description().to_string(),
                category: m.category(),
                required_fields: m.required_fields().iter().map(|s| s.to_string()).collect(),
            })
            .collect()
    }

    /// Get all model names.
    pub fn names(&self) -> Vec<&str> {
        self.models.keys().map(|s| s.as_str()).collect()
    }

    /// Compute one model by name for the given metrics snapshot.
    pub fn compute(&self, name: &str, metrics: &FinancialMetrics) -> Result<f64> {
        self.get(name)
            .map(|m| m.value(metrics))
            .ok_or_else(|| ValuationError::NotFound(name.to_string()))
    }

    /// Compute every registered model for the given metrics snapshot.
    ///
    /// Returns `(name, value)` pairs sorted by model name. Degenerate
    /// figures (NaN, infinity) are carried through like any other value.
    pub fn compute_all(&self, metrics: &FinancialMetrics) -> Vec<(String, f64)> {
        let mut results: Vec<(String, f64)> = self
            .models
            .values()
            .map(|m| (m.name().to_string(), m.value(metrics)))
            .collect();
        results.sort_by(|a, b| a.0.cmp(&b.0));
        results
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
