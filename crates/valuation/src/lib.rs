#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod traits;

// Re-export core types
pub use engine::{
    calculate_all_values, calculate_dcf_value, calculate_graham_value, calculate_ncav_value,
};
pub use error::{Result, ValuationError};
pub use metrics::{FinancialMetrics, ValuationResults};
pub use registry::{ModelCategory, ModelInfo, ModelRegistry};
pub use traits::{ConfigurableModel, ModelConfig, ValuationModel};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
