//! Net-current-asset-value model.
//!
//! Graham's deep-value screen: what each share would fetch if the company
//! liquidated its current assets and settled every liability today.

use crate::{
    FinancialMetrics,
    registry::ModelCategory,
    traits::{ConfigurableModel, ValuationModel},
};

/// Configuration for the net-current-asset-value model.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct NetCurrentAssetValueConfig;

/// Net-current-asset-value model.
///
/// # Formula
///
/// ```text
/// NcavValue = (CurrentAssets − TotalLiabilities) / Shares
/// ```
///
/// The result goes negative when liabilities exceed current assets, and
/// non-finite when `shares == 0`; both are propagated as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetCurrentAssetValue {
    config: NetCurrentAssetValueConfig,
}

impl ValuationModel for NetCurrentAssetValue {
    fn name(&self) -> &str {
        "net_current_asset_value"
    }

    fn description(&self) -> &str {
        "Current assets minus total liabilities per share - conservative liquidation value"
    }

    fn category(&self) -> ModelCategory {
        ModelCategory::Liquidation
    }

    fn required_fields(&self) -> &[&str] {
        &["net_current_assets", "total_liabilities", "shares"]
    }

    fn value(&self, metrics: &FinancialMetrics) -> f64 {
        (metrics.net_current_assets - metrics.total_liabilities) / metrics.shares
    }
}

impl ConfigurableModel for NetCurrentAssetValue {
    type Config = NetCurrentAssetValueConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ncav_metadata() {
        let model = NetCurrentAssetValue::default();
        assert_eq!(model.name(), "net_current_asset_value");
        assert_eq!(model.category(), ModelCategory::Liquidation);
        assert_eq!(
            model.required_fields(),
            &["net_current_assets", "total_liabilities", "shares"]
        );
    }

    #[test]
    fn test_ncav_basic() {
        let metrics = FinancialMetrics {
            net_current_assets: 1_000_000.0,
            total_liabilities: 400_000.0,
            shares: 100_000.0,
            ..Default::default()
        };

        // (1_000_000 - 400_000) / 100_000 is exact in f64
        assert_eq!(NetCurrentAssetValue::default().value(&metrics), 6.0);
    }

    #[test]
    fn test_ncav_negative_when_liabilities_dominate() {
        let metrics = FinancialMetrics {
            net_current_assets: 100_000.0,
            total_liabilities: 400_000.0,
            shares: 100_000.0,
            ..Default::default()
        };

        assert_eq!(NetCurrentAssetValue::default().value(&metrics), -3.0);
    }

    #[test]
    fn test_ncav_zero_shares_never_panics() {
        let metrics = FinancialMetrics {
            net_current_assets: 1_000_000.0,
            total_liabilities: 400_000.0,
            shares: 0.0,
            ..Default::default()
        };

        let value = NetCurrentAssetValue::default().value(&metrics);
        assert!(value.is_infinite());

        // 0/0 is the fully-degenerate corner
        let value = NetCurrentAssetValue::default().value(&FinancialMetrics::default());
        assert!(value.is_nan());
    }
}
