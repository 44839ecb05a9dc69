//! Input and output records for valuation computations.
//!
//! [`FinancialMetrics`] is the complete input snapshot a caller assembles
//! before asking for valuations; [`ValuationResults`] carries the three
//! figures back. Both are plain `Copy` data with no identity or lifecycle.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Per-share and company-level financial inputs for the valuation models.
///
/// All fields are `f64`. Rates (`growth_rate`, `required_return`) are
/// percentages, so `5.0` means 5%. `free_cash_flow`, `net_current_assets`,
/// and `total_liabilities` are absolute currency amounts; `eps` and
/// `book_value` are per share.
///
/// Callers own the input state: construct a fully-formed snapshot and pass
/// it whole. The models never observe a partially-updated record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialMetrics {
    /// Earnings per share.
    pub eps: f64,
    /// Annual growth rate, in percent.
    pub growth_rate: f64,
    /// Required rate of return (discount rate), in percent.
    pub required_return: f64,
    /// Price-to-earnings ratio. Accepted but not read by any current model;
    /// reserved for a future P/E-based fair value.
    pub pe_ratio: f64,
    /// Book value per share.
    pub book_value: f64,
    /// Current-period free cash flow, absolute.
    pub free_cash_flow: f64,
    /// Shares outstanding.
    pub shares: f64,
    /// Current assets, absolute (liabilities not yet subtracted).
    pub net_current_assets: f64,
    /// Total liabilities, absolute.
    pub total_liabilities: f64,
}

impl Default for FinancialMetrics {
    /// A fresh input snapshot: `required_return` at 15%, everything else 0.
    fn default() -> Self {
        Self {
            eps: 0.0,
            growth_rate: 0.0,
            required_return: 15.0,
            pe_ratio: 0.0,
            book_value: 0.0,
            free_cash_flow: 0.0,
            shares: 0.0,
            net_current_assets: 0.0,
            total_liabilities: 0.0,
        }
    }
}

impl FinancialMetrics {
    /// Parse a camelCase JSON document into a metrics record.
    ///
    /// Missing fields take their [`Default`] values, so a partial document
    /// such as `{"eps": 9.0, "bookValue": 50.0}` is accepted.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The three valuation figures produced from one metrics snapshot.
///
/// Each field may be NaN or infinite when the inputs are degenerate (for
/// example `shares == 0`); the models propagate such values rather than
/// erroring, and each figure is computed independently of the other two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResults {
    /// Graham number intrinsic value per share.
    pub graham_value: f64,
    /// Discounted-cash-flow value per share.
    pub dcf_value: f64,
    /// Net current asset value per share.
    pub ncav_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let m = FinancialMetrics::default();
        assert_eq!(m.required_return, 15.0);
        assert_eq!(m.eps, 0.0);
        assert_eq!(m.growth_rate, 0.0);
        assert_eq!(m.pe_ratio, 0.0);
        assert_eq!(m.book_value, 0.0);
        assert_eq!(m.free_cash_flow, 0.0);
        assert_eq!(m.shares, 0.0);
        assert_eq!(m.net_current_assets, 0.0);
        assert_eq!(m.total_liabilities, 0.0);
    }

    #[test]
    fn test_from_json_camel_case() {
        let m = FinancialMetrics::from_json(
            r#"{
                "eps": 9.0,
                "growthRate": 5.0,
                "requiredReturn": 12.0,
                "bookValue": 50.0,
                "freeCashFlow": 1000000.0,
                "shares": 100000.0,
                "netCurrentAssets": 1000000.0,
                "totalLiabilities": 400000.0
            }"#,
        )
        .unwrap();

        assert_eq!(m.eps, 9.0);
        assert_eq!(m.growth_rate, 5.0);
        assert_eq!(m.required_return, 12.0);
        assert_eq!(m.book_value, 50.0);
        // pe_ratio was omitted, so it defaults
        assert_eq!(m.pe_ratio, 0.0);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let m = FinancialMetrics::from_json(r#"{"eps": 3.5}"#).unwrap();
        assert_eq!(m.eps, 3.5);
        assert_eq!(m.required_return, 15.0);
    }

    #[test]
    fn test_from_json_malformed_is_error() {
        assert!(FinancialMetrics::from_json("not json").is_err());
        assert!(FinancialMetrics::from_json(r#"{"eps": "nine"}"#).is_err());
    }
}
