//! Free-function entry points over the default-configured models.
//!
//! The classic formulas need no configuration, so most callers want these
//! four functions rather than the trait machinery. Each is a pure function
//! of its input; nothing is cached or memoized between calls.

use crate::{
    FinancialMetrics, ValuationResults,
    models::{DiscountedCashFlow, GrahamNumber, NetCurrentAssetValue},
    traits::ValuationModel,
};

/// Graham number: `sqrt(22.5 × eps × book_value)`.
///
/// NaN when `eps × book_value` is negative.
pub fn calculate_graham_value(metrics: &FinancialMetrics) -> f64 {
    GrahamNumber::default().value(metrics)
}

/// Ten-year discounted free cash flow plus Gordon-growth terminal value,
/// per share.
///
/// Non-finite when `shares == 0` or the discount rate equals the growth
/// rate.
pub fn calculate_dcf_value(metrics: &FinancialMetrics) -> f64 {
    DiscountedCashFlow::default().value(metrics)
}

/// Net current asset value per share:
/// `(net_current_assets − total_liabilities) / shares`.
///
/// Non-finite when `shares == 0`.
pub fn calculate_ncav_value(metrics: &FinancialMetrics) -> f64 {
    NetCurrentAssetValue::default().value(metrics)
}

/// Compute all three valuations for one metrics snapshot.
///
/// The embedding caller owns the input state: assemble a fully-formed
/// snapshot after each complete update and call this again. Every call
/// recomputes all three figures from scratch; identical snapshots yield
/// bit-identical results, and the three figures are independent, so a
/// degenerate value in one never affects the other two.
pub fn calculate_all_values(metrics: &FinancialMetrics) -> ValuationResults {
    ValuationResults {
        graham_value: calculate_graham_value(metrics),
        dcf_value: calculate_dcf_value(metrics),
        ncav_value: calculate_ncav_value(metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> FinancialMetrics {
        FinancialMetrics {
            eps: 9.0,
            growth_rate: 5.0,
            required_return: 15.0,
            pe_ratio: 18.0,
            book_value: 50.0,
            free_cash_flow: 1_000_000.0,
            shares: 100_000.0,
            net_current_assets: 1_000_000.0,
            total_liabilities: 400_000.0,
        }
    }

    #[test]
    fn test_all_values_matches_individual_functions() {
        let metrics = sample_metrics();
        let all = calculate_all_values(&metrics);

        assert_eq!(
            all.graham_value.to_bits(),
            calculate_graham_value(&metrics).to_bits()
        );
        assert_eq!(
            all.dcf_value.to_bits(),
            calculate_dcf_value(&metrics).to_bits()
        );
        assert_eq!(
            all.ncav_value.to_bits(),
            calculate_ncav_value(&metrics).to_bits()
        );
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let metrics = sample_metrics();
        let first = calculate_all_values(&metrics);
        let second = calculate_all_values(&metrics);

        assert_eq!(first.graham_value.to_bits(), second.graham_value.to_bits());
        assert_eq!(first.dcf_value.to_bits(), second.dcf_value.to_bits());
        assert_eq!(first.ncav_value.to_bits(), second.ncav_value.to_bits());
    }

    #[test]
    fn test_results_independent_of_computation_order() {
        let metrics = sample_metrics();

        // Reverse the order the figures are produced in; none may change.
        let ncav = calculate_ncav_value(&metrics);
        let dcf = calculate_dcf_value(&metrics);
        let graham = calculate_graham_value(&metrics);

        let all = calculate_all_values(&metrics);
        assert_eq!(all.graham_value.to_bits(), graham.to_bits());
        assert_eq!(all.dcf_value.to_bits(), dcf.to_bits());
        assert_eq!(all.ncav_value.to_bits(), ncav.to_bits());
    }

    #[test]
    fn test_degenerate_field_does_not_block_the_others() {
        // Negative earnings poison only the Graham figure.
        let metrics = FinancialMetrics {
            eps: -4.0,
            book_value: 10.0,
            ..sample_metrics()
        };

        let all = calculate_all_values(&metrics);
        assert!(all.graham_value.is_nan());
        assert!(all.dcf_value.is_finite());
        assert!(all.ncav_value.is_finite());
    }

    #[test]
    fn test_pe_ratio_is_inert() {
        let mut metrics = sample_metrics();
        let before = calculate_all_values(&metrics);

        metrics.pe_ratio = 99.0;
        let after = calculate_all_values(&metrics);

        assert_eq!(before, after);
    }
}
