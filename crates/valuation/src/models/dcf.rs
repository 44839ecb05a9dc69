//! Discounted-cash-flow valuation model.
//!
//! Projects free cash flow over an explicit horizon at a constant growth
//! rate, adds a Gordon-growth terminal value, and normalizes per share.

use crate::{
    FinancialMetrics,
    registry::ModelCategory,
    traits::{ConfigurableModel, ValuationModel},
};

/// Configuration for the discounted-cash-flow model.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct DiscountedCashFlowConfig {
    /// Number of explicitly projected years before the terminal value.
    pub projection_years: u32,
}

impl Default for DiscountedCashFlowConfig {
    fn default() -> Self {
        Self {
            projection_years: 10,
        }
    }
}

/// Discounted-cash-flow valuation model.
///
/// # Formula
///
/// With `d = required_return / 100` and `g = growth_rate / 100`:
///
/// ```text
/// FCF_i  = free_cash_flow × (1 + g)^i          for i = 1..=years
/// PV     = Σ FCF_i / (1 + d)^i
/// TV     = FCF_years × (1 + g) / (d − g)        Gordon growth on year N+1
/// DcfValue = (PV + TV / (1 + d)^years) / shares
/// ```
///
/// Growth is applied before discounting in every iteration, so the year-1
/// cash flow is already grown once. The terminal value reuses the same
/// growth rate as the explicit period.
///
/// Degenerate when `d == g` (terminal value divides by zero) or when
/// `shares == 0`; both propagate as infinity or NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedCashFlow {
    config: DiscountedCashFlowConfig,
}

impl ValuationModel for DiscountedCashFlow {
    fn name(&self) -> &str {
        "discounted_cash_flow"
    }

    fn description(&self) -> &str {
        "Ten-year discounted free cash flow with Gordon-growth terminal value, per share"
    }

    fn category(&self) -> ModelCategory {
        ModelCategory::CashFlow
    }

    fn required_fields(&self) -> &[&str] {
        &["free_cash_flow", "growth_rate", "required_return", "shares"]
    }

    fn value(&self, metrics: &FinancialMetrics) -> f64 {
        let discount_rate = metrics.required_return / 100.0;
        let growth_rate = metrics.growth_rate / 100.0;
        let growth_factor = 1.0 + growth_rate;

        let mut fcf = metrics.free_cash_flow;
        let mut present_value = 0.0;
        for year in 1..=self.config.projection_years {
            fcf *= growth_factor;
            present_value += fcf / (1.0 + discount_rate).powi(year as i32);
        }

        // fcf now holds the final projected year; the perpetuity starts one
        // growth step after it.
        let terminal_value = (fcf * growth_factor) / (discount_rate - growth_rate);
        let present_terminal_value =
            terminal_value / (1.0 + discount_rate).powi(self.config.projection_years as i32);

        (present_value + present_terminal_value) / metrics.shares
    }
}

impl ConfigurableModel for DiscountedCashFlow {
    type Config = DiscountedCashFlowConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
