//! Valuation models - one module per formula.
//!
//! Each model estimates a fair per-share value from a different angle:
//! earnings and book value (Graham), projected cash generation (DCF), or
//! liquidation assets (NCAV). The estimates are independent; a degenerate
//! result in one never affects the others.

pub mod dcf;
pub mod graham;
pub mod ncav;

pub use dcf::{DiscountedCashFlow, DiscountedCashFlowConfig};
pub use graham::{GrahamNumber, GrahamNumberConfig};
pub use ncav::{NetCurrentAssetValue, NetCurrentAssetValueConfig};
