//! Quote Pricing Module
//!
//! The single implementation of the catering quote formula. Every call site
//! (quote preview, booking, settings discount preview) goes through
//! [`compute_quote`]; placed orders keep their frozen totals and are never
//! re-quoted.

pub mod calculator;
pub mod coerce;
pub mod tiers;
mod types;

pub use calculator::{available_items, compute_quote, line_total};
pub use tiers::{
    DiscountPreview, NextTier, applicable_rule, next_rule, preview_discount,
    resolve_discount_percent,
};
pub use types::*;
