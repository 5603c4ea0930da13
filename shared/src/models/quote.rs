//! Quote Preview Wire Types
//!
//! Request/response pair of the quote-preview endpoint. The response carries
//! the same numbers [`compute_quote`](crate::pricing::compute_quote) produces
//! for the resolved menu items.

use serde::{Deserialize, Serialize};

use crate::pricing::{PricingResult, QuantityMode, TopItem, coerce};

/// One selected menu item, by id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    pub item_id: i64,
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub quantity: u32,
}

/// Quote preview request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub selected_items: Vec<SelectionEntry>,
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub guest_count: u32,
    /// Per-order override of the caterer's default surcharge
    #[serde(default, deserialize_with = "coerce::lenient_opt_f64")]
    pub misc_cost: Option<f64>,
    pub quantity_mode: Option<QuantityMode>,
}

/// Priced line of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub item_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Quote preview response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub guest_count: u32,
    pub quantity_mode: QuantityMode,
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
    pub misc_cost: f64,
    pub total_before_discount: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_item: Option<TopItem>,
}

impl QuoteResponse {
    pub fn new(
        guest_count: u32,
        quantity_mode: QuantityMode,
        lines: Vec<QuoteLine>,
        result: PricingResult,
    ) -> Self {
        Self {
            guest_count,
            quantity_mode,
            lines,
            subtotal: result.subtotal,
            misc_cost: result.misc_cost,
            total_before_discount: result.total_before_discount,
            discount_percent: result.discount_percent,
            discount_amount: result.discount_value,
            total_cost: result.final_total,
            top_item: result.top_item,
        }
    }
}
