//! Quote Calculator
//!
//! Computes subtotal, tiered discount, miscellaneous surcharge and final
//! total from one [`PricingInput`] snapshot. Uses rust_decimal internally and
//! reports f64 values rounded to 2 decimal places.
//!
//! The calculation never fails: non-numeric values were already coerced to 0
//! at deserialization, NaN/infinite floats are treated as 0 here, and
//! arithmetic saturates instead of overflowing. Totals are NOT clamped, so a
//! discount above 100% yields a negative final total.

use rust_decimal::prelude::*;

use super::tiers::resolve_discount_percent;
use super::types::{PricingInput, PricingResult, QuantityMode, SelectedItem, TopItem};

/// Rounding precision for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to 2 decimal places
#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Items that take part in pricing and in cart contents
pub fn available_items(items: &[SelectedItem]) -> impl Iterator<Item = &SelectedItem> {
    items.iter().filter(|item| item.is_available)
}

/// `unit_price * quantity * multiplier` for one item
fn line_value(item: &SelectedItem, multiplier: Decimal) -> Decimal {
    to_decimal(item.unit_price)
        .saturating_mul(Decimal::from(item.quantity))
        .saturating_mul(multiplier)
}

/// Rounded value of one line under `mode`, as shown on quote and order lines
pub fn line_total(item: &SelectedItem, mode: QuantityMode, guest_count: u32) -> f64 {
    to_f64(line_value(item, Decimal::from(mode.multiplier(guest_count))))
}

/// Compute the quote for one input snapshot
///
/// # Calculation Steps
/// 1. Drop items that are not available
/// 2. subtotal = Σ unit_price * quantity * multiplier (guest_count or 1)
/// 3. total_before_discount = subtotal + misc_cost
/// 4. discount_percent = highest qualifying tier, else the override, else 0
/// 5. discount_value = total_before_discount * discount_percent / 100
/// 6. final_total = total_before_discount - discount_value
/// 7. top item = largest line value and its share of the subtotal
pub fn compute_quote(input: &PricingInput) -> PricingResult {
    let multiplier = Decimal::from(input.quantity_mode.multiplier(input.guest_count));

    let mut subtotal = Decimal::ZERO;
    let mut top: Option<(&SelectedItem, Decimal)> = None;
    for item in available_items(&input.items) {
        let value = line_value(item, multiplier);
        subtotal = subtotal.saturating_add(value);
        // Strict comparison: on ties the earlier line stays on top
        if top.is_none_or(|(_, best)| value > best) {
            top = Some((item, value));
        }
    }

    let subtotal_rounded = round_money(subtotal);
    let misc_cost = round_money(to_decimal(input.misc_cost));
    let total_before_discount = subtotal_rounded.saturating_add(misc_cost);

    let percent = if !input.discount_rules.is_empty() {
        resolve_discount_percent(&input.discount_rules, input.guest_count)
    } else {
        input.discount_override.unwrap_or(0.0)
    };
    // Percent stays unrounded; only the resulting money value is rounded
    let discount_percent = to_decimal(percent);

    let discount_value = round_money(
        total_before_discount
            .saturating_mul(discount_percent)
            .checked_div(Decimal::ONE_HUNDRED)
            .unwrap_or_default(),
    );
    let final_total = total_before_discount.saturating_sub(discount_value);

    let top_item = top.map(|(item, value)| {
        let share = value
            .saturating_mul(Decimal::ONE_HUNDRED)
            .checked_div(subtotal)
            .unwrap_or_default();
        TopItem {
            name: item.name.clone(),
            highest_value: to_f64(value),
            highest_percent: to_f64(share),
        }
    });

    PricingResult {
        subtotal: to_f64(subtotal_rounded),
        misc_cost: to_f64(misc_cost),
        total_before_discount: to_f64(total_before_discount),
        discount_percent: discount_percent.to_f64().unwrap_or_default(),
        discount_value: to_f64(discount_value),
        final_total: to_f64(final_total),
        top_item,
    }
}
