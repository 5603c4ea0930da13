//! Quote resolution
//!
//! Turns a selection of menu item ids into a [`PricingInput`] using the
//! caterer's stored menu and pricing settings, then runs
//! [`compute_quote`]. Upstream validation (guest count, empty selection,
//! unknown items) happens here; the calculator itself never fails.

use std::collections::HashMap;

use shared::models::{QuoteLine, QuoteResponse, SelectionEntry};
use shared::pricing::{PricingInput, PricingResult, QuantityMode, compute_quote, line_total};
use sqlx::SqlitePool;

use crate::db::repository::{caterer, menu_item};
use crate::utils::validation::{validate_guest_count, validate_misc_cost};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Raw quote parameters shared by the preview and booking endpoints
#[derive(Debug, Clone)]
pub struct QuoteSelection<'a> {
    pub caterer_id: i64,
    pub entries: &'a [SelectionEntry],
    pub guest_count: u32,
    pub misc_cost: Option<f64>,
    pub quantity_mode: QuantityMode,
}

/// A computed quote with the priced lines of the available items
#[derive(Debug, Clone)]
pub struct ResolvedQuote {
    pub guest_count: u32,
    pub quantity_mode: QuantityMode,
    pub lines: Vec<QuoteLine>,
    pub result: PricingResult,
}

impl ResolvedQuote {
    pub fn into_response(self) -> QuoteResponse {
        QuoteResponse::new(
            self.guest_count,
            self.quantity_mode,
            self.lines,
            self.result,
        )
    }
}

pub async fn resolve_quote(
    pool: &SqlitePool,
    selection: QuoteSelection<'_>,
) -> AppResult<ResolvedQuote> {
    validate_guest_count(selection.guest_count)?;
    if selection.entries.is_empty() {
        return Err(AppError::new(ErrorCode::EmptySelection));
    }
    if let Some(misc_cost) = selection.misc_cost {
        validate_misc_cost(misc_cost)?;
    }

    let caterer = caterer::find_by_id(pool, selection.caterer_id)
        .await?
        .ok_or_else(|| AppError::caterer_not_found(selection.caterer_id))?;

    let mut ids: Vec<i64> = selection.entries.iter().map(|e| e.item_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let menu: HashMap<i64, _> = menu_item::find_many(pool, caterer.id, &ids)
        .await?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    let mut items = Vec::with_capacity(selection.entries.len());
    let mut lines = Vec::new();
    for entry in selection.entries {
        let item = menu
            .get(&entry.item_id)
            .ok_or_else(|| AppError::menu_item_not_found(entry.item_id))?;
        let selected = item.to_selected(entry.quantity);
        if selected.is_available {
            lines.push(QuoteLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: entry.quantity,
                line_total: line_total(&selected, selection.quantity_mode, selection.guest_count),
            });
        }
        items.push(selected);
    }

    let misc_cost = selection.misc_cost.unwrap_or(caterer.misc_cost);
    let input = PricingInput::new(selection.guest_count, items)
        .with_misc_cost(misc_cost)
        .with_discount_rules(caterer.discount_rules)
        .with_quantity_mode(selection.quantity_mode);
    let result = compute_quote(&input);

    tracing::debug!(
        caterer_id = caterer.id,
        guest_count = selection.guest_count,
        lines = lines.len(),
        total = result.final_total,
        "Quote computed"
    );

    Ok(ResolvedQuote {
        guest_count: selection.guest_count,
        quantity_mode: selection.quantity_mode,
        lines,
        result,
    })
}
