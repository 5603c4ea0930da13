//! Order booking and status lifecycle
//!
//! A booking computes the quote exactly once and stores the result. Later
//! reads and status changes never recompute pricing, so menu or discount
//! edits do not affect orders already placed.

use shared::models::{BookingRequest, CateringOrder, OrderLine, OrderStatus};
use shared::pricing::QuantityMode;
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, order};
use crate::services::quote::{QuoteSelection, resolve_quote};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Validate, price and persist a booking
pub async fn book(
    pool: &SqlitePool,
    request: BookingRequest,
    default_mode: QuantityMode,
) -> AppResult<CateringOrder> {
    validate_required_text(&request.customer.name, "customer.name", MAX_NAME_LEN)?;
    validate_email(&request.customer.email, "customer.email")?;
    validate_optional_text(&request.customer.phone, "customer.phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&request.note, "note", MAX_NOTE_LEN)?;
    let event_date = shared::util::parse_event_date(&request.event_date).ok_or_else(|| {
        AppError::new(ErrorCode::InvalidEventDate).with_detail("eventDate", request.event_date.clone())
    })?;

    let quantity_mode = request.quantity_mode.unwrap_or(default_mode);
    let quote = resolve_quote(
        pool,
        QuoteSelection {
            caterer_id: request.caterer_id,
            entries: &request.selected_items,
            guest_count: request.guest_count,
            misc_cost: request.misc_cost,
            quantity_mode,
        },
    )
    .await?;
    if quote.lines.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::EmptySelection,
            "None of the selected items are currently available",
        ));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let lines = quote
        .lines
        .into_iter()
        .map(|line| OrderLine {
            id: shared::util::snowflake_id(),
            order_id: id,
            menu_item_id: line.item_id,
            name: line.name,
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total,
        })
        .collect();

    let booked = CateringOrder {
        id,
        caterer_id: request.caterer_id,
        customer_name: request.customer.name.trim().to_string(),
        customer_email: request.customer.email.trim().to_string(),
        customer_phone: request.customer.phone,
        event_date: event_date.format("%Y-%m-%d").to_string(),
        guest_count: quote.guest_count,
        quantity_mode,
        status: OrderStatus::Pending,
        note: request.note,
        subtotal: quote.result.subtotal,
        misc_cost: quote.result.misc_cost,
        discount_percent: quote.result.discount_percent,
        discount_amount: quote.result.discount_value,
        total: quote.result.final_total,
        lines,
        created_at: now,
        updated_at: now,
    };
    order::insert(pool, &booked).await?;

    tracing::info!(
        order_id = booked.id,
        caterer_id = booked.caterer_id,
        guest_count = booked.guest_count,
        total = booked.total,
        "Order booked"
    );
    Ok(booked)
}

/// Move an order to `next`, enforcing the status lifecycle
pub async fn transition(
    pool: &SqlitePool,
    order_id: i64,
    next: OrderStatus,
) -> AppResult<CateringOrder> {
    let current = order::find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| AppError::order_not_found(order_id))?;

    if current.status == OrderStatus::Cancelled {
        return Err(AppError::new(ErrorCode::OrderAlreadyCancelled).with_detail("order_id", order_id));
    }
    if !current.status.can_transition_to(next) {
        return Err(invalid_transition(order_id, current.status, next));
    }

    let updated = match order::update_status(pool, order_id, current.status, next).await {
        Ok(updated) => updated,
        // Lost a race with another status change
        Err(RepoError::Validation(_)) => {
            return Err(invalid_transition(order_id, current.status, next));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        order_id,
        from = current.status.as_str(),
        to = next.as_str(),
        "Order status changed"
    );
    Ok(updated)
}

fn invalid_transition(order_id: i64, from: OrderStatus, to: OrderStatus) -> AppError {
    AppError::new(ErrorCode::OrderInvalidTransition)
        .with_detail("order_id", order_id)
        .with_detail("from", from.as_str())
        .with_detail("to", to.as_str())
}
