//! Input validation helpers
//!
//! Text length limits and the checks shared by the CRUD and booking
//! handlers. SQLite TEXT has no built-in length enforcement.

use shared::models::DiscountRuleInput;
use shared::pricing::DiscountRule;

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: caterer, menu item, customer
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, category, dietary type
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Largest accepted guest count
pub const MAX_GUEST_COUNT: u32 = 100_000;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Minimal shape check: one `@` with text on both sides and a dot in the domain
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let valid = value
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        });
    if !valid {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} is not a valid email address"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

// ── Money ───────────────────────────────────────────────────────────

/// Prices must be finite and non-negative
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("{field} must be a non-negative number"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

pub fn validate_misc_cost(value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::new(ErrorCode::InvalidMiscCost).with_detail("field", "miscCost"));
    }
    Ok(())
}

// ── Quote inputs ────────────────────────────────────────────────────

pub fn validate_guest_count(guest_count: u32) -> Result<(), AppError> {
    if guest_count == 0 || guest_count > MAX_GUEST_COUNT {
        return Err(AppError::with_message(
            ErrorCode::InvalidGuestCount,
            format!("Guest count must be between 1 and {MAX_GUEST_COUNT}"),
        )
        .with_detail("guestCount", guest_count));
    }
    Ok(())
}

/// Check and normalize a submitted discount table
///
/// Every row needs both fields, `min >= 1` (whole guests) and
/// `0 <= discount <= 100`. Duplicate floors are rejected. The result is
/// sorted by `min`.
pub fn validate_discount_rules(rows: &[DiscountRuleInput]) -> Result<Vec<DiscountRule>, AppError> {
    let mut rules = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (Some(min), Some(discount)) = (row.min, row.discount) else {
            return Err(AppError::with_message(
                ErrorCode::InvalidDiscountRule,
                "All discount rule fields are required",
            )
            .with_detail("index", index));
        };
        if !min.is_finite() || min < 1.0 || min.fract() != 0.0 || min > u32::MAX as f64 {
            return Err(AppError::with_message(
                ErrorCode::InvalidDiscountRule,
                "Minimum guests must be a whole number of at least 1",
            )
            .with_detail("index", index)
            .with_detail("field", "min"));
        }
        if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
            return Err(AppError::with_message(
                ErrorCode::InvalidDiscountRule,
                "Discount must be between 0 and 100",
            )
            .with_detail("index", index)
            .with_detail("field", "discount"));
        }
        rules.push(DiscountRule::new(min as u32, discount));
    }

    rules.sort_by_key(|rule| rule.min);
    if let Some(pair) = rules.windows(2).find(|pair| pair[0].min == pair[1].min) {
        return Err(AppError::new(ErrorCode::DuplicateDiscountTier).with_detail("min", pair[0].min));
    }
    Ok(rules)
}
