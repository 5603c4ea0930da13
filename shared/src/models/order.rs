//! Catering Order Model
//!
//! An order stores the quote frozen at booking time. Detail and confirmation
//! views read these stored values; nothing here recomputes pricing.

use serde::{Deserialize, Serialize};

use super::quote::SelectionEntry;
use crate::pricing::{QuantityMode, coerce};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Allowed moves: PENDING -> CONFIRMED -> COMPLETED, and
    /// PENDING | CONFIRMED -> CANCELLED
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Completed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Booked order with its frozen pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CateringOrder {
    pub id: i64,
    pub caterer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    /// Event date (YYYY-MM-DD)
    pub event_date: String,
    pub guest_count: u32,
    pub quantity_mode: QuantityMode,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub subtotal: f64,
    pub misc_cost: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total: f64,
    #[cfg_attr(feature = "db", sqlx(skip))]
    pub lines: Vec<OrderLine>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Line snapshot taken at booking time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Customer contact captured on the booking form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Booking submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub caterer_id: i64,
    pub customer: CustomerInfo,
    pub event_date: String,
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub guest_count: u32,
    #[serde(default)]
    pub selected_items: Vec<SelectionEntry>,
    #[serde(default, deserialize_with = "coerce::lenient_opt_f64")]
    pub misc_cost: Option<f64>,
    pub quantity_mode: Option<QuantityMode>,
    pub note: Option<String>,
}

/// Status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Order listing filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
}
