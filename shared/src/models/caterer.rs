//! Caterer Profile Model

use serde::{Deserialize, Serialize};

use crate::pricing::DiscountRule;

/// Caterer profile with its pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Caterer {
    pub id: i64,
    pub name: String,
    pub contact_email: Option<String>,
    /// Default flat surcharge added to every quote
    pub misc_cost: f64,
    /// Dynamic pricing table, sorted by `min` for display
    #[cfg_attr(feature = "db", sqlx(skip))]
    pub discount_rules: Vec<DiscountRule>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create caterer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatererCreate {
    pub name: String,
    pub contact_email: Option<String>,
    pub misc_cost: Option<f64>,
    pub discount_rules: Option<Vec<DiscountRuleInput>>,
}

/// Update caterer profile payload (pricing goes through [`PricingSettings`])
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatererUpdate {
    pub name: Option<String>,
    pub contact_email: Option<String>,
}

/// Discount tier as submitted by the settings form
///
/// Both fields are optional on the wire so that a half-filled row is reported
/// as a validation error instead of a JSON parse error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRuleInput {
    pub min: Option<f64>,
    pub discount: Option<f64>,
}

/// Replace-all pricing settings payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSettings {
    pub misc_cost: Option<f64>,
    #[serde(default)]
    pub discount_rules: Vec<DiscountRuleInput>,
}

/// Settings-page discount preview query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPreviewQuery {
    #[serde(default, deserialize_with = "crate::pricing::coerce::lenient_u32")]
    pub guest_count: u32,
}
