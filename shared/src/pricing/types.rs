//! Pricing input and result types

use serde::{Deserialize, Serialize};

use super::coerce;

/// One line of an order as seen by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    #[serde(default)]
    pub name: String,
    /// Price as entered by the caterer (no currency conversion)
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub unit_price: f64,
    /// Servings per guest ([`QuantityMode::PerGuest`]) or absolute units
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub quantity: u32,
    /// Only a literal `true` makes the item count
    #[serde(default, deserialize_with = "coerce::strict_true")]
    pub is_available: bool,
}

impl SelectedItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            is_available: true,
        }
    }

    /// Same item flagged as unavailable
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// A tier of the caterer's dynamic pricing table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiscountRule {
    /// Inclusive guest-count threshold
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub min: u32,
    /// Percentage (0-100) granted once the threshold is reached
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub discount: f64,
}

impl DiscountRule {
    pub fn new(min: u32, discount: f64) -> Self {
        Self { min, discount }
    }
}

/// How `quantity` is interpreted when building the subtotal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
pub enum QuantityMode {
    /// `unit_price * quantity * guest_count`
    #[default]
    PerGuest,
    /// `unit_price * quantity`
    Absolute,
}

impl QuantityMode {
    /// Multiplier applied to every line value
    pub fn multiplier(&self, guest_count: u32) -> u32 {
        match self {
            Self::PerGuest => guest_count,
            Self::Absolute => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerGuest => "per_guest",
            Self::Absolute => "absolute",
        }
    }
}

impl std::str::FromStr for QuantityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_guest" | "per-guest" | "perguest" => Ok(Self::PerGuest),
            "absolute" => Ok(Self::Absolute),
            other => Err(format!("unknown quantity mode: {other}")),
        }
    }
}

/// Everything the calculator needs, as one snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub guest_count: u32,
    #[serde(default)]
    pub items: Vec<SelectedItem>,
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub misc_cost: f64,
    #[serde(default)]
    pub discount_rules: Vec<DiscountRule>,
    /// Flat percentage used only when `discount_rules` is empty
    #[serde(default, deserialize_with = "coerce::lenient_opt_f64")]
    pub discount_override: Option<f64>,
    #[serde(default)]
    pub quantity_mode: QuantityMode,
}

impl PricingInput {
    pub fn new(guest_count: u32, items: Vec<SelectedItem>) -> Self {
        Self {
            guest_count,
            items,
            ..Default::default()
        }
    }

    pub fn with_misc_cost(mut self, misc_cost: f64) -> Self {
        self.misc_cost = misc_cost;
        self
    }

    pub fn with_discount_rules(mut self, rules: Vec<DiscountRule>) -> Self {
        self.discount_rules = rules;
        self
    }

    pub fn with_discount_override(mut self, percent: f64) -> Self {
        self.discount_override = Some(percent);
        self
    }

    pub fn with_quantity_mode(mut self, mode: QuantityMode) -> Self {
        self.quantity_mode = mode;
        self
    }
}

/// Highest-value line, for display only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub name: String,
    /// Line value under the same quantity convention as the subtotal
    pub highest_value: f64,
    /// Share of the subtotal in percent (0 when the subtotal is 0)
    pub highest_percent: f64,
}

/// Computed quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: f64,
    /// Surcharge as added to the subtotal (rounded to cents)
    pub misc_cost: f64,
    pub total_before_discount: f64,
    /// Resolved percentage, not rounded
    pub discount_percent: f64,
    pub discount_value: f64,
    pub final_total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_item: Option<TopItem>,
}
