//! Menu Item Model

use serde::{Deserialize, Serialize};

use crate::pricing::SelectedItem;

/// Menu item entity (one dish or service offered by a caterer)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub caterer_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: f64,
    pub is_available: bool,
    /// Menu section, e.g. "Starters"
    pub category: Option<String>,
    /// Dietary type, e.g. "veg" / "non-veg"
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MenuItem {
    /// Calculator view of this item with the requested quantity
    pub fn to_selected(&self, quantity: u32) -> SelectedItem {
        SelectedItem {
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity,
            is_available: self.is_available,
        }
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub description: Option<String>,
    pub unit_price: f64,
    pub is_available: Option<bool>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub is_available: Option<bool>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Menu listing filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuQuery {
    /// Only items a customer can currently order
    #[serde(default)]
    pub available_only: bool,
    pub category: Option<String>,
}
