//! Data models
//!
//! Shared between catering-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake values).

pub mod caterer;
pub mod menu_item;
pub mod order;
pub mod quote;

// Re-exports
pub use caterer::*;
pub use menu_item::*;
pub use order::*;
pub use quote::*;
