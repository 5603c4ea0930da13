//! API routes
//!
//! - [`health`] - health checks
//! - [`caterers`] - caterer profile and pricing settings
//! - [`menu`] - menu items
//! - [`quotes`] - quote preview
//! - [`orders`] - booking and order lifecycle

pub mod caterers;
pub mod health;
pub mod menu;
pub mod orders;
pub mod quotes;

pub use crate::utils::{ApiResponse, AppResult};
