//! Shared types for the catering quote service
//!
//! Domain models, the error/response envelope and the quote calculator.
//! Nothing in this crate performs I/O; database derives are gated behind
//! the `db` feature.

pub mod error;
pub mod models;
pub mod pricing;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use pricing::{PricingInput, PricingResult, compute_quote};
pub use serde::{Deserialize, Serialize};
