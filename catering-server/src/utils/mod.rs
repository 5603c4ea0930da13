//! Utilities: error types, logging setup and input validation
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ApiResponse`] - API response envelope (from shared::error)

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
