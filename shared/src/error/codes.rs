//! Unified error codes for the catering service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / booking errors
//! - 6xxx: Menu errors
//! - 7xxx: Caterer profile and pricing settings errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that the frontend can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Requested status change is not allowed from the current status
    OrderInvalidTransition = 4002,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4003,
    /// Guest count must be at least 1
    InvalidGuestCount = 4004,
    /// No menu item selected
    EmptySelection = 4005,
    /// Event date is missing or malformed
    InvalidEventDate = 4006,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item name already used by this caterer
    MenuItemNameExists = 6002,
    /// Unit price is negative or not a number
    InvalidPrice = 6003,

    // ==================== 7xxx: Caterer ====================
    /// Caterer not found
    CatererNotFound = 7001,
    /// Discount rule has a missing or out-of-range field
    InvalidDiscountRule = 7002,
    /// Two discount tiers share the same guest threshold
    DuplicateDiscountTier = 7003,
    /// Miscellaneous cost is negative or not a number
    InvalidMiscCost = 7004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Request timed out
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderInvalidTransition => "Order status change is not allowed",
            ErrorCode::OrderAlreadyCancelled => "Order has already been cancelled",
            ErrorCode::InvalidGuestCount => "Guest count must be at least 1",
            ErrorCode::EmptySelection => "Select at least one item",
            ErrorCode::InvalidEventDate => "Event date must be a valid YYYY-MM-DD date",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemNameExists => "Menu item name already exists",
            ErrorCode::InvalidPrice => "Unit price must be a non-negative number",

            // Caterer
            ErrorCode::CatererNotFound => "Caterer not found",
            ErrorCode::InvalidDiscountRule => "All discount rule fields are required",
            ErrorCode::DuplicateDiscountTier => "Discount tiers must have distinct guest thresholds",
            ErrorCode::InvalidMiscCost => "Miscellaneous cost must be a non-negative number",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderInvalidTransition),
            4003 => Ok(ErrorCode::OrderAlreadyCancelled),
            4004 => Ok(ErrorCode::InvalidGuestCount),
            4005 => Ok(ErrorCode::EmptySelection),
            4006 => Ok(ErrorCode::InvalidEventDate),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemNameExists),
            6003 => Ok(ErrorCode::InvalidPrice),

            // Caterer
            7001 => Ok(ErrorCode::CatererNotFound),
            7002 => Ok(ErrorCode::InvalidDiscountRule),
            7003 => Ok(ErrorCode::DuplicateDiscountTier),
            7004 => Ok(ErrorCode::InvalidMiscCost),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
