//! Unified error codes for the menu backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Product errors
//! - 7xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can switch on
/// a stable number instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
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

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product name already used by another product
    ProductNameExists = 6002,
    /// Product has invalid price
    ProductInvalidPrice = 6003,
    /// Category label is not one of the known categories
    ProductCategoryInvalid = 6101,

    // ==================== 7xxx: Promotion ====================
    /// Promotion not found
    PromotionNotFound = 7001,
    /// Time is not HH:mm on a quarter hour
    InvalidTimeFormat = 7002,
    /// End time is not after start time
    InvalidTimeRange = 7003,
    /// Promotional price is not below the product price
    InvalidPromotionalPrice = 7004,
    /// Promotion has no active days
    PromotionDaysEmpty = 7005,

    // ==================== 9xxx: System ====================
    /// Store failure
    DatabaseError = 9002,
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
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductNameExists => "Product name already exists",
            ErrorCode::ProductInvalidPrice => "Product price must be positive",
            ErrorCode::ProductCategoryInvalid => "Invalid category",

            // Promotion
            ErrorCode::PromotionNotFound => "Promotion not found",
            ErrorCode::InvalidTimeFormat => {
                "Invalid time. Use HH:mm format with multiples of 15 minutes (e.g., 18:00, 18:15, 18:30, 18:45)"
            }
            ErrorCode::InvalidTimeRange => "End time must be after start time",
            ErrorCode::InvalidPromotionalPrice => {
                "Promotional price must be lower than the product price"
            }
            ErrorCode::PromotionDaysEmpty => "At least one day is required",

            // System
            ErrorCode::DatabaseError => "Database error",
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
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductNameExists),
            6003 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::ProductCategoryInvalid),

            // Promotion
            7001 => Ok(ErrorCode::PromotionNotFound),
            7002 => Ok(ErrorCode::InvalidTimeFormat),
            7003 => Ok(ErrorCode::InvalidTimeRange),
            7004 => Ok(ErrorCode::InvalidPromotionalPrice),
            7005 => Ok(ErrorCode::PromotionDaysEmpty),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ProductNameExists,
            ErrorCode::InvalidTimeRange,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidPromotionalPrice).unwrap();
        assert_eq!(json, "7004");

        let code: ErrorCode = serde_json::from_str("7002").unwrap();
        assert_eq!(code, ErrorCode::InvalidTimeFormat);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }
}
