//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Lengths are counted in characters, not bytes (names carry accents).

use rust_decimal::Decimal;
use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 255;

/// Promotion descriptions
pub const MAX_DESCRIPTION_LEN: usize = 255;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Strictly positive amount
pub fn is_positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Feijoada", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("  ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        // 255 two-byte characters still fit
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&accented, "name", MAX_NAME_LEN).is_ok());
        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&too_long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "name", 5).is_ok());
        assert!(validate_optional_text(&Some("abc".into()), "name", 5).is_ok());
        assert!(validate_optional_text(&Some("".into()), "name", 5).is_err());
        assert!(validate_optional_text(&Some("abcdef".into()), "name", 5).is_err());
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(Decimal::new(1, 2)));
        assert!(!is_positive(Decimal::ZERO));
        assert!(!is_positive(Decimal::from(-3)));
    }
}
