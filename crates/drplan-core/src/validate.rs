//! Field-level input validation checks.
//!
//! Each check returns `Err(Error::Validation { field, .. })` naming the
//! offending field, so callers can aggregate violations into a field-level
//! error report for API clients.
//!
//! # Example
//!
//! ```rust
//! use drplan_core::validate;
//!
//! assert!(validate::min_len("name", "Jo", 2).is_ok());
//! assert!(validate::min_len("name", "J", 2).is_err());
//! ```

use crate::error::{Error, Result};

/// Check that a string, after trimming, has at least `min` characters.
pub fn min_len(field: &str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(Error::validation_field(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

/// Check that an integer lies within an inclusive range.
pub fn int_range(field: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::validation_field(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Check that a number lies within an inclusive range.
pub fn f64_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(Error::validation_field(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Check that a string is a plausible email address.
///
/// Not a full RFC 5322 parse: one `@`, non-empty local part, and a domain
/// containing a dot, with no whitespace anywhere.
pub fn email(field: &str, value: &str) -> Result<()> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(Error::validation_field(
            field,
            "must be a valid email address",
        ));
    }
    Ok(())
}

/// Check that a string is one of a closed set of allowed values.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(Error::validation_field(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: Error) -> Option<String> {
        match err {
            Error::Validation { field, .. } => field,
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_min_len_accepts_exact() {
        assert!(min_len("name", "ab", 2).is_ok());
    }

    #[test]
    fn test_min_len_trims_whitespace() {
        let err = min_len("name", "  a  ", 2).unwrap_err();
        assert_eq!(field_of(err), Some("name".to_string()));
    }

    #[test]
    fn test_min_len_counts_chars_not_bytes() {
        // Two characters, more than two bytes
        assert!(min_len("name", "éé", 2).is_ok());
    }

    #[test]
    fn test_int_range_bounds_inclusive() {
        assert!(int_range("rating", 1, 1, 5).is_ok());
        assert!(int_range("rating", 5, 1, 5).is_ok());
        assert!(int_range("rating", 0, 1, 5).is_err());
        assert!(int_range("rating", 6, 1, 5).is_err());
    }

    #[test]
    fn test_f64_range_rejects_nan() {
        assert!(f64_range("dataVolume", f64::NAN, 0.0, 100.0).is_err());
        assert!(f64_range("dataVolume", 50.0, 0.0, 100.0).is_ok());
    }

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(email("email", "ops@example.com").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in ["", "no-at-sign", "@example.com", "a@nodot", "a b@example.com", "a@.com"] {
            assert!(email("email", bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_one_of_membership() {
        let allowed = ["Limited", "Moderate", "Extensive"];
        assert!(one_of("budget", "Moderate", &allowed).is_ok());
        let err = one_of("budget", "Lavish", &allowed).unwrap_err();
        assert!(err.to_string().contains("must be one of"));
    }
}
