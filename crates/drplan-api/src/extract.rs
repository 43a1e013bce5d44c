//! Typed field extraction from JSON request bodies.
//!
//! Write endpoints validate whole bodies and report every violation at
//! once, the way schema validators do. [`FieldErrors`] accumulates
//! failures while the caller pulls typed fields out of a
//! `serde_json::Value`; if anything was collected, the caller turns the
//! batch into a 400.

use drplan_core::Error;
use serde_json::Value;

use crate::error::{ApiError, FieldError};

/// Accumulator for field-level validation failures.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Record the outcome of a [`drplan_core::validate`] check.
    pub fn check(&mut self, result: drplan_core::Result<()>) {
        if let Err(Error::Validation { field, message }) = result {
            self.errors.push(FieldError {
                field: field.unwrap_or_else(|| "body".to_string()),
                message,
            });
        }
    }

    /// Extract a required string field.
    pub fn require_str(&mut self, body: &Value, field: &str) -> Option<String> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.push(field, "is required");
                None
            }
            Some(value) => match value.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    self.push(field, "must be a string");
                    None
                }
            },
        }
    }

    /// Extract a required number field.
    pub fn require_f64(&mut self, body: &Value, field: &str) -> Option<f64> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.push(field, "is required");
                None
            }
            Some(value) => match value.as_f64() {
                Some(n) => Some(n),
                None => {
                    self.push(field, "must be a number");
                    None
                }
            },
        }
    }

    /// Extract a required integer field.
    pub fn require_int(&mut self, body: &Value, field: &str) -> Option<i64> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.push(field, "is required");
                None
            }
            Some(value) => match value.as_i64() {
                Some(n) => Some(n),
                None => {
                    self.push(field, "must be an integer");
                    None
                }
            },
        }
    }

    /// Extract a required boolean field.
    pub fn require_bool(&mut self, body: &Value, field: &str) -> Option<bool> {
        match body.get(field) {
            None | Some(Value::Null) => {
                self.push(field, "is required");
                None
            }
            Some(value) => match value.as_bool() {
                Some(b) => Some(b),
                None => {
                    self.push(field, "must be a boolean");
                    None
                }
            },
        }
    }

    /// Whether any failure has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the accumulated failures into a 400 response.
    ///
    /// Returns `Ok(())` when nothing was collected.
    pub fn finish(self, message: &str) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(message, self.errors))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
