// ============================================================================
// domain/error.rs - FIELD VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers keep them around while retrying with a fixed value)
/// - Categorizable (for display)
/// - Actionable (provides suggestions)
///
/// A returned error always means the record was left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Format Errors
    // ========================================================================
    #[error("Invalid {field} format: '{value}'")]
    InvalidFormat { field: &'static str, value: String },

    // ========================================================================
    // Missing Values
    // ========================================================================
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    // ========================================================================
    // Date Rule Violations
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidDate { field: &'static str, reason: String },

    // ========================================================================
    // Numeric Bound Violations
    // ========================================================================
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

impl DomainError {
    /// Name of the field (or argument) that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidFormat { field, .. }
            | Self::EmptyField { field }
            | Self::InvalidDate { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFormat { field: "domain", value } => vec![
                format!("'{value}' is not a registrable domain"),
                "Use the form name.ext, e.g. example.com".into(),
                "The name may contain only letters, digits and hyphens".into(),
                "Supported extensions: com, org, net, int, edu, gov, mil".into(),
            ],
            Self::InvalidFormat { field: "owner_email", value } => vec![
                format!("'{value}' is not a valid email address"),
                "Use the form local@host.ext, e.g. owner@example.com".into(),
            ],
            Self::EmptyField { field } => {
                vec![format!("Provide a non-blank value for {field}")]
            }
            Self::InvalidDate { field: "registration_date", .. } => {
                vec!["A registration date cannot lie in the future".into()]
            }
            Self::InvalidDate { field: "expiration_date", .. } => {
                vec!["The expiration date must come after the registration date".into()]
            }
            Self::InvalidDate { field: "target_date", reason } => vec![
                "Choose a target date no earlier than today".into(),
                format!("Details: {reason}"),
            ],
            Self::OutOfRange { field, reason } => vec![
                format!("Check the value given for {field}"),
                format!("Details: {reason}"),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for display styling.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFormat { .. } => ErrorCategory::Format,
            Self::EmptyField { .. } => ErrorCategory::Missing,
            Self::InvalidDate { .. } => ErrorCategory::Date,
            Self::OutOfRange { .. } => ErrorCategory::Range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Missing,
    Date,
    Range,
}
