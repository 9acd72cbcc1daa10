//! Unified error handling for webdomain-core.
//!
//! This module provides a unified error type that wraps domain validation
//! errors and policy configuration failures.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for webdomain-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WebDomainError {
    /// A field or query argument broke a business rule.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The registry policy could not be loaded or is inconsistent.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl WebDomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check the policy file and WEBDOMAIN_* environment variables".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

// `config::ConfigError` is not `Clone`; keep its rendered message only.
impl From<config::ConfigError> for WebDomainError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

/// Convenient result type alias.
pub type WebDomainResult<T> = Result<T, WebDomainError>;
