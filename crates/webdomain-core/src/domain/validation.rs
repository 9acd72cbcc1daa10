use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    entities::WebDomain,
    error::DomainError,
    value_objects::{DomainExtension, EmailExtensionPolicy},
};

/// Email with one of the registrable extensions (case-sensitive).
static RESTRICTED_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let extensions = DomainExtension::ALL.map(|ext| ext.as_str()).join("|");
    Regex::new(&format!(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.({extensions})$"))
        .expect("restricted email pattern compiles")
});

/// Email with any alphabetic extension of two or more letters.
static PERMISSIVE_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("permissive email pattern compiles")
});

/// `name.ext` once lowercased: exactly one dot, `name` in `[a-z0-9-]+`,
/// `ext` one of [`DomainExtension::ALL`].
pub(crate) fn is_valid_domain(value: &str) -> bool {
    let lowered = value.to_lowercase();
    let mut parts = lowered.split('.');
    let (Some(name), Some(extension), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    is_valid_label(name) && extension.parse::<DomainExtension>().is_ok()
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub(crate) fn is_valid_email(value: &str, policy: EmailExtensionPolicy) -> bool {
    match policy {
        EmailExtensionPolicy::Restricted => RESTRICTED_EMAIL_REGEX.is_match(value),
        EmailExtensionPolicy::Permissive => PERMISSIVE_EMAIL_REGEX.is_match(value),
    }
}

/// Trimmed `value`, or `EmptyField` when nothing is left.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Centralized domain validation.
///
/// Record-level checks for values that did not come through the guarded
/// setters (the unchecked constructor, deserialized state).
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_web_domain(domain: &WebDomain) -> Result<(), DomainError> {
        domain.validate()
    }

    pub fn validate_domain_name(value: &str) -> Result<(), DomainError> {
        if is_valid_domain(value) {
            Ok(())
        } else {
            Err(DomainError::InvalidFormat {
                field: "domain",
                value: value.to_owned(),
            })
        }
    }

    pub fn validate_email(value: &str, policy: EmailExtensionPolicy) -> Result<(), DomainError> {
        if is_valid_email(value, policy) {
            Ok(())
        } else {
            Err(DomainError::InvalidFormat {
                field: "owner_email",
                value: value.to_owned(),
            })
        }
    }
}
