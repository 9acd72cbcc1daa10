//! Domain value objects: DomainExtension, EmailExtensionPolicy, ConcurrenceStatus.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold no validation of whole records. Field rules live in
//! `validation.rs`; this file only defines the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DomainExtension ───────────────────────────────────────────────────────────

/// A top-level extension accepted for registration.
///
/// The set is closed. Registering under any other extension is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainExtension {
    Com,
    Org,
    Net,
    Int,
    Edu,
    Gov,
    Mil,
}

impl DomainExtension {
    pub const ALL: [Self; 7] = [
        Self::Com,
        Self::Org,
        Self::Net,
        Self::Int,
        Self::Edu,
        Self::Gov,
        Self::Mil,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Com => "com",
            Self::Org => "org",
            Self::Net => "net",
            Self::Int => "int",
            Self::Edu => "edu",
            Self::Gov => "gov",
            Self::Mil => "mil",
        }
    }
}

impl fmt::Display for DomainExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an extension exactly as written.
///
/// Matching is case-sensitive: callers lowercase first where the rule
/// allows it (domains do, email addresses do not).
impl FromStr for DomainExtension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFormat {
                field: "extension",
                value: s.to_owned(),
            })
    }
}

// ── EmailExtensionPolicy ──────────────────────────────────────────────────────

/// Which top-level extensions an owner email address may end in.
///
/// Parsed and deserialised the same way: case-insensitive, with `strict`
/// and `any` as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EmailExtensionPolicy {
    /// Only the registrable extensions in [`DomainExtension::ALL`].
    #[default]
    Restricted,
    /// Any alphabetic extension of two or more letters.
    Permissive,
}

impl EmailExtensionPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Restricted => "restricted",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for EmailExtensionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailExtensionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "restricted" | "strict" => Ok(Self::Restricted),
            "permissive" | "any" => Ok(Self::Permissive),
            other => Err(DomainError::InvalidFormat {
                field: "email_extension_policy",
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for EmailExtensionPolicy {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── ConcurrenceStatus ─────────────────────────────────────────────────────────

/// Load band of a domain given its current concurrent users.
///
/// Bands are half-open on the upper side: exactly 20% is `Average`,
/// exactly 80% is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcurrenceStatus {
    Low,
    Average,
    High,
}

impl ConcurrenceStatus {
    /// Lower bound (percent, inclusive) of the `Average` band.
    pub const AVERAGE_FROM_PERCENT: i64 = 20;
    /// Lower bound (percent, inclusive) of the `High` band.
    pub const HIGH_FROM_PERCENT: i64 = 80;

    /// Classify `current` out of `max`. `max` must be positive.
    ///
    /// Compares `current * 100` against the scaled thresholds so that the
    /// band edges are exact.
    pub(crate) fn classify(current: i32, max: i32) -> Self {
        debug_assert!(max > 0, "classify needs a positive maximum, got {max}");
        let scaled = i64::from(current) * 100;
        let max = i64::from(max);
        if scaled < max * Self::AVERAGE_FROM_PERCENT {
            Self::Low
        } else if scaled < max * Self::HIGH_FROM_PERCENT {
            Self::Average
        } else {
            Self::High
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ConcurrenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
