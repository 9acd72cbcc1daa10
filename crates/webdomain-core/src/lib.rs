//! webdomain core
//!
//! Validated web domain records: ownership, hosting, lifecycle dates,
//! concurrency limits and renewal economics.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        config::RegistryPolicy           │
//! │  (email extension policy, base cost)    │
//! └──────────────────┬──────────────────────┘
//!                    │ Arc, shared read-only
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            domain::WebDomain            │
//! │  guarded setters, expiry & usage        │
//! │  queries, renewal projection            │
//! └──────────────────┬──────────────────────┘
//!                    │ asks "today?"
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │             domain::Clock               │
//! │     (SystemClock, FixedClock)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use webdomain_core::prelude::*;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
//! let mut domain = WebDomain::new(
//!     "uoc.edu",
//!     "Gabriel Ferraté i Pascual",
//!     "gferrate@uoc.edu",
//!     "Hosting UOC",
//!     NaiveDate::from_ymd_opt(1995, 3, 15).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
//!     10_000,
//!     true,
//!     true,
//! )
//! .with_clock(Arc::new(FixedClock::new(today)));
//!
//! domain.set_domain("UOC.EDU").unwrap();
//! assert_eq!(domain.domain(), "uoc.edu");
//! assert!(domain.set_domain("uoc.cat").is_err());
//! assert_eq!(domain.domain_concurrence_status(1_000).unwrap(), ConcurrenceStatus::Low);
//! ```

pub mod config;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::config::RegistryPolicy;
    pub use crate::domain::{
        Clock, ConcurrenceStatus, DomainError, DomainExtension, EmailExtensionPolicy,
        FixedClock, LoyaltyTier, RenewalCycle, RenewalProjection, SystemClock, WebDomain,
    };
    pub use crate::error::{WebDomainError, WebDomainResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
