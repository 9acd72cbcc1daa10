// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for webdomain.
//!
//! This module contains the business rules of a registered web domain.
//!
//! ## Boundaries
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: "Today" is read through the [`Clock`] port
//! - **Fail fast**: Every mutation is guarded; a rejected value leaves the
//!   entity unchanged
//! - **Rich domain model**: Behavior lives in `WebDomain`, not services
//!
// Public API - what the world sees
pub mod clock;
pub mod entities;
pub mod error;
pub mod renewal;
pub mod value_objects;

// Predicates stay crate-private; `DomainValidator` is the public face.
mod validation;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::{EXPIRY_WARNING_DAYS, WebDomain};
pub use error::{DomainError, ErrorCategory};
pub use renewal::{
    DEFAULT_RENEWAL_BASE_COST, LoyaltyTier, RenewalCycle, RenewalProjection,
};
pub use validation::DomainValidator;
pub use value_objects::{ConcurrenceStatus, DomainExtension, EmailExtensionPolicy};
