//! The `WebDomain` entity.
//!
//! A `WebDomain` is a registered domain with its owner, hosting, lifecycle
//! dates, concurrency limit and renewal settings. Every field has a guarded
//! setter: a rejected value returns an error and leaves the record exactly
//! as it was.
//!
//! # Construction
//!
//! [`WebDomain::new`] stores its arguments verbatim, so a record built that
//! way may hold values no setter would accept. Use [`WebDomain::try_new`],
//! or call [`WebDomain::validate`] after injecting a policy and clock, when
//! the input is untrusted.
//!
//! # Time
//!
//! "Today" always comes from the record's [`Clock`]; date rules are never
//! evaluated against the wall clock directly.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, instrument, trace};

use crate::config::RegistryPolicy;
use crate::domain::{
    clock::{Clock, SystemClock},
    error::DomainError,
    renewal::{self, RenewalProjection},
    validation::{self, DomainValidator},
    value_objects::ConcurrenceStatus,
};

/// Day distance (either side of expiration) considered "about to expire".
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// A registrable web domain and its business rules.
#[derive(Clone)]
pub struct WebDomain {
    domain: String,
    owner_name: String,
    owner_email: String,
    hosting_provider: String,
    registration_date: NaiveDate,
    expiration_date: NaiveDate,
    max_concurrent_users: i32,
    whois_privacy: bool,
    auto_renew: bool,
    policy: Arc<RegistryPolicy>,
    clock: Arc<dyn Clock>,
}

impl WebDomain {
    /// Build a record from raw values without validating them.
    ///
    /// Uses the default [`RegistryPolicy`] and the [`SystemClock`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: impl Into<String>,
        owner_name: impl Into<String>,
        owner_email: impl Into<String>,
        hosting_provider: impl Into<String>,
        registration_date: NaiveDate,
        expiration_date: NaiveDate,
        max_concurrent_users: i32,
        whois_privacy: bool,
        auto_renew: bool,
    ) -> Self {
        Self {
            domain: domain.into(),
            owner_name: owner_name.into(),
            owner_email: owner_email.into(),
            hosting_provider: hosting_provider.into(),
            registration_date,
            expiration_date,
            max_concurrent_users,
            whois_privacy,
            auto_renew,
            policy: Arc::new(RegistryPolicy::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Same as [`WebDomain::new`], then [`WebDomain::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        domain: impl Into<String>,
        owner_name: impl Into<String>,
        owner_email: impl Into<String>,
        hosting_provider: impl Into<String>,
        registration_date: NaiveDate,
        expiration_date: NaiveDate,
        max_concurrent_users: i32,
        whois_privacy: bool,
        auto_renew: bool,
    ) -> Result<Self, DomainError> {
        Self::new(
            domain,
            owner_name,
            owner_email,
            hosting_provider,
            registration_date,
            expiration_date,
            max_concurrent_users,
            whois_privacy,
            auto_renew,
        )
        .validated()
    }

    pub fn with_policy(mut self, policy: Arc<RegistryPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Consume the record, returning it only if every invariant holds.
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        Ok(self)
    }

    /// Check every field invariant against the current state.
    ///
    /// Fields are checked in declaration order; the first violation wins.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_domain_name(&self.domain)?;
        if self.domain.chars().any(|c| c.is_uppercase()) {
            return Err(DomainError::InvalidFormat {
                field: "domain",
                value: self.domain.clone(),
            });
        }
        validation::require_non_blank("owner_name", &self.owner_name)?;
        DomainValidator::validate_email(&self.owner_email, self.policy.email_extension_policy())?;
        validation::require_non_blank("hosting_provider", &self.hosting_provider)?;
        self.check_registration_date(self.registration_date)?;
        self.check_expiration_date(self.expiration_date)?;
        check_max_concurrent_users(self.max_concurrent_users)
    }

    // ── Getters ──────────────────────────────────────────────────────────────

    pub fn domain(&self) -> &str {
        &self.domain
    }
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }
    pub fn hosting_provider(&self) -> &str {
        &self.hosting_provider
    }
    pub const fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }
    pub const fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }
    pub const fn max_concurrent_users(&self) -> i32 {
        self.max_concurrent_users
    }
    pub const fn whois_privacy(&self) -> bool {
        self.whois_privacy
    }
    pub const fn auto_renew(&self) -> bool {
        self.auto_renew
    }
    pub fn policy(&self) -> &RegistryPolicy {
        &self.policy
    }

    // ── Guarded setters ──────────────────────────────────────────────────────

    /// Set the domain name. Stored lowercased.
    pub fn set_domain(&mut self, value: impl AsRef<str>) -> Result<(), DomainError> {
        let value = value.as_ref();
        DomainValidator::validate_domain_name(value).map_err(rejected)?;
        self.domain = value.to_lowercase();
        trace!(domain = %self.domain, "domain updated");
        Ok(())
    }

    /// Set the owner's name. Stored trimmed.
    pub fn set_owner_name(&mut self, value: impl AsRef<str>) -> Result<(), DomainError> {
        self.owner_name =
            validation::require_non_blank("owner_name", value.as_ref()).map_err(rejected)?;
        trace!(owner_name = %self.owner_name, "owner_name updated");
        Ok(())
    }

    /// Set the owner's email. Stored as given.
    pub fn set_owner_email(&mut self, value: impl AsRef<str>) -> Result<(), DomainError> {
        let value = value.as_ref();
        DomainValidator::validate_email(value, self.policy.email_extension_policy())
            .map_err(rejected)?;
        self.owner_email = value.to_owned();
        trace!(owner_email = %self.owner_email, "owner_email updated");
        Ok(())
    }

    /// Set the hosting provider. Stored trimmed.
    pub fn set_hosting_provider(&mut self, value: impl AsRef<str>) -> Result<(), DomainError> {
        self.hosting_provider =
            validation::require_non_blank("hosting_provider", value.as_ref()).map_err(rejected)?;
        trace!(hosting_provider = %self.hosting_provider, "hosting_provider updated");
        Ok(())
    }

    /// Set the registration date; must not be after today.
    ///
    /// The stored expiration date is not re-checked against the new value.
    pub fn set_registration_date(&mut self, value: NaiveDate) -> Result<(), DomainError> {
        self.check_registration_date(value).map_err(rejected)?;
        self.registration_date = value;
        trace!(registration_date = %value, "registration_date updated");
        Ok(())
    }

    /// Set the expiration date; must be strictly after the stored
    /// registration date.
    pub fn set_expiration_date(&mut self, value: NaiveDate) -> Result<(), DomainError> {
        self.check_expiration_date(value).map_err(rejected)?;
        self.expiration_date = value;
        trace!(expiration_date = %value, "expiration_date updated");
        Ok(())
    }

    pub fn set_max_concurrent_users(&mut self, value: i32) -> Result<(), DomainError> {
        check_max_concurrent_users(value).map_err(rejected)?;
        self.max_concurrent_users = value;
        trace!(max_concurrent_users = value, "max_concurrent_users updated");
        Ok(())
    }

    pub fn set_whois_privacy(&mut self, value: bool) {
        self.whois_privacy = value;
    }

    pub fn set_auto_renew(&mut self, value: bool) {
        self.auto_renew = value;
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Signed days from today to expiration; negative once expired.
    pub fn days_until_expiration(&self) -> i64 {
        self.expiration_date
            .signed_duration_since(self.clock.today())
            .num_days()
    }

    /// Expired only once today is strictly past the expiration date.
    pub fn is_expired(&self) -> bool {
        self.days_until_expiration() < 0
    }

    /// Within [`EXPIRY_WARNING_DAYS`] of expiration, on either side.
    pub fn is_about_to_expire(&self) -> bool {
        self.days_until_expiration().abs() < EXPIRY_WARNING_DAYS
    }

    /// Load band for `current_users` out of the configured maximum.
    pub fn domain_concurrence_status(
        &self,
        current_users: i32,
    ) -> Result<ConcurrenceStatus, DomainError> {
        self.check_current_users(current_users).map_err(rejected)?;
        Ok(ConcurrenceStatus::classify(
            current_users,
            self.max_concurrent_users,
        ))
    }

    /// `current_users` as a percentage of the configured maximum.
    pub fn usage_percentage(&self, current_users: i32) -> Result<f64, DomainError> {
        self.check_current_users(current_users).map_err(rejected)?;
        Ok(f64::from(current_users) / f64::from(self.max_concurrent_users) * 100.0)
    }

    /// Projected renewal spend until `target_date`, rounded to cents.
    ///
    /// `0.0` when auto-renew is off.
    pub fn predicted_renewal_cost_by_date(
        &self,
        target_date: NaiveDate,
    ) -> Result<f64, DomainError> {
        Ok(self.renewal_schedule(target_date)?.total())
    }

    /// The individual renewal cycles behind
    /// [`predicted_renewal_cost_by_date`](Self::predicted_renewal_cost_by_date).
    #[instrument(level = "debug", skip(self), fields(domain = %self.domain))]
    pub fn renewal_schedule(
        &self,
        target_date: NaiveDate,
    ) -> Result<RenewalProjection, DomainError> {
        let today = self.clock.today();
        if target_date < today {
            return Err(rejected(DomainError::InvalidDate {
                field: "target_date",
                reason: format!("{target_date} is before the current date {today}"),
            }));
        }
        if !self.auto_renew {
            debug!("auto-renew disabled, nothing to project");
            return Ok(RenewalProjection::empty());
        }

        let projection = renewal::project(
            self.registration_date,
            self.expiration_date,
            target_date,
            self.policy.renewal_base_cost(),
        )?;
        debug!(
            cycles = projection.len(),
            total = projection.total(),
            "renewal projection computed"
        );
        Ok(projection)
    }

    // ── Rules ────────────────────────────────────────────────────────────────

    fn check_registration_date(&self, value: NaiveDate) -> Result<(), DomainError> {
        let today = self.clock.today();
        if value > today {
            return Err(DomainError::InvalidDate {
                field: "registration_date",
                reason: format!("{value} is after the current date {today}"),
            });
        }
        Ok(())
    }

    fn check_expiration_date(&self, value: NaiveDate) -> Result<(), DomainError> {
        if value <= self.registration_date {
            return Err(DomainError::InvalidDate {
                field: "expiration_date",
                reason: format!(
                    "{value} is not after the registration date {}",
                    self.registration_date
                ),
            });
        }
        Ok(())
    }

    fn check_current_users(&self, current_users: i32) -> Result<(), DomainError> {
        check_max_concurrent_users(self.max_concurrent_users)?;
        if !(0..=self.max_concurrent_users).contains(&current_users) {
            return Err(DomainError::OutOfRange {
                field: "current_users",
                reason: format!(
                    "{current_users} is outside 0..={}",
                    self.max_concurrent_users
                ),
            });
        }
        Ok(())
    }
}

fn check_max_concurrent_users(value: i32) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::OutOfRange {
            field: "max_concurrent_users",
            reason: format!("{value} must be greater than 0"),
        });
    }
    Ok(())
}

fn rejected(err: DomainError) -> DomainError {
    debug!(field = err.field(), error = %err, "update rejected");
    err
}

impl fmt::Debug for WebDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDomain")
            .field("domain", &self.domain)
            .field("owner_name", &self.owner_name)
            .field("owner_email", &self.owner_email)
            .field("hosting_provider", &self.hosting_provider)
            .field("registration_date", &self.registration_date)
            .field("expiration_date", &self.expiration_date)
            .field("max_concurrent_users", &self.max_concurrent_users)
            .field("whois_privacy", &self.whois_privacy)
            .field("auto_renew", &self.auto_renew)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for WebDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, expires {})",
            self.domain, self.owner_name, self.expiration_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::{FixedClock, MockClock};
    use crate::domain::value_objects::EmailExtensionPolicy;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 3, 15)
    }

    fn record() -> WebDomain {
        WebDomain::new(
            "uoc.edu",
            "Gabriel Ferraté i Pascual",
            "gferrate@uoc.edu",
            "Hosting UOC",
            date(1995, 3, 15),
            date(2025, 9, 15),
            10_000,
            true,
            true,
        )
        .with_clock(Arc::new(FixedClock::new(today())))
    }

    #[test]
    fn constructor_stores_values_verbatim() {
        let raw = WebDomain::new(
            "NOT A DOMAIN",
            "  ",
            "nope",
            "",
            date(2999, 1, 1),
            date(1999, 1, 1),
            -5,
            false,
            false,
        );
        assert_eq!(raw.domain(), "NOT A DOMAIN");
        assert_eq!(raw.owner_name(), "  ");
        assert_eq!(raw.max_concurrent_users(), -5);
        assert!(raw.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_broken_field() {
        let mut raw = record();
        raw.domain = "UOC.EDU".into();
        assert_eq!(raw.validate().unwrap_err().field(), "domain");

        let mut raw = record();
        raw.hosting_provider = "   ".into();
        assert_eq!(
            raw.validate().unwrap_err(),
            DomainError::EmptyField { field: "hosting_provider" }
        );

        let mut raw = record();
        raw.expiration_date = raw.registration_date;
        assert_eq!(raw.validate().unwrap_err().field(), "expiration_date");

        let mut raw = record();
        raw.max_concurrent_users = 0;
        assert_eq!(raw.validate().unwrap_err().field(), "max_concurrent_users");
    }

    #[test]
    fn rejected_setter_leaves_state_untouched() {
        let mut domain = record();
        let before = format!("{domain:?}");
        assert!(domain.set_domain("cv.uoc.edu").is_err());
        assert!(domain.set_owner_name("").is_err());
        assert!(domain.set_owner_email("x@y.io").is_err());
        assert!(domain.set_registration_date(date(2025, 3, 16)).is_err());
        assert!(domain.set_expiration_date(date(1990, 1, 1)).is_err());
        assert!(domain.set_max_concurrent_users(0).is_err());
        assert_eq!(format!("{domain:?}"), before);
    }

    #[test]
    fn permissive_policy_widens_email_extensions() {
        let policy = RegistryPolicy::default()
            .with_email_extension_policy(EmailExtensionPolicy::Permissive);
        let mut domain = record().with_policy(Arc::new(policy));
        domain.set_owner_email("owner@startup.io").unwrap();
        assert_eq!(domain.owner_email(), "owner@startup.io");

        let mut strict = record();
        assert!(strict.set_owner_email("owner@startup.io").is_err());
    }

    #[test]
    fn registration_rule_reads_injected_clock() {
        let mut clock = MockClock::new();
        clock.expect_today().times(1).return_const(date(2000, 1, 1));
        let mut domain = record().with_clock(Arc::new(clock));

        let err = domain.set_registration_date(date(2000, 1, 2)).unwrap_err();
        assert_eq!(err.field(), "registration_date");
    }

    #[test]
    fn expiry_queries_use_signed_day_distance() {
        let mut domain = record();
        domain.set_expiration_date(today()).unwrap();
        assert_eq!(domain.days_until_expiration(), 0);
        assert!(!domain.is_expired());
        assert!(domain.is_about_to_expire());

        domain.set_expiration_date(date(2025, 2, 14)).unwrap();
        assert_eq!(domain.days_until_expiration(), -29);
        assert!(domain.is_expired());
        assert!(domain.is_about_to_expire());

        domain.set_expiration_date(date(2025, 2, 13)).unwrap();
        assert!(!domain.is_about_to_expire());
    }

    #[test]
    fn concurrence_requires_positive_maximum() {
        let mut domain = record();
        domain.max_concurrent_users = 0;
        let err = domain.domain_concurrence_status(0).unwrap_err();
        assert_eq!(err.field(), "max_concurrent_users");
    }

    #[test]
    fn concurrence_bounds_are_inclusive() {
        let mut domain = record();
        domain.set_max_concurrent_users(10).unwrap();
        assert_eq!(domain.domain_concurrence_status(0).unwrap(), ConcurrenceStatus::Low);
        assert_eq!(domain.domain_concurrence_status(10).unwrap(), ConcurrenceStatus::High);
        assert!(domain.domain_concurrence_status(-1).is_err());
        assert!(domain.domain_concurrence_status(11).is_err());
        assert_eq!(domain.usage_percentage(5).unwrap(), 50.0);
    }

    #[test]
    fn projection_uses_policy_base_cost() {
        let policy = RegistryPolicy::default()
            .with_renewal_base_cost(10.0)
            .unwrap();
        let domain = record().with_policy(Arc::new(policy));
        // Two cycles at tenure 30+: 2 * 10.0 * 0.85
        let cost = domain
            .predicted_renewal_cost_by_date(date(2026, 9, 16))
            .unwrap();
        assert_eq!(cost, 17.0);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(
            record().to_string(),
            "uoc.edu (Gabriel Ferraté i Pascual, expires 2025-09-15)"
        );
    }
}
