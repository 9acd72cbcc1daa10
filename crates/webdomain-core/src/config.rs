//! Registry policy.
//!
//! [`RegistryPolicy`] is built once at startup, wrapped in an `Arc`, and
//! handed to every [`WebDomain`](crate::domain::WebDomain) that should
//! follow it. It never changes afterwards.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables prefixed `WEBDOMAIN_`
//!    (`WEBDOMAIN_EMAIL_EXTENSION_POLICY=permissive`)
//! 2. Config file passed to [`RegistryPolicy::load`] (format from extension)
//! 3. Built-in defaults (always present)
//!
//! Every construction path, deserialisation included, goes through
//! [`RegistryPolicy::validate`]. The set of registrable extensions is not
//! configurable.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DEFAULT_RENEWAL_BASE_COST, EmailExtensionPolicy};
use crate::error::{WebDomainError, WebDomainResult};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "WEBDOMAIN";

/// Immutable rules shared by domain records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicySettings")]
pub struct RegistryPolicy {
    email_extension_policy: EmailExtensionPolicy,
    renewal_base_cost: f64,
}

/// Unchecked wire shape of a policy.
#[derive(Deserialize)]
#[serde(default)]
struct PolicySettings {
    email_extension_policy: EmailExtensionPolicy,
    renewal_base_cost: f64,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            email_extension_policy: EmailExtensionPolicy::Restricted,
            renewal_base_cost: DEFAULT_RENEWAL_BASE_COST,
        }
    }
}

impl TryFrom<PolicySettings> for RegistryPolicy {
    type Error = WebDomainError;

    fn try_from(settings: PolicySettings) -> Result<Self, Self::Error> {
        Self::new(settings.email_extension_policy, settings.renewal_base_cost)
    }
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        Self {
            email_extension_policy: EmailExtensionPolicy::Restricted,
            renewal_base_cost: DEFAULT_RENEWAL_BASE_COST,
        }
    }
}

impl RegistryPolicy {
    /// Build a policy, rejecting a base cost that is not a positive amount.
    pub fn new(
        email_extension_policy: EmailExtensionPolicy,
        renewal_base_cost: f64,
    ) -> WebDomainResult<Self> {
        let policy = Self {
            email_extension_policy,
            renewal_base_cost,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Load the policy: defaults, then `path` (if any), then environment.
    pub fn load(path: Option<&Path>) -> WebDomainResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> WebDomainResult<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "email_extension_policy",
                defaults.email_extension_policy.as_str(),
            )?
            .set_default("renewal_base_cost", defaults.renewal_base_cost)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let policy: Self = builder
            .add_source(env.prefix_separator("_").try_parsing(true))
            .build()?
            .try_deserialize()?;

        info!(
            email_extension_policy = %policy.email_extension_policy,
            renewal_base_cost = policy.renewal_base_cost,
            "Registry policy loaded"
        );
        Ok(policy)
    }

    pub fn validate(&self) -> WebDomainResult<()> {
        if !self.renewal_base_cost.is_finite() || self.renewal_base_cost <= 0.0 {
            return Err(WebDomainError::Configuration {
                message: format!(
                    "renewal_base_cost must be a positive amount, got {}",
                    self.renewal_base_cost
                ),
            });
        }
        Ok(())
    }

    /// Which extensions an owner email may use.
    pub const fn email_extension_policy(&self) -> EmailExtensionPolicy {
        self.email_extension_policy
    }

    /// Price of one renewal cycle before loyalty discounts.
    pub const fn renewal_base_cost(&self) -> f64 {
        self.renewal_base_cost
    }

    pub const fn with_email_extension_policy(mut self, policy: EmailExtensionPolicy) -> Self {
        self.email_extension_policy = policy;
        self
    }

    pub fn with_renewal_base_cost(self, renewal_base_cost: f64) -> WebDomainResult<Self> {
        Self::new(self.email_extension_policy, renewal_base_cost)
    }
}
