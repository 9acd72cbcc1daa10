//! Renewal cost projection with loyalty discounts.
//!
//! A projection walks forward from the current expiration date one calendar
//! year at a time. Each cycle that *starts* strictly before the target date
//! is charged the base cost times the discount of the tier the domain has
//! reached by then. A cycle starting exactly on the target is not charged.
//!
//! Tenure for a cycle starting on `d` is the number of whole years between
//! the registration date and `d + 1 day`.
//!
//! | Tenure (years) | Tier          | Multiplier |
//! |----------------|---------------|------------|
//! | 0 – 1          | `Standard`    | 1.00       |
//! | 2 – 3          | `Established` | 0.95       |
//! | 4 – 5          | `Loyal`       | 0.90       |
//! | 6 +            | `Veteran`     | 0.85       |

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::domain::error::DomainError;

/// Price of one renewal cycle before discounts.
pub const DEFAULT_RENEWAL_BASE_COST: f64 = 9.99;

const ONE_YEAR: Months = Months::new(12);

/// Loyalty bracket selected by tenure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Standard,
    Established,
    Loyal,
    Veteran,
}

impl LoyaltyTier {
    pub const fn for_tenure(years: u32) -> Self {
        match years {
            0..=1 => Self::Standard,
            2..=3 => Self::Established,
            4..=5 => Self::Loyal,
            _ => Self::Veteran,
        }
    }

    /// Fraction of the base cost charged in this tier.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Established => 0.95,
            Self::Loyal => 0.90,
            Self::Veteran => 0.85,
        }
    }
}

/// One simulated renewal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenewalCycle {
    pub starts_on: NaiveDate,
    pub tenure_years: u32,
    pub tier: LoyaltyTier,
    pub cost: f64,
}

/// Ordered renewal cycles up to a target date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenewalProjection {
    cycles: Vec<RenewalCycle>,
}

impl RenewalProjection {
    pub const fn empty() -> Self {
        Self { cycles: Vec::new() }
    }

    pub fn cycles(&self) -> &[RenewalCycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Sum of cycle costs in charge order, unrounded.
    pub fn raw_total(&self) -> f64 {
        self.cycles.iter().fold(0.0, |total, cycle| total + cycle.cost)
    }

    /// Sum of cycle costs rounded to cents.
    pub fn total(&self) -> f64 {
        round_to_cents(self.raw_total())
    }
}

/// Round half-up on the cents digit.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Whole calendar years from `start` to `end`; 0 if `end` precedes `start`.
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> u32 {
    end.years_since(start).unwrap_or(0)
}

/// `date` plus one calendar year. Feb 29 lands on Feb 28.
pub fn next_anniversary(date: NaiveDate) -> Result<NaiveDate, DomainError> {
    date.checked_add_months(ONE_YEAR)
        .ok_or_else(|| calendar_overflow(date))
}

/// Simulate renewals from `expiration` until `target`.
///
/// Does not look at the current date or the auto-renew flag; the caller
/// owns those guards.
pub fn project(
    registration: NaiveDate,
    expiration: NaiveDate,
    target: NaiveDate,
    base_cost: f64,
) -> Result<RenewalProjection, DomainError> {
    let mut cycles = Vec::new();
    let mut cursor = expiration;

    while cursor < target {
        let day_after = cursor.succ_opt().ok_or_else(|| calendar_overflow(cursor))?;
        let tenure_years = whole_years_between(registration, day_after);
        let tier = LoyaltyTier::for_tenure(tenure_years);

        cycles.push(RenewalCycle {
            starts_on: cursor,
            tenure_years,
            tier,
            cost: base_cost * tier.multiplier(),
        });

        cursor = next_anniversary(cursor)?;
    }

    Ok(RenewalProjection { cycles })
}

fn calendar_overflow(date: NaiveDate) -> DomainError {
    DomainError::InvalidDate {
        field: "target_date",
        reason: format!("renewal after {date} is beyond the supported calendar"),
    }
}
