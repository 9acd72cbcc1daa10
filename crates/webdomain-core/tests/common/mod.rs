#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::{Days, Months, NaiveDate};
use tracing_subscriber::EnvFilter;
use webdomain_core::prelude::*;

static TRACING: Once = Once::new();

/// Route library events to the test writer. `RUST_LOG` wins if set.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("webdomain_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn plus_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(12 * years)).unwrap()
}

pub fn minus_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(12 * years)).unwrap()
}

pub fn plus_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap()
}

pub fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap()
}

pub fn minus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap()
}

/// Registered 30 years before `today`, expiring in six months.
pub fn uoc_domain(today: NaiveDate, clock: Arc<dyn Clock>) -> WebDomain {
    init_tracing();
    WebDomain::new(
        "uoc.edu",
        "Gabriel Ferraté i Pascual",
        "gferrate@uoc.edu",
        "Hosting UOC",
        minus_years(today, 30),
        plus_months(today, 6),
        10_000,
        true,
        true,
    )
    .with_clock(clock)
}
