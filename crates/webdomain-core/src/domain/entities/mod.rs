pub mod web_domain;

pub use crate::domain::DomainError;
pub use web_domain::{EXPIRY_WARNING_DAYS, WebDomain};
