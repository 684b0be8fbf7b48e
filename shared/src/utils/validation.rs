//! Signup field validation helpers
//!
//! The individual predicates are kept free of any error taxonomy so the
//! calling service can apply them in its own priority order.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and spaces only
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").unwrap());

/// Basic mailbox@domain.tld shape with a 2-4 character TLD
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap());

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check that a display name contains only letters and spaces
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Check an email address against the basic signup pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Parse a date of birth in `YYYY-MM-DD` form
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Check the minimum password length rule
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}
