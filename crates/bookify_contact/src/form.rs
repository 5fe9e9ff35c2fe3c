// --- File: crates/bookify_contact/src/form.rs ---
//! Contact details entered next to the calendar, and their validation.

use bookify_calendar::BookingSelector;
use bookify_common::models::BookingPayload;
use bookify_config::ContactConfig;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `local@domain.tld` without whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email pattern")
});

// --- Error Handling ---
/// Problems with the booking request, phrased for the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please choose a service")]
    MissingService,
    #[error("Please pick a date")]
    MissingDate,
    #[error("Please pick a time")]
    MissingTime,
    #[error("Name must be at least {0} characters long")]
    NameTooShort(usize),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number (at least {0} digits)")]
    InvalidPhone(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// Length limits applied to the contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRules {
    pub min_name_length: usize,
    pub min_phone_length: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

impl ContactRules {
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            min_name_length: config.min_name_length,
            min_phone_length: config.min_phone_length,
        }
    }
}

fn is_valid_phone(phone: &str, min_length: usize) -> bool {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    compact.chars().count() >= min_length
        && compact.chars().all(|c| c.is_ascii_digit() || c == '+')
}

/// Checks the selection and the contact fields, in that order, and builds
/// the payload to send. The first problem found is returned.
pub fn validate(
    selector: &BookingSelector,
    form: &ContactForm,
    rules: &ContactRules,
) -> Result<BookingPayload, ValidationError> {
    let snapshot = selector.booking_data();
    let service = snapshot.service.ok_or(ValidationError::MissingService)?;
    let date = snapshot.date.ok_or(ValidationError::MissingDate)?;
    let time = snapshot.time.ok_or(ValidationError::MissingTime)?;

    let name = form.name.trim();
    if name.chars().count() < rules.min_name_length {
        return Err(ValidationError::NameTooShort(rules.min_name_length));
    }
    let email = form.email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    let phone = form.phone.trim();
    if !is_valid_phone(phone, rules.min_phone_length) {
        return Err(ValidationError::InvalidPhone(rules.min_phone_length));
    }

    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(BookingPayload {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        service_name: selector.service_name(&service),
        service,
        date,
        time,
        formatted_date: snapshot
            .formatted_date
            .unwrap_or_else(|| selector.format_long_date(date)),
        notes,
        submitted_at: Utc::now(),
    })
}
