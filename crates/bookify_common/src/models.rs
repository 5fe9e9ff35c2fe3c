// --- File: crates/bookify_common/src/models.rs ---

// Data structures shared by the contact flow, the relay and the local store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A complete booking request: the calendar selection plus contact details.
///
/// This is what gets formatted for the relay and what the local audit log
/// stores, so it carries the resolved service name and date text alongside
/// the raw values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingPayload {
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Service id as selected in the calendar
    pub service: String,
    /// Display name resolved from the service catalog
    pub service_name: String,

    pub date: NaiveDate,
    /// Slot label, `HH:MM`
    pub time: String,
    /// Long-form localized rendering of `date`
    pub formatted_date: String,

    pub notes: Option<String>,

    pub submitted_at: DateTime<Utc>,
}

impl BookingPayload {
    /// "{formatted date}, {time}" as shown to people reading the booking.
    pub fn preferred_slot(&self) -> String {
        format!("{}, {}", self.formatted_date, self.time)
    }
}
