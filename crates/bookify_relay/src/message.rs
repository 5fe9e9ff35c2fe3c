// --- File: crates/bookify_relay/src/message.rs ---
//! Turns a booking into the text the business owner receives by email.

use bookify_common::models::BookingPayload;
use bookify_common::services::RelayMessage;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Multi-line body embedding every field of the booking.
pub fn format_message(payload: &BookingPayload) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "New booking request");
    let _ = writeln!(body);
    let _ = writeln!(body, "Name: {}", payload.name);
    let _ = writeln!(body, "Email: {}", payload.email);
    let _ = writeln!(body, "Phone: {}", payload.phone);
    let _ = writeln!(body, "Service: {}", payload.service_name);
    let _ = writeln!(body, "Preferred slot: {}", payload.preferred_slot());
    let notes = payload
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("-");
    let _ = writeln!(body, "Notes: {}", notes);
    let _ = writeln!(body);
    let _ = write!(
        body,
        "Submitted at: {}",
        payload.submitted_at.format(TIMESTAMP_FORMAT)
    );
    body
}

/// Relay body replying to the visitor, with `subject` followed by their name.
pub fn build_relay_message(payload: &BookingPayload, subject: &str) -> RelayMessage {
    RelayMessage {
        reply_to: payload.email.clone(),
        subject: format!("{}: {}", subject, payload.name),
        message: format_message(payload),
    }
}
