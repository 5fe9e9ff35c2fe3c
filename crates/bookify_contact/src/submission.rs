// --- File: crates/bookify_contact/src/submission.rs ---
//! Sending a booking request.
//!
//! A submission validates the calendar selection and the contact form, posts
//! the request through the mail relay and records it in the local booking
//! log whatever the relay answered. The calendar is reset only on success.

use crate::form::{validate, ContactForm, ContactRules, ValidationError};
use bookify_calendar::BookingSelector;
use bookify_common::models::BookingPayload;
use bookify_common::services::MailRelayService;
use bookify_common::{BookifyError, UserMessage};
use bookify_config::ContactConfig;
use bookify_relay::build_relay_message;
use bookify_store::{BookingLog, LogStatus};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

const SENT_TEXT: &str = "Thank you! Your booking request has been sent. We will confirm it shortly.";
const SAVED_TEXT: &str = "Thank you! Your booking request has been saved. We will contact you to confirm it.";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Invalid booking request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Booking request could not be delivered: {message}")]
    Transport {
        message: String,
        fallback_phone: String,
    },

    #[error("A booking request is already being sent")]
    InFlight,
}

impl UserMessage for SubmissionError {
    fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(e) => e.to_string(),
            SubmissionError::Transport { fallback_phone, .. } => format!(
                "Sorry, your request could not be sent. Please call us at {}.",
                fallback_phone
            ),
            SubmissionError::InFlight => "Please wait, your request is being sent.".to_string(),
        }
    }
}

impl From<SubmissionError> for BookifyError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(e) => BookifyError::ValidationError(e.to_string()),
            SubmissionError::Transport { message, .. } => BookifyError::ExternalServiceError {
                service_name: "mail relay".to_string(),
                message,
            },
            SubmissionError::InFlight => {
                BookifyError::InternalError("submission already in flight".to_string())
            }
        }
    }
}

// --- Banners ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// A message shown to the visitor after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }

    pub fn from_error<E: UserMessage>(err: &E) -> Self {
        Self::error(err.user_message())
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BannerKind::Success => write!(f, "✅ {}", self.text),
            BannerKind::Error => write!(f, "❌ {}", self.text),
        }
    }
}

/// Clears the loading flag when dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// --- Submission ---

/// Submits booking requests through an optional mail relay.
///
/// Without a relay every request is only recorded locally with
/// [`LogStatus::Local`] and treated as accepted.
pub struct ContactSubmission<R: MailRelayService> {
    relay: Option<R>,
    log: BookingLog,
    rules: ContactRules,
    subject: String,
    fallback_phone: String,
    loading: Arc<AtomicBool>,
}

impl<R: MailRelayService> ContactSubmission<R> {
    pub fn new(relay: Option<R>, log: BookingLog, config: &ContactConfig, subject: String) -> Self {
        Self {
            relay,
            log,
            rules: ContactRules::from_config(config),
            subject,
            fallback_phone: config.fallback_phone.clone(),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// `true` while a request is on its way to the relay.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Shared view of the loading flag, for front ends that disable their
    /// submit control while a request is in flight.
    pub fn loading_handle(&self) -> Arc<AtomicBool> {
        self.loading.clone()
    }

    pub fn relay_enabled(&self) -> bool {
        self.relay.is_some()
    }

    pub fn relay(&self) -> Option<&R> {
        self.relay.as_ref()
    }

    pub fn log(&self) -> &BookingLog {
        &self.log
    }

    /// Validates and sends the current selection with `form`.
    ///
    /// Validation failures change nothing. Otherwise the request is logged
    /// whatever the relay answers, and the selector is reset on success.
    pub async fn submit(
        &self,
        selector: &mut BookingSelector,
        form: &ContactForm,
    ) -> Result<Banner, SubmissionError> {
        let payload = validate(selector, form, &self.rules).map_err(|e| {
            info!("Booking request rejected: {}", e);
            SubmissionError::Validation(e)
        })?;

        let Some(relay) = &self.relay else {
            self.record(LogStatus::Local, payload);
            selector.reset();
            return Ok(Banner::success(SAVED_TEXT));
        };

        if self.loading.swap(true, Ordering::SeqCst) {
            return Err(SubmissionError::InFlight);
        }
        let sent = {
            let _guard = LoadingGuard(&self.loading);
            relay
                .send(build_relay_message(&payload, &self.subject))
                .await
        };

        match sent {
            Ok(receipt) => {
                info!("Booking request delivered (status {})", receipt.status);
                self.record(LogStatus::Sent, payload);
                selector.reset();
                Ok(Banner::success(SENT_TEXT))
            }
            Err(e) => {
                error!("Booking request delivery failed: {}", e);
                self.record(LogStatus::Failed, payload);
                Err(SubmissionError::Transport {
                    message: e.to_string(),
                    fallback_phone: self.fallback_phone.clone(),
                })
            }
        }
    }

    /// Storage problems are reported but never change the submission result.
    fn record(&self, status: LogStatus, payload: BookingPayload) {
        if let Err(e) = self.log.append(status, payload) {
            warn!("Could not write booking log entry: {}", e);
        }
    }
}
