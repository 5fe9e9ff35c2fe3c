// --- File: crates/bookify_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The contact flow talks to the mail relay only through these traits, so a
//! real HTTP client and an in-process fake are interchangeable.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for delivering booking notifications by email through a form relay.
pub trait MailRelayService: Send + Sync {
    /// Error type returned by relay operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver one message. Any non-success answer is an error.
    fn send(&self, message: RelayMessage) -> BoxFuture<'_, RelayReceipt, Self::Error>;
}

/// Body posted to the relay.
///
/// Field names follow the form-relay convention of underscore-prefixed
/// control fields next to the free-form `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayMessage {
    /// Address the notification email should reply to.
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    /// Subject line of the notification email.
    #[serde(rename = "_subject")]
    pub subject: String,
    /// Preformatted multi-line body.
    pub message: String,
}

/// Represents the result of a relay delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayReceipt {
    /// HTTP status returned by the relay.
    pub status: u16,
}
