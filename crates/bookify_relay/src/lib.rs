// --- File: crates/bookify_relay/src/lib.rs ---
pub mod error;
pub mod message;
pub mod service;

pub use error::RelayError;
pub use message::{build_relay_message, format_message};
pub use service::MailRelayClient;
