// --- File: crates/bookify_common/src/lib.rs ---

// Declare modules within this crate
pub mod models; // Data structures shared between crates
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod services; // Service abstractions
pub mod logging; // Logging utilities
pub mod features; // Runtime feature flags

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, storage_error, validation_error,
    BookifyError, Context, UserMessage,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, post_json, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_error, log_result};

pub use features::{is_feature_enabled, is_mail_relay_enabled};
