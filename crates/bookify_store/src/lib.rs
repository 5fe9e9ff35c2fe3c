//! Local persistence for the Bookify widget
//!
//! Everything the widget keeps between runs goes through a small
//! [`KeyValueStore`]: string keys mapping to JSON values. Two backends are
//! provided, an in-memory map and a single JSON file.
//!
//! On top of the store sit:
//!
//! - [`BookingLog`], a bounded audit trail of every submission attempt
//! - [`ThemeStore`], the light/dark preference
//!
//! # Example
//!
//! ```rust
//! use bookify_store::{BookingLog, MemoryStore, ThemeStore, Theme};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let log = BookingLog::new(store.clone(), "bookings", 50);
//! assert!(log.dump().unwrap().is_empty());
//!
//! let theme = ThemeStore::new(store);
//! assert_eq!(theme.toggle().unwrap(), Theme::Dark);
//! ```

pub mod booking_log;
pub mod error;
pub mod kv;
pub mod theme;

// Re-export the store, log and theme types for ease of use
pub use booking_log::{BookingLog, LogEntry, LogStatus};
pub use error::StoreError;
pub use kv::{open_store, FileStore, KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeStore};
