//! Bounded log of booking submissions
//!
//! Every submission attempt is recorded, whether the relay accepted it or
//! not, so a request is never silently lost. The log lives under one store key
//! as a JSON array and keeps only the newest entries.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use bookify_common::models::BookingPayload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// The mail relay accepted the request
    Sent,
    /// The relay was unreachable or refused the request
    Failed,
    /// The relay is disabled; the request was only recorded here
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub status: LogStatus,
    pub recorded_at: DateTime<Utc>,
    pub payload: BookingPayload,
}

impl LogEntry {
    pub fn new(status: LogStatus, payload: BookingPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            recorded_at: Utc::now(),
            payload,
        }
    }
}

/// Append-only, capped list of [`LogEntry`] values.
#[derive(Clone)]
pub struct BookingLog {
    store: Arc<dyn KeyValueStore>,
    key: String,
    capacity: usize,
}

impl BookingLog {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity,
        }
    }

    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &bookify_config::StoreConfig) -> Self {
        Self::new(store, config.log_key.clone(), config.log_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records `payload` with `status`, dropping the oldest entries beyond capacity.
    pub fn append(&self, status: LogStatus, payload: BookingPayload) -> Result<LogEntry, StoreError> {
        let entry = LogEntry::new(status, payload);
        let mut entries = self.dump()?;
        entries.push(entry.clone());
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
            debug!("Booking log trimmed by {} entries", excess);
        }
        self.store.set(&self.key, serde_json::to_value(&entries)?)?;
        info!(
            "Logged booking {} as {:?} ({} entries)",
            entry.id,
            entry.status,
            entries.len()
        );
        Ok(entry)
    }

    /// All entries, oldest first.
    pub fn dump(&self) -> Result<Vec<LogEntry>, StoreError> {
        match self.store.get(&self.key)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value @ Value::Array(_)) => Ok(serde_json::from_value(value)?),
            Some(other) => Err(StoreError::InvalidValue {
                key: self.key.clone(),
                message: format!("expected an array, found {}", other),
            }),
        }
    }

    /// Removes every entry.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)?;
        info!("Booking log cleared");
        Ok(())
    }
}
