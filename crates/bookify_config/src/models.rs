// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Business Hours ---
/// Half-open opening window `[open, close)` in `HH:MM` notation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BusinessHoursConfig {
    pub open: String,
    pub close: String,
}

impl BusinessHoursConfig {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

// --- Service Catalog ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServiceOptionConfig {
    pub id: String,
    pub name: String,
}

impl ServiceOptionConfig {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

// --- Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CalendarConfig {
    /// IANA zone used to decide what "today" is, e.g. "Europe/Warsaw".
    pub time_zone: String,
    /// Locale for date labels, e.g. "en_US" or "pl_PL".
    pub locale: String,
    /// Furthest a displayed week may start, counted from today.
    pub horizon_days: i64,
    /// Bookable slot labels shown for every day.
    pub time_slots: Vec<String>,
    pub weekday_hours: BusinessHoursConfig,
    pub saturday_hours: BusinessHoursConfig,
    /// Slot labels that are always reported as taken.
    pub blackout_slots: Vec<String>,
    pub services: Vec<ServiceOptionConfig>,
    pub fallback_service_name: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: "Europe/Warsaw".to_string(),
            locale: "en_US".to_string(),
            horizon_days: 28,
            time_slots: (8..=19).map(|hour| format!("{hour:02}:00")).collect(),
            weekday_hours: BusinessHoursConfig::new("09:00", "18:00"),
            saturday_hours: BusinessHoursConfig::new("10:00", "16:00"),
            blackout_slots: vec!["12:00".to_string(), "15:00".to_string()],
            services: vec![
                ServiceOptionConfig::new("consultation", "Consultation"),
                ServiceOptionConfig::new("haircut", "Haircut"),
                ServiceOptionConfig::new("coloring", "Coloring"),
                ServiceOptionConfig::new("styling", "Styling"),
            ],
            fallback_service_name: "Other service".to_string(),
        }
    }
}

// --- Mail Relay Config ---
// The endpoint usually carries a private form id, so config files set it to
// "secret_from_env" and the value comes from MAIL_RELAY_ENDPOINT.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MailRelayConfig {
    pub endpoint: String, // Mandatory
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_subject() -> String {
    "New booking request".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// --- Local Store Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file backing the key-value store; in-memory when absent.
    pub path: Option<String>,
    pub log_key: String,
    pub log_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            log_key: "bookings".to_string(),
            log_capacity: 50,
        }
    }
}

// --- Contact Form Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    /// Shown to the visitor when the relay cannot deliver the request.
    pub fallback_phone: String,
    pub min_name_length: usize,
    pub min_phone_length: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            fallback_phone: "+48 123 456 789".to_string(),
            min_name_length: 2,
            min_phone_length: 9,
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stderr only when absent.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_mail_relay: bool,

    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub mail_relay: Option<MailRelayConfig>,
}
