// --- File: crates/services/bookify_widget/src/app_state.rs ---
use crate::commands::{Command, HELP};
use bookify_calendar::{
    BookingSelector, CalendarError, CalendarRenderer, IgnoreReason, Outcome, TextRenderer,
};
use bookify_common::{config_error, BookifyError, Context, UserMessage};
use bookify_config::AppConfig;
use bookify_contact::{Banner, ContactSubmission};
use bookify_relay::MailRelayClient;
use bookify_store::{open_store, BookingLog, KeyValueStore, ThemeStore};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Everything the widget needs, wired once at startup and passed by reference.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub selector: BookingSelector,
    pub submission: ContactSubmission<MailRelayClient>,
    pub log: BookingLog,
    pub theme: ThemeStore,
    renderer: TextRenderer,
}

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

impl AppState {
    /// Builds the real components described by `config`.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, BookifyError> {
        let selector = BookingSelector::from_config(&config.calendar).map_err(config_error)?;
        let store = open_store(&config.store)?;
        let relay = MailRelayClient::from_app_config(&config)?;
        Ok(Self::new(config, selector, store, relay))
    }

    /// Wires explicit parts together.
    pub fn new(
        config: Arc<AppConfig>,
        selector: BookingSelector,
        store: Arc<dyn KeyValueStore>,
        relay: Option<MailRelayClient>,
    ) -> Self {
        let log = BookingLog::from_config(store.clone(), &config.store);
        let subject = config
            .mail_relay
            .as_ref()
            .map(|relay_config| relay_config.subject.clone())
            .unwrap_or_else(|| "New booking request".to_string());
        let submission = ContactSubmission::new(relay, log.clone(), &config.contact, subject);
        info!(
            "Widget ready (mail relay {})",
            if submission.relay_enabled() { "on" } else { "off" }
        );
        Self {
            selector,
            submission,
            log,
            theme: ThemeStore::new(store),
            renderer: TextRenderer,
            config,
        }
    }

    pub fn render(&self) -> String {
        self.renderer.render(&self.selector.view())
    }

    /// Runs one command and returns the text to show.
    pub async fn execute(&mut self, command: Command) -> Result<Flow, BookifyError> {
        debug!("Executing {:?}", command);
        let text = match command {
            Command::Next => self.navigate(true),
            Command::Prev => self.navigate(false),
            Command::Day(date) => match self.selector.select_day(date) {
                Outcome::Applied => self.render(),
                Outcome::Ignored(reason) => ignored_text(reason),
            },
            Command::Time(label) => match self.selector.select_time(&label) {
                Ok(Outcome::Applied) => self.render(),
                Ok(Outcome::Ignored(reason)) => ignored_text(reason),
                Err(e @ CalendarError::DateRequired) => Banner::error(e.to_string()).to_string(),
                Err(e) => return Err(config_error(e)),
            },
            Command::Service(id) => {
                self.selector.select_service(&id);
                self.render()
            }
            Command::Services => self.services_text(),
            Command::Show => self.render(),
            Command::Submit(form) => {
                match self.submission.submit(&mut self.selector, &form).await {
                    Ok(banner) => banner.to_string(),
                    Err(e) => Banner::from_error(&e).to_string(),
                }
            }
            Command::Log => self.log_text()?,
            Command::LogClear => {
                self.log.clear()?;
                "Booking log cleared.".to_string()
            }
            Command::Theme => format!("Theme: {}", self.theme.current()?),
            Command::ThemeToggle => format!("Theme: {}", self.theme.toggle()?),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(text))
    }

    fn navigate(&mut self, forward: bool) -> String {
        let outcome = if forward {
            self.selector.advance_week()
        } else {
            self.selector.retreat_week()
        };
        match outcome {
            Outcome::Applied => self.render(),
            Outcome::Ignored(reason) => ignored_text(reason),
        }
    }

    fn services_text(&self) -> String {
        let mut out = String::new();
        for service in &self.selector.settings().services {
            let _ = writeln!(out, "{:<14} {}", service.id, service.name);
        }
        out
    }

    fn log_text(&self) -> Result<String, BookifyError> {
        let entries = self.log.dump()?;
        if entries.is_empty() {
            return Ok("Booking log is empty.".to_string());
        }
        serde_json::to_string_pretty(&entries).context("formatting booking log")
    }
}

fn ignored_text(reason: IgnoreReason) -> String {
    let text = match reason {
        IgnoreReason::PastDate => "That day is in the past.",
        IgnoreReason::ClosedDay => "We are closed on that day.",
        IgnoreReason::SlotUnavailable => "That time is not available.",
        IgnoreReason::UnknownSlot => "There is no such time slot.",
        IgnoreReason::HorizonReached => "Bookings are not open that far ahead yet.",
    };
    text.to_string()
}

/// Banner text for an error reaching the command loop.
pub fn error_text(err: &BookifyError) -> String {
    Banner::error(err.user_message()).to_string()
}
