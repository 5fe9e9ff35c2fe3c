// --- File: crates/bookify_calendar/src/logic.rs ---
use crate::availability::{SlotAvailability, StaticBlackout};
use crate::clock::{Clock, SystemClock};
use bookify_config::{BusinessHoursConfig, CalendarConfig};
use chrono::{Datelike, Duration, Locale, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A time slot was picked while no day is selected.
    #[error("Please pick a date first")]
    DateRequired,
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("Invalid business hours: {0}")]
    InvalidHours(String),
    #[error("Booking horizon must be between 0 and 366 days, got {0}")]
    InvalidHorizon(i64),
    #[error("Booked slot ledger lock poisoned")]
    LedgerPoisoned,
}

const SLOT_LABEL_FORMAT: &str = "%H:%M";
const LONG_DATE_FORMAT: &str = "%A, %-d %B %Y";
const SHORT_DATE_FORMAT: &str = "%a %-d %b";
const DAY_LABEL_FORMAT: &str = "%a %d.%m";
const MAX_HORIZON_DAYS: i64 = 366;
/// Monday to Saturday.
const DISPLAYED_DAYS: i64 = 6;

/// Parses an `HH:MM` slot label.
pub fn parse_slot_label(label: &str) -> Result<NaiveTime, CalendarError> {
    NaiveTime::parse_from_str(label.trim(), SLOT_LABEL_FORMAT)
        .map_err(|e| CalendarError::TimeParseError(format!("'{}': {}", label, e)))
}

pub fn format_slot_label(time: NaiveTime) -> String {
    time.format(SLOT_LABEL_FORMAT).to_string()
}

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

// --- Data Structures ---

/// Opening window `[open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl BusinessHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, CalendarError> {
        if close <= open {
            return Err(CalendarError::InvalidHours(format!(
                "close {} is not after open {}",
                close, open
            )));
        }
        Ok(Self { open, close })
    }

    pub fn from_config(config: &BusinessHoursConfig) -> Result<Self, CalendarError> {
        Self::new(parse_slot_label(&config.open)?, parse_slot_label(&config.close)?)
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.open <= time && time < self.close
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
}

/// Everything the selector needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct SelectorSettings {
    /// How far ahead of today a displayed week may start.
    pub horizon: Duration,
    pub time_slots: Vec<NaiveTime>,
    pub weekday_hours: BusinessHours,
    pub saturday_hours: BusinessHours,
    pub services: Vec<ServiceOption>,
    pub fallback_service_name: String,
    pub locale: Locale,
}

impl SelectorSettings {
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let time_slots = config
            .time_slots
            .iter()
            .map(|label| parse_slot_label(label))
            .collect::<Result<Vec<_>, _>>()?;
        let locale = Locale::try_from(config.locale.as_str())
            .map_err(|_| CalendarError::UnknownLocale(config.locale.clone()))?;

        if !(0..=MAX_HORIZON_DAYS).contains(&config.horizon_days) {
            return Err(CalendarError::InvalidHorizon(config.horizon_days));
        }

        Ok(Self {
            horizon: Duration::days(config.horizon_days),
            time_slots,
            weekday_hours: BusinessHours::from_config(&config.weekday_hours)?,
            saturday_hours: BusinessHours::from_config(&config.saturday_hours)?,
            services: config
                .services
                .iter()
                .map(|s| ServiceOption {
                    id: s.id.clone(),
                    name: s.name.clone(),
                })
                .collect(),
            fallback_service_name: config.fallback_service_name.clone(),
            locale,
        })
    }

    /// Opening hours for `weekday`; `None` on Sunday.
    pub fn business_hours(&self, weekday: Weekday) -> Option<BusinessHours> {
        match weekday {
            Weekday::Sun => None,
            Weekday::Sat => Some(self.saturday_hours),
            _ => Some(self.weekday_hours),
        }
    }
}

/// How a displayed day is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayClass {
    Past,
    WeekendRestricted,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub label: String,
    pub class: DayClass,
    pub selected: bool,
}

impl DaySlot {
    pub fn is_selectable(&self) -> bool {
        self.class != DayClass::Past
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub label: String,
    pub available: bool,
    pub selected: bool,
}

/// The mutable state of the selector. A new date always clears the time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub service: Option<String>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some() && self.service.is_some()
    }
}

/// Normalized read of the selection, handed to the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingSnapshot {
    pub service: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    /// Long-form localized date, present exactly when `date` is.
    pub formatted_date: Option<String>,
}

impl BookingSnapshot {
    pub fn is_complete(&self) -> bool {
        self.service.is_some() && self.date.is_some() && self.time.is_some()
    }
}

/// Render-ready picture of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub week_label: String,
    pub can_advance: bool,
    pub days: Vec<DaySlot>,
    pub time_slots: Vec<TimeSlot>,
    pub services: Vec<ServiceOption>,
    pub selection: Selection,
    pub summary: Option<String>,
}

/// Result of a selection or navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    PastDate,
    ClosedDay,
    SlotUnavailable,
    UnknownSlot,
    HorizonReached,
}

type Listener = Box<dyn Fn(&CalendarView) + Send + Sync>;

// --- Selector ---

/// Week view booking calendar.
///
/// Owns the selection state and the displayed week. Rendering is not done
/// here: callers read [`BookingSelector::view`] or [`subscribe`] to changes.
///
/// [`subscribe`]: BookingSelector::subscribe
pub struct BookingSelector {
    settings: SelectorSettings,
    clock: Arc<dyn Clock>,
    availability: Arc<dyn SlotAvailability>,
    week_start: NaiveDate,
    selection: Selection,
    /// Parallel to `settings.time_slots`.
    slot_availability: Vec<bool>,
    listeners: Vec<Listener>,
}

impl BookingSelector {
    pub fn new(
        settings: SelectorSettings,
        clock: Arc<dyn Clock>,
        availability: Arc<dyn SlotAvailability>,
    ) -> Self {
        let week_start = week_start_of(clock.today());
        let slot_availability = vec![true; settings.time_slots.len()];
        debug!("Booking selector created, first week starts {}", week_start);
        Self {
            settings,
            clock,
            availability,
            week_start,
            selection: Selection::default(),
            slot_availability,
            listeners: Vec::new(),
        }
    }

    /// Wall clock in the configured zone, blackout list from config.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let settings = SelectorSettings::from_config(config)?;
        let clock = SystemClock::from_zone_name(&config.time_zone)?;
        let blackout = StaticBlackout::from_labels(config.blackout_slots.as_slice())?;
        Ok(Self::new(settings, Arc::new(clock), Arc::new(blackout)))
    }

    /// Registers a listener called with the new view after every change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&CalendarView) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // --- Week navigation ---

    fn latest_week_start(&self) -> NaiveDate {
        self.clock.today() + self.settings.horizon
    }

    /// Saturday of the furthest week navigation can reach.
    pub fn last_bookable_day(&self) -> NaiveDate {
        week_start_of(self.latest_week_start()) + Duration::days(DISPLAYED_DAYS - 1)
    }

    pub fn can_advance(&self) -> bool {
        self.week_start + Duration::days(7) <= self.latest_week_start()
    }

    /// Shows the next week unless it would start past today + horizon.
    pub fn advance_week(&mut self) -> Outcome {
        if !self.can_advance() {
            debug!(
                "Not advancing past {}: horizon ends {}",
                self.week_start,
                self.latest_week_start()
            );
            return Outcome::Ignored(IgnoreReason::HorizonReached);
        }
        self.week_start += Duration::days(7);
        self.notify();
        Outcome::Applied
    }

    /// Shows the previous week. There is no lower bound; past days are
    /// simply presented as not selectable.
    pub fn retreat_week(&mut self) -> Outcome {
        self.week_start -= Duration::days(7);
        self.notify();
        Outcome::Applied
    }

    // --- Selection ---

    /// Selects `date`, recomputing slot availability and clearing the time.
    ///
    /// Past days, Sundays and days after [`last_bookable_day`] are ignored.
    ///
    /// [`last_bookable_day`]: BookingSelector::last_bookable_day
    pub fn select_day(&mut self, date: NaiveDate) -> Outcome {
        if date < self.clock.today() {
            debug!("Ignoring past date {}", date);
            return Outcome::Ignored(IgnoreReason::PastDate);
        }
        if date > self.last_bookable_day() {
            debug!(
                "Ignoring {}: bookings open until {}",
                date,
                self.last_bookable_day()
            );
            return Outcome::Ignored(IgnoreReason::HorizonReached);
        }
        let Some(hours) = self.settings.business_hours(date.weekday()) else {
            debug!("Ignoring closed day {}", date);
            return Outcome::Ignored(IgnoreReason::ClosedDay);
        };

        self.selection.date = Some(date);
        self.selection.time = None;
        self.slot_availability = self.compute_slot_availability(date, hours);
        info!("Selected day {}", date);
        self.notify();
        Outcome::Applied
    }

    /// Selects the slot labelled `label`.
    ///
    /// Unknown and unavailable slots are ignored. Picking a slot before a
    /// day is an error the caller should show to the visitor.
    pub fn select_time(&mut self, label: &str) -> Result<Outcome, CalendarError> {
        let Ok(time) = parse_slot_label(label) else {
            return Ok(Outcome::Ignored(IgnoreReason::UnknownSlot));
        };
        let Some(index) = self.settings.time_slots.iter().position(|t| *t == time) else {
            return Ok(Outcome::Ignored(IgnoreReason::UnknownSlot));
        };
        if !self.slot_availability[index] {
            debug!("Ignoring unavailable slot {}", label);
            return Ok(Outcome::Ignored(IgnoreReason::SlotUnavailable));
        }
        if self.selection.date.is_none() {
            return Err(CalendarError::DateRequired);
        }

        self.selection.time = Some(format_slot_label(time));
        info!("Selected time {}", label);
        self.notify();
        Ok(Outcome::Applied)
    }

    pub fn select_service(&mut self, service_id: &str) {
        self.selection.service = Some(service_id.to_string());
        info!("Selected service {}", service_id);
        self.notify();
    }

    /// Clears the whole selection, e.g. after a successful submission.
    pub fn reset(&mut self) {
        self.selection = Selection::default();
        self.slot_availability = vec![true; self.settings.time_slots.len()];
        debug!("Selection reset");
        self.notify();
    }

    fn compute_slot_availability(&self, date: NaiveDate, hours: BusinessHours) -> Vec<bool> {
        self.settings
            .time_slots
            .iter()
            .map(|time| hours.contains(*time) && !self.availability.is_booked(date, *time))
            .collect()
    }

    // --- Reads ---

    pub fn booking_data(&self) -> BookingSnapshot {
        BookingSnapshot {
            service: self.selection.service.clone(),
            date: self.selection.date,
            time: self.selection.time.clone(),
            formatted_date: self.selection.date.map(|d| self.format_long_date(d)),
        }
    }

    /// Display name for `service_id`; the fallback label when unknown.
    pub fn service_name(&self, service_id: &str) -> String {
        self.settings
            .services
            .iter()
            .find(|s| s.id == service_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| self.settings.fallback_service_name.clone())
    }

    pub fn format_long_date(&self, date: NaiveDate) -> String {
        date.format_localized(LONG_DATE_FORMAT, self.settings.locale)
            .to_string()
    }

    pub fn format_short_date(&self, date: NaiveDate) -> String {
        date.format_localized(SHORT_DATE_FORMAT, self.settings.locale)
            .to_string()
    }

    /// "{service} • {short date} • {time}" once all three are chosen.
    pub fn summary(&self) -> Option<String> {
        match (
            &self.selection.service,
            self.selection.date,
            &self.selection.time,
        ) {
            (Some(service), Some(date), Some(time)) => Some(format!(
                "{} • {} • {}",
                self.service_name(service),
                self.format_short_date(date),
                time
            )),
            _ => None,
        }
    }

    pub fn days(&self) -> Vec<DaySlot> {
        let today = self.clock.today();
        (0..DISPLAYED_DAYS)
            .map(|offset| {
                let date = self.week_start + Duration::days(offset);
                let class = if date < today {
                    DayClass::Past
                } else if date.weekday() == Weekday::Sat {
                    DayClass::WeekendRestricted
                } else {
                    DayClass::Normal
                };
                DaySlot {
                    date,
                    label: date
                        .format_localized(DAY_LABEL_FORMAT, self.settings.locale)
                        .to_string(),
                    class,
                    selected: self.selection.date == Some(date),
                }
            })
            .collect()
    }

    pub fn time_slots(&self) -> Vec<TimeSlot> {
        self.settings
            .time_slots
            .iter()
            .zip(&self.slot_availability)
            .map(|(time, available)| {
                let label = format_slot_label(*time);
                TimeSlot {
                    selected: self.selection.time.as_deref() == Some(label.as_str()),
                    label,
                    available: *available,
                }
            })
            .collect()
    }

    pub fn week_label(&self) -> String {
        let last = self.week_start + Duration::days(DISPLAYED_DAYS - 1);
        format!(
            "{} – {}",
            self.format_short_date(self.week_start),
            last.format_localized("%a %-d %b %Y", self.settings.locale)
        )
    }

    pub fn view(&self) -> CalendarView {
        CalendarView {
            week_label: self.week_label(),
            can_advance: self.can_advance(),
            days: self.days(),
            time_slots: self.time_slots(),
            services: self.settings.services.clone(),
            selection: self.selection.clone(),
            summary: self.summary(),
        }
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.view();
        for listener in &self.listeners {
            listener(&view);
        }
    }
}
