// --- File: crates/bookify_calendar/src/availability.rs ---
//! Slot availability sources.
//!
//! Business hours are decided by the selector itself. Whether a slot inside
//! business hours is already taken comes from a [`SlotAvailability`]
//! implementation injected at construction.

use crate::logic::{parse_slot_label, CalendarError};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::warn;

/// Answers whether a slot is already reserved.
pub trait SlotAvailability: Send + Sync {
    fn is_booked(&self, date: NaiveDate, time: NaiveTime) -> bool;
}

/// Nothing is ever booked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBookings;

impl SlotAvailability for NoBookings {
    fn is_booked(&self, _date: NaiveDate, _time: NaiveTime) -> bool {
        false
    }
}

/// The same times are taken on every day.
#[derive(Debug, Default, Clone)]
pub struct StaticBlackout {
    times: Vec<NaiveTime>,
}

impl StaticBlackout {
    pub fn new(times: Vec<NaiveTime>) -> Self {
        Self { times }
    }

    /// Parses `HH:MM` labels, as found in `calendar.blackout_slots`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, CalendarError> {
        let times = labels
            .iter()
            .map(|label| parse_slot_label(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(times))
    }

    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }
}

impl SlotAvailability for StaticBlackout {
    fn is_booked(&self, _date: NaiveDate, time: NaiveTime) -> bool {
        self.times.contains(&time)
    }
}

/// Date specific reservations that can be added while the widget runs.
#[derive(Debug, Default)]
pub struct BookedSlots {
    slots: RwLock<HashSet<(NaiveDate, NaiveTime)>>,
}

impl BookedSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self, date: NaiveDate, time: NaiveTime) -> Result<(), CalendarError> {
        let mut slots = self.slots.write().map_err(|_| CalendarError::LedgerPoisoned)?;
        slots.insert((date, time));
        Ok(())
    }

    /// `true` if the slot was booked before.
    pub fn release(&self, date: NaiveDate, time: NaiveTime) -> Result<bool, CalendarError> {
        let mut slots = self.slots.write().map_err(|_| CalendarError::LedgerPoisoned)?;
        Ok(slots.remove(&(date, time)))
    }
}

impl SlotAvailability for BookedSlots {
    /// A poisoned ledger reports every slot as taken.
    fn is_booked(&self, date: NaiveDate, time: NaiveTime) -> bool {
        match self.slots.read() {
            Ok(slots) => slots.contains(&(date, time)),
            Err(_) => {
                warn!("Booked slot ledger is poisoned, treating {} {} as taken", date, time);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_static_blackout_ignores_the_date() {
        let blackout = StaticBlackout::from_labels(&["12:00", "15:00"]).unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let friday = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();

        assert!(blackout.is_booked(monday, time(12)));
        assert!(blackout.is_booked(friday, time(15)));
        assert!(!blackout.is_booked(friday, time(14)));
    }

    #[test]
    fn test_static_blackout_rejects_bad_labels() {
        let err = StaticBlackout::from_labels(&["noon"]).unwrap_err();
        assert!(matches!(err, CalendarError::TimeParseError(_)));
    }

    #[test]
    fn test_booked_slots_are_date_specific() {
        let ledger = BookedSlots::new();
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();

        ledger.book(tuesday, time(10)).unwrap();
        assert!(ledger.is_booked(tuesday, time(10)));
        assert!(!ledger.is_booked(wednesday, time(10)));

        assert!(ledger.release(tuesday, time(10)).unwrap());
        assert!(!ledger.is_booked(tuesday, time(10)));
        assert!(!ledger.release(tuesday, time(10)).unwrap());
    }

    #[test]
    fn test_poisoned_ledger_reports_errors_and_blocks_slots() {
        let ledger = std::sync::Arc::new(BookedSlots::new());
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();

        let writer = ledger.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.slots.write().unwrap();
            panic!("poison the ledger");
        })
        .join();

        assert_eq!(
            ledger.book(tuesday, time(10)),
            Err(CalendarError::LedgerPoisoned)
        );
        assert_eq!(
            ledger.release(tuesday, time(10)),
            Err(CalendarError::LedgerPoisoned)
        );
        assert!(ledger.is_booked(tuesday, time(11)));
    }
}
