// --- File: crates/bookify_calendar/src/clock.rs ---
use crate::logic::CalendarError;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of "today" for the calendar.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, read in the business' time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Builds a clock from an IANA zone name such as "Europe/Warsaw".
    pub fn from_zone_name(name: &str) -> Result<Self, CalendarError> {
        let time_zone = name
            .parse::<Tz>()
            .map_err(|_| CalendarError::UnknownTimeZone(name.to_string()))?;
        Ok(Self::new(time_zone))
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_name_parsing() {
        let clock = SystemClock::from_zone_name("Europe/Warsaw").unwrap();
        assert_eq!(clock.time_zone(), Tz::Europe__Warsaw);

        let err = SystemClock::from_zone_name("Mars/Olympus").unwrap_err();
        assert_eq!(err, CalendarError::UnknownTimeZone("Mars/Olympus".to_string()));
    }
}
