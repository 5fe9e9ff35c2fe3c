#[cfg(test)]
mod tests {
    use crate::availability::StaticBlackout;
    use crate::clock::FixedClock;
    use crate::logic::{BookingSelector, IgnoreReason, Outcome, SelectorSettings};
    use bookify_config::CalendarConfig;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;
    use std::sync::Arc;

    // Helper function to build a selector whose "today" is `base + offset` days
    fn selector_at(day_offset: i64) -> BookingSelector {
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let today = base + Duration::days(day_offset);
        let settings = SelectorSettings::from_config(&CalendarConfig::default()).unwrap();
        BookingSelector::new(
            settings,
            Arc::new(FixedClock(today)),
            Arc::new(StaticBlackout::from_labels(&["12:00", "15:00"]).unwrap()),
        )
    }

    proptest! {
        // Available slots always fall inside the opening window of the chosen day
        #[test]
        fn test_available_slots_within_business_hours(
            day_offset in 0..365i64,
            ahead in 0..28i64,
        ) {
            let mut selector = selector_at(day_offset);
            let date = selector.today() + Duration::days(ahead);

            let outcome = selector.select_day(date);

            if date.weekday() == Weekday::Sun {
                prop_assert_eq!(outcome, Outcome::Ignored(IgnoreReason::ClosedDay));
            } else {
                prop_assert_eq!(outcome, Outcome::Applied);
                let (open, close) = if date.weekday() == Weekday::Sat {
                    ("10:00", "16:00")
                } else {
                    ("09:00", "18:00")
                };
                for slot in selector.time_slots().iter().filter(|s| s.available) {
                    prop_assert!(slot.label.as_str() >= open);
                    prop_assert!(slot.label.as_str() < close);
                    prop_assert!(slot.label != "12:00" && slot.label != "15:00");
                }
            }
        }

        // Past days never change the selection
        #[test]
        fn test_past_days_are_never_selected(
            day_offset in 1..365i64,
            back in 1..60i64,
        ) {
            let mut selector = selector_at(day_offset);
            let before = selector.booking_data();
            let date = selector.today() - Duration::days(back);

            prop_assert_eq!(selector.select_day(date), Outcome::Ignored(IgnoreReason::PastDate));
            prop_assert_eq!(selector.booking_data(), before);
        }

        // Days after the last reachable week never become selected
        #[test]
        fn test_days_beyond_horizon_are_never_selected(
            day_offset in 0..365i64,
            beyond in 1..400i64,
        ) {
            let mut selector = selector_at(day_offset);
            let before = selector.booking_data();
            let date = selector.last_bookable_day() + Duration::days(beyond);

            prop_assert_eq!(
                selector.select_day(date),
                Outcome::Ignored(IgnoreReason::HorizonReached)
            );
            prop_assert_eq!(selector.booking_data(), before);
        }

        // Any navigation sequence keeps the displayed week within the horizon
        #[test]
        fn test_week_never_passes_horizon(
            day_offset in 0..365i64,
            moves in proptest::collection::vec(any::<bool>(), 0..40),
        ) {
            let mut selector = selector_at(day_offset);
            let limit = selector.today() + Duration::days(28);

            for forward in moves {
                if forward {
                    selector.advance_week();
                } else {
                    selector.retreat_week();
                }
                prop_assert!(selector.week_start() <= limit);
                prop_assert_eq!(selector.week_start().weekday(), Weekday::Mon);
            }
        }

        // Choosing a day always clears a previously chosen time
        #[test]
        fn test_select_day_clears_time(
            day_offset in 0..365i64,
            first in 0..28i64,
            second in 0..28i64,
        ) {
            let mut selector = selector_at(day_offset);
            let today = selector.today();

            if selector.select_day(today + Duration::days(first)) == Outcome::Applied {
                if let Some(slot) = selector.time_slots().into_iter().find(|s| s.available) {
                    let _ = selector.select_time(&slot.label);
                }
            }
            if selector.select_day(today + Duration::days(second)) == Outcome::Applied {
                prop_assert!(selector.selection().time.is_none());
            }
        }
    }
}
