// --- File: crates/bookify_calendar/src/render.rs ---
//! Presentation of a [`CalendarView`].
//!
//! Renderers only read views, so any front end can be plugged in by
//! subscribing a renderer to the selector.

use crate::logic::{CalendarView, DayClass};
use std::fmt::Write;

pub trait CalendarRenderer {
    type Output;

    fn render(&self, view: &CalendarView) -> Self::Output;
}

/// Plain text rendering for terminals and logs.
///
/// Day markers: `*` selected, `x` past, `~` Saturday hours. Slots show
/// `[HH:MM]` when selected, ` HH:MM ` when available and `(HH:MM)` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl CalendarRenderer for TextRenderer {
    type Output = String;

    fn render(&self, view: &CalendarView) -> String {
        let mut out = String::new();

        let next = if view.can_advance { "  [next >]" } else { "" };
        let _ = writeln!(out, "[< prev]  {}{}", view.week_label, next);

        let days: Vec<String> = view
            .days
            .iter()
            .map(|day| {
                let marker = if day.selected {
                    '*'
                } else {
                    match day.class {
                        DayClass::Past => 'x',
                        DayClass::WeekendRestricted => '~',
                        DayClass::Normal => ' ',
                    }
                };
                format!("{}{}", marker, day.label)
            })
            .collect();
        let _ = writeln!(out, "{}", days.join("  "));

        let slots: Vec<String> = view
            .time_slots
            .iter()
            .map(|slot| {
                if slot.selected {
                    format!("[{}]", slot.label)
                } else if slot.available {
                    format!(" {} ", slot.label)
                } else {
                    format!("({})", slot.label)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", slots.join(" "));

        let services: Vec<String> = view
            .services
            .iter()
            .map(|service| {
                let marker = if view.selection.service.as_deref() == Some(service.id.as_str()) {
                    '*'
                } else {
                    ' '
                };
                format!("{}{} ({})", marker, service.id, service.name)
            })
            .collect();
        let _ = writeln!(out, "{}", services.join("  "));

        if let Some(summary) = &view.summary {
            let _ = writeln!(out, "{}", summary);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::StaticBlackout;
    use crate::clock::FixedClock;
    use crate::logic::{BookingSelector, SelectorSettings};
    use bookify_config::CalendarConfig;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn selector() -> BookingSelector {
        // Wednesday
        let today = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        let settings = SelectorSettings::from_config(&CalendarConfig::default()).unwrap();
        BookingSelector::new(
            settings,
            Arc::new(FixedClock(today)),
            Arc::new(StaticBlackout::from_labels(&["12:00"]).unwrap()),
        )
    }

    #[test]
    fn test_render_marks_days_and_slots() {
        let mut selector = selector();
        selector.select_day(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap());
        selector.select_time("10:00").unwrap();
        selector.select_service("haircut");

        let text = TextRenderer.render(&selector.view());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[< prev]  Mon 19 Oct – Sat 24 Oct 2026  [next >]");
        assert_eq!(
            lines[1],
            "xMon 19.10  xTue 20.10   Wed 21.10  *Thu 22.10   Fri 23.10  ~Sat 24.10"
        );
        assert!(lines[2].contains("(08:00)"));
        assert!(lines[2].contains("[10:00]"));
        assert!(lines[2].contains("(12:00)"));
        assert!(lines[2].contains(" 17:00 "));
        assert!(lines[2].contains("(18:00)"));
        assert!(lines[3].contains("*haircut (Haircut)"));
        assert_eq!(lines[4], "Haircut • Thu 22 Oct • 10:00");
    }

    #[test]
    fn test_render_hides_summary_and_next_at_horizon() {
        let mut selector = selector();
        while selector.advance_week() == crate::logic::Outcome::Applied {}

        let text = TextRenderer.render(&selector.view());

        assert!(!text.lines().next().unwrap().contains("[next >]"));
        assert_eq!(text.lines().count(), 4);
    }
}
