// --- File: crates/bookify_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod availability;
pub mod clock;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod render;

pub use availability::{BookedSlots, NoBookings, SlotAvailability, StaticBlackout};
pub use clock::{Clock, FixedClock, SystemClock};
pub use logic::{
    BookingSelector, BookingSnapshot, BusinessHours, CalendarError, CalendarView, DayClass,
    DaySlot, IgnoreReason, Outcome, Selection, SelectorSettings, ServiceOption, TimeSlot,
};
pub use render::{CalendarRenderer, TextRenderer};
