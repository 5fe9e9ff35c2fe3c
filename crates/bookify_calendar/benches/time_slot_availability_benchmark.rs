use bookify_calendar::{
    BookedSlots, BookingSelector, CalendarRenderer, FixedClock, SelectorSettings,
    StaticBlackout, TextRenderer,
};
use bookify_config::CalendarConfig;
use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

// Helper function to create a selector with quarter hour slots over the whole day
fn create_selector(availability: Arc<dyn bookify_calendar::SlotAvailability>) -> BookingSelector {
    let config = CalendarConfig {
        time_slots: (0..96)
            .map(|i| format!("{:02}:{:02}", i / 4, (i % 4) * 15))
            .collect(),
        ..CalendarConfig::default()
    };
    let settings = SelectorSettings::from_config(&config).unwrap();
    BookingSelector::new(settings, Arc::new(FixedClock(today())), availability)
}

// Helper function to fill a ledger with `per_day` bookings for every day of the horizon
fn create_booked_slots(per_day: u32) -> BookedSlots {
    let ledger = BookedSlots::new();
    for day in 0..28 {
        let date = today() + Duration::days(day);
        for i in 0..per_day {
            let time = NaiveTime::from_hms_opt(9 + i % 9, (i / 9 % 4) * 15, 0).unwrap();
            ledger.book(date, time).unwrap();
        }
    }
    ledger
}

fn benchmark_select_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_day");

    // Benchmark with the static blackout list
    group.bench_function("static_blackout", |b| {
        let blackout = StaticBlackout::from_labels(&["12:00", "15:00"]).unwrap();
        let mut selector = create_selector(Arc::new(blackout));
        b.iter(|| {
            selector.select_day(black_box(today() + Duration::days(1)));
            selector.select_day(black_box(today() + Duration::days(5)));
        })
    });

    // Benchmark with a busy ledger
    group.bench_function("booked_slots", |b| {
        let mut selector = create_selector(Arc::new(create_booked_slots(30)));
        b.iter(|| {
            selector.select_day(black_box(today() + Duration::days(1)));
            selector.select_day(black_box(today() + Duration::days(5)));
        })
    });

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("text_renderer", |b| {
        let mut selector = create_selector(Arc::new(create_booked_slots(10)));
        selector.select_day(today() + Duration::days(2));
        selector.select_service("haircut");
        b.iter(|| TextRenderer.render(black_box(&selector.view())))
    });

    group.finish();
}

criterion_group!(benches, benchmark_select_day, benchmark_render);
criterion_main!(benches);
