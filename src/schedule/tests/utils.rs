use crate::date::CalendarDate;
use crate::schedule::TripSchedule;
use crate::trip::Trip;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn date(month: u32, day: u32, year: u32) -> CalendarDate {
    CalendarDate::new(month, day, year).unwrap()
}

pub fn trip(destination: &str, departure: (u32, u32, u32), duration: u32) -> Trip {
    let (month, day, year) = departure;
    Trip::new(destination, date(month, day, year), duration).unwrap()
}

pub fn add_trip(
    schedule: &mut TripSchedule,
    destination: &str,
    departure: (u32, u32, u32),
    duration: u32,
) {
    schedule.insert(trip(destination, departure, duration)).unwrap();
}

pub fn destinations<'a>(trips: impl IntoIterator<Item = &'a Trip>) -> Vec<&'a str> {
    trips.into_iter().map(|t| t.destination()).collect()
}

pub fn arb_destination() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Paris".to_string()),
        Just("Rome".to_string()),
        Just("Tokyo".to_string()),
    ]
}

pub fn arb_trip() -> impl Strategy<Value = Trip> {
    (arb_destination(), 1u32..=12, 1u32..=28, 2023u32..2025, 0u32..10)
        .prop_map(|(dest, m, d, y, dur)| Trip::new(dest, date(m, d, y), dur).unwrap())
}
