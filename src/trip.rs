use crate::date::CalendarDate;
use crate::error::DateError;
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

/// A single journey: leave on `departure`, come back `duration` days later.
///
/// A trip occupies `duration + 1` calendar days, departure and arrival included.
/// The arrival is worked out whenever departure or duration change, so a trip
/// whose arrival would fall past [`CalendarDate::MAX`] cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trip {
    destination: String,
    departure: CalendarDate,
    duration: u32,
    arrival: CalendarDate,
}

impl Trip {
    pub fn new(
        destination: impl Into<String>,
        departure: CalendarDate,
        duration: u32,
    ) -> Result<Trip, DateError> {
        Ok(Trip {
            destination: destination.into(),
            departure,
            duration,
            arrival: departure.add_days(duration as u64)?,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> CalendarDate {
        self.departure
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Leaves the trip untouched when the new arrival is out of range.
    pub fn set_departure(&mut self, departure: CalendarDate) -> Result<(), DateError> {
        self.arrival = departure.add_days(self.duration as u64)?;
        self.departure = departure;
        Ok(())
    }

    /// Leaves the trip untouched when the new arrival is out of range.
    pub fn set_duration(&mut self, duration: u32) -> Result<(), DateError> {
        self.arrival = self.departure.add_days(duration as u64)?;
        self.duration = duration;
        Ok(())
    }

    pub fn arrival(&self) -> CalendarDate {
        self.arrival
    }

    /// Inclusive (first, last) day counts of the trip.
    pub(crate) fn span(&self) -> (u64, u64) {
        (self.departure.day_count(), self.arrival.day_count())
    }

    pub fn overlaps(&self, other: &Trip) -> bool {
        let (a_from, a_to) = self.span();
        let (b_from, b_to) = other.span();
        a_from <= b_to && b_from <= a_to
    }

    pub fn contains_weekend(&self) -> bool {
        // any 7 consecutive days include a weekend
        if self.duration >= 6 {
            return true;
        }
        let first = self.departure.day_of_week();
        (0..=self.duration as u64).any(|d| first.advance(d).is_weekend())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arrival = self.arrival();
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Duration: {} days", self.duration)?;
        writeln!(
            f,
            "Departure: {}, {}",
            self.departure.day_of_week(),
            self.departure
        )?;
        write!(f, "Arrival: {}, {}", arrival.day_of_week(), arrival)
    }
}

/// Row view of a trip for table output.
#[derive(Tabled)]
pub struct TripRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Destination")]
    pub destination: String,
    #[tabled(rename = "Departure")]
    pub departure: String,
    #[tabled(rename = "Arrival")]
    pub arrival: String,
    #[tabled(rename = "Days")]
    pub duration: u32,
}

impl TripRow {
    pub fn new(index: usize, trip: &Trip) -> TripRow {
        let arrival = trip.arrival();
        TripRow {
            index,
            destination: trip.destination.clone(),
            departure: format!("{}, {}", trip.departure.day_of_week(), trip.departure),
            arrival: format!("{}, {}", arrival.day_of_week(), arrival),
            duration: trip.duration,
        }
    }
}
