use crate::date::CalendarDate;
use crate::error::ScheduleError;
use crate::trip::Trip;
use std::fmt;
use std::fmt::Formatter;
use std::iter::successors;
use tracing::{debug, warn};

/// What [`TripSchedule::search`] filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    Month(u32),
    Destination(String),
}

impl From<u32> for SearchKey {
    fn from(month: u32) -> Self {
        SearchKey::Month(month)
    }
}

impl From<&str> for SearchKey {
    /// Integers 1-12 select a departure month, anything else is a destination.
    fn from(keyword: &str) -> Self {
        match keyword.trim().parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => SearchKey::Month(month),
            _ => SearchKey::Destination(keyword.to_string()),
        }
    }
}

/// Travel schedule for one person.
///
/// No two trips share a calendar day, and no trip departs on the day another
/// one arrives. Both rules are checked on [`TripSchedule::insert`] and
/// [`TripSchedule::replace`]; trips are owned by the schedule and only handed
/// out by shared reference, so they cannot be edited in place afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripSchedule {
    trips: Vec<Trip>,
}

impl TripSchedule {
    pub fn new() -> TripSchedule {
        TripSchedule { trips: Vec::new() }
    }

    /// Checks `trip` against every held trip except the one at `skip`.
    fn check_conflicts(&self, trip: &Trip, skip: Option<usize>) -> Result<(), ScheduleError> {
        let departure = trip.departure();
        let arrival = trip.arrival();
        let others = self
            .trips
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, t)| t);
        for existing in others {
            if existing.departure() == arrival || existing.arrival() == departure {
                warn!(
                    destination = trip.destination(),
                    conflict = existing.destination(),
                    "rejected back-to-back trip"
                );
                return Err(ScheduleError::AdjacentConflict {
                    destination: existing.destination().to_string(),
                });
            }
            if existing.overlaps(trip) {
                warn!(
                    destination = trip.destination(),
                    conflict = existing.destination(),
                    "rejected overlapping trip"
                );
                return Err(ScheduleError::OverlapConflict {
                    destination: existing.destination().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, trip: Trip) -> Result<(), ScheduleError> {
        self.check_conflicts(&trip, None)?;
        debug!(
            destination = trip.destination(),
            departure = %trip.departure(),
            arrival = %trip.arrival(),
            "trip inserted"
        );
        self.trips.push(trip);
        Ok(())
    }

    /// Swaps the trip at `index` for an edited copy, keeping its position.
    ///
    /// The edited trip goes through the same checks as [`TripSchedule::insert`],
    /// ignoring the trip it replaces. On failure the schedule is unchanged.
    pub fn replace(&mut self, index: usize, trip: Trip) -> Result<Trip, ScheduleError> {
        self.at(index)?;
        self.check_conflicts(&trip, Some(index))?;
        debug!(destination = trip.destination(), index, "trip replaced");
        Ok(std::mem::replace(&mut self.trips[index], trip))
    }

    /// Removes the first trip equal to `trip` and returns it.
    pub fn delete(&mut self, trip: &Trip) -> Result<Trip, ScheduleError> {
        let idx = self
            .trips
            .iter()
            .position(|t| t == trip)
            .ok_or(ScheduleError::NotFound)?;
        let removed = self.trips.remove(idx);
        debug!(destination = removed.destination(), "trip deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&Trip, ScheduleError> {
        self.trips
            .get(index)
            .ok_or(ScheduleError::IndexOutOfRange {
                index,
                len: self.trips.len(),
            })
    }

    /// Iterates trips in the current order. The borrow keeps the schedule
    /// unchanged until the iterator is dropped.
    pub fn iter(&self) -> TripIter<'_> {
        TripIter {
            trips: &self.trips,
            idx: 0,
        }
    }

    /// Trips departing in a month or going to a destination, by departure date.
    pub fn search(&self, keyword: impl Into<SearchKey>) -> Vec<&Trip> {
        let key = keyword.into();
        let mut found = self
            .trips
            .iter()
            .filter(|t| match &key {
                SearchKey::Month(month) => t.departure().month() == *month,
                SearchKey::Destination(dest) => t.destination() == dest,
            })
            .collect::<Vec<&Trip>>();
        found.sort_by_key(|t| t.departure());
        found
    }

    /// Every day of `month`/`year` on which no trip is under way.
    pub fn available(&self, month: u32, year: u32) -> Result<Vec<CalendarDate>, ScheduleError> {
        let first = CalendarDate::new(month, 1, year)?;
        let spans = self.trips.iter().map(Trip::span).collect::<Vec<_>>();
        let free = successors(Some(first), |d| d.next().ok())
            .take(CalendarDate::days_in_month(month, year) as usize)
            .filter(|d| {
                let count = d.day_count();
                !spans.iter().any(|(from, to)| *from <= count && count <= *to)
            })
            .collect();
        Ok(free)
    }

    /// Trips departing in `year` that touch a Saturday or Sunday, by departure date.
    pub fn weekend_travel(&self, year: u32) -> Vec<&Trip> {
        let mut found = self
            .trips
            .iter()
            .filter(|t| t.departure().year() == year && t.contains_weekend())
            .collect::<Vec<&Trip>>();
        found.sort_by_key(|t| t.departure());
        found
    }

    pub fn earliest(&self) -> Result<&Trip, ScheduleError> {
        self.trips
            .iter()
            .min_by_key(|t| t.departure())
            .ok_or(ScheduleError::EmptySchedule)
    }

    pub fn latest(&self) -> Result<&Trip, ScheduleError> {
        self.trips
            .iter()
            .max_by_key(|t| t.departure())
            .ok_or(ScheduleError::EmptySchedule)
    }

    /// Stable sort by departure date.
    pub fn sort_by_departure(&mut self) {
        self.trips.sort_by_key(|t| t.departure());
        debug!(trips = self.trips.len(), "schedule sorted by departure");
    }
}

/// Cursor over a [`TripSchedule`], returned by [`TripSchedule::iter`].
#[derive(Debug, Clone)]
pub struct TripIter<'a> {
    trips: &'a [Trip],
    idx: usize,
}

impl<'a> Iterator for TripIter<'a> {
    type Item = &'a Trip;

    fn next(&mut self) -> Option<Self::Item> {
        let trip = self.trips.get(self.idx)?;
        self.idx += 1;
        Some(trip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.trips.len() - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TripIter<'_> {}

impl<'a> IntoIterator for &'a TripSchedule {
    type Item = &'a Trip;
    type IntoIter = TripIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TripSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered = self
            .trips
            .iter()
            .map(Trip::to_string)
            .collect::<Vec<String>>();
        write!(f, "{}", rendered.join("\n\n"))
    }
}
