/// Failures raised while building or stepping calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid month {month}, expected 1-12")]
    InvalidMonth { month: u32 },

    #[error("invalid year {year}, dates start at {min}", min = crate::date::CalendarDate::EPOCH_YEAR)]
    InvalidYear { year: u32 },

    #[error("invalid day {day} for {month}/{year}")]
    InvalidDay { month: u32, day: u32, year: u32 },

    /// Stepping backwards from the epoch.
    #[error("January 1, 1800 does not have a previous day")]
    NoPreviousDate,

    /// Day count 0, or a date past December 31 of the last `u32` year.
    #[error("date out of range, day counts start at 1 and years end at {max}", max = u32::MAX)]
    OutOfRange,

    #[error("malformed date '{input}', expected m/d/yyyy")]
    Malformed { input: String },
}

/// Failures raised by [`crate::schedule::TripSchedule`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A trip would depart on the day another one arrives (or the reverse).
    /// `destination` names the trip already in the schedule.
    #[error("back-to-back travel with the trip to {destination}")]
    AdjacentConflict { destination: String },

    #[error("overlaps the trip to {destination}")]
    OverlapConflict { destination: String },

    #[error("trip not found in schedule")]
    NotFound,

    #[error("index {index} out of range for schedule of {len} trips")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("schedule has no trips")]
    EmptySchedule,

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Failures raised while reading a shell line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Date(#[from] DateError),
}
