use crate::error::DateError;
use crate::weekday::Weekday;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A proleptic Gregorian calendar day on or after January 1, 1800.
///
/// Dates are plain values: every arithmetic operation returns a new date.
/// Equality compares the (month, day, year) components, ordering compares
/// [`CalendarDate::day_count`]. The two agree because construction only
/// admits real calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    month: u32,
    day: u32,
    year: u32,
}

/// Days in any run of 400 consecutive Gregorian years.
const DAYS_PER_CYCLE: u64 = 146_097;

/// Leap years in 1..=`year`.
fn leap_years_through(year: u64) -> u64 {
    year / 4 - year / 100 + year / 400
}

impl CalendarDate {
    pub const EPOCH_YEAR: u32 = 1800;
    pub const EPOCH_WEEKDAY: Weekday = Weekday::Wednesday;
    pub const EPOCH: CalendarDate = CalendarDate {
        month: 1,
        day: 1,
        year: Self::EPOCH_YEAR,
    };
    /// Last representable day, December 31 of the largest `u32` year.
    pub const MAX: CalendarDate = CalendarDate {
        month: 12,
        day: 31,
        year: u32::MAX,
    };

    pub fn new(month: u32, day: u32, year: u32) -> Result<CalendarDate, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth { month });
        }
        if year < Self::EPOCH_YEAR {
            return Err(DateError::InvalidYear { year });
        }
        if day == 0 || day > Self::days_in_month(month, year) {
            return Err(DateError::InvalidDay { month, day, year });
        }
        Ok(CalendarDate { month, day, year })
    }

    pub fn is_leap(year: u32) -> bool {
        if year % 400 == 0 {
            true
        } else if year % 100 == 0 {
            false
        } else {
            year % 4 == 0
        }
    }

    /// Length of `month` (1-12) in `year`. Months outside 1-12 have no days.
    pub fn days_in_month(month: u32, year: u32) -> u32 {
        match month {
            2 if Self::is_leap(year) => 29,
            1..=12 => MONTH_LENGTHS[month as usize - 1],
            _ => 0,
        }
    }

    fn days_in_year(year: u32) -> u64 {
        if Self::is_leap(year) { 366 } else { 365 }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn is_leap_year(&self) -> bool {
        Self::is_leap(self.year)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Number of days from the epoch to this date, counting the epoch as day 1.
    pub fn day_count(&self) -> u64 {
        let full_years = (self.year - Self::EPOCH_YEAR) as u64;
        let leaps = leap_years_through(self.year as u64 - 1)
            - leap_years_through(Self::EPOCH_YEAR as u64 - 1);
        let months: u64 = (1..self.month)
            .map(|m| Self::days_in_month(m, self.year) as u64)
            .sum();
        365 * full_years + leaps + months + self.day as u64
    }

    /// Inverse of [`CalendarDate::day_count`].
    pub fn from_day_count(count: u64) -> Result<CalendarDate, DateError> {
        if count == 0 || count > Self::MAX.day_count() {
            return Err(DateError::OutOfRange);
        }
        Ok(Self::from_ordinal(count))
    }

    // `count` must lie in 1..=MAX.day_count()
    fn from_ordinal(count: u64) -> CalendarDate {
        let mut remaining = count - 1;
        let cycles = remaining / DAYS_PER_CYCLE;
        remaining %= DAYS_PER_CYCLE;
        let mut year = (Self::EPOCH_YEAR as u64 + 400 * cycles) as u32;
        while remaining >= Self::days_in_year(year) {
            remaining -= Self::days_in_year(year);
            year += 1;
        }
        let mut month = 1;
        while remaining >= Self::days_in_month(month, year) as u64 {
            remaining -= Self::days_in_month(month, year) as u64;
            month += 1;
        }
        CalendarDate {
            month,
            day: remaining as u32 + 1,
            year,
        }
    }

    pub fn day_of_week(&self) -> Weekday {
        Self::EPOCH_WEEKDAY.advance(self.day_count() - 1)
    }

    /// The following day. Fails with [`DateError::OutOfRange`] on [`CalendarDate::MAX`].
    pub fn next(&self) -> Result<CalendarDate, DateError> {
        let next = if self.day < Self::days_in_month(self.month, self.year) {
            CalendarDate {
                day: self.day + 1,
                ..*self
            }
        } else if self.month < 12 {
            CalendarDate {
                month: self.month + 1,
                day: 1,
                year: self.year,
            }
        } else {
            CalendarDate {
                month: 1,
                day: 1,
                year: self.year.checked_add(1).ok_or(DateError::OutOfRange)?,
            }
        };
        Ok(next)
    }

    pub fn previous(&self) -> Result<CalendarDate, DateError> {
        if *self == Self::EPOCH {
            return Err(DateError::NoPreviousDate);
        }
        let prev = if self.day > 1 {
            CalendarDate {
                day: self.day - 1,
                ..*self
            }
        } else if self.month > 1 {
            CalendarDate {
                month: self.month - 1,
                day: Self::days_in_month(self.month - 1, self.year),
                year: self.year,
            }
        } else {
            CalendarDate {
                month: 12,
                day: 31,
                year: self.year - 1,
            }
        };
        Ok(prev)
    }

    /// The date `n` days later; same result as calling [`CalendarDate::next`] `n` times.
    pub fn add_days(&self, n: u64) -> Result<CalendarDate, DateError> {
        if n == 0 {
            return Ok(*self);
        }
        let count = self
            .day_count()
            .checked_add(n)
            .filter(|c| *c <= Self::MAX.day_count())
            .ok_or(DateError::OutOfRange)?;
        Ok(Self::from_ordinal(count))
    }

    /// The date `n` days earlier.
    ///
    /// Fails with [`DateError::NoPreviousDate`] when the result would precede the
    /// epoch, and also whenever `self` is the epoch, even for `n == 0`.
    pub fn subtract_days(&self, n: u64) -> Result<CalendarDate, DateError> {
        if *self == Self::EPOCH {
            return Err(DateError::NoPreviousDate);
        }
        let count = self.day_count();
        if n >= count {
            return Err(DateError::NoPreviousDate);
        }
        Ok(Self::from_ordinal(count - n))
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_count().cmp(&other.day_count())
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `m/d/yyyy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed {
            input: s.to_string(),
        };
        let parts = s
            .trim()
            .split('/')
            .map(|p| p.parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<u32>, DateError>>()?;
        match parts.as_slice() {
            [month, day, year] => CalendarDate::new(*month, *day, *year),
            _ => Err(malformed()),
        }
    }
}
