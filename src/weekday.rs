use std::fmt;
use std::fmt::Formatter;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The weekday `days` steps after `self`, wrapping around the week.
    pub fn advance(self, days: u64) -> Weekday {
        let idx = (self as u64 + days % 7) % 7;
        Self::ALL[idx as usize]
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        assert_eq!(Weekday::Wednesday, Weekday::Wednesday.advance(0));
        assert_eq!(Weekday::Sunday, Weekday::Wednesday.advance(4));
        assert_eq!(Weekday::Monday, Weekday::Wednesday.advance(5));
        assert_eq!(Weekday::Wednesday, Weekday::Wednesday.advance(7 * 1000));
    }

    #[test]
    fn test_weekend() {
        let weekend = Weekday::ALL.iter().filter(|d| d.is_weekend()).collect::<Vec<_>>();
        assert_eq!(vec![&Weekday::Saturday, &Weekday::Sunday], weekend);
    }

    #[test]
    fn test_display() {
        assert_eq!("Thursday", Weekday::Thursday.to_string());
    }
}
