use crate::date::CalendarDate;
use crate::error::CommandError;
use crate::schedule::SearchKey;
use std::str::FromStr;

/// Command names offered for tab completion.
pub const COMMANDS: &[&str] = &[
    "add", "edit", "rm", "ls", "show", "search", "free", "weekend", "first", "last", "sort", "date",
    "dump", "help", "exit",
];

pub const HELP: &str = "
Available Commands:
  add <dest> <m/d/yyyy> <days> - Book a trip lasting <days> days after departure
  edit <index> dest <name>     - Change the destination of a trip
  edit <index> date <m/d/yyyy> - Move a trip to a new departure date
  edit <index> days <days>     - Change the length of a trip
  rm <index>                   - Remove the trip at <index>
  ls                           - List all trips in a table
  show <index>                 - Show the trip at <index>
  search <keyword>             - Trips departing in month 1-12, or going to <keyword>
  free <month> <year>          - Days of the month with no travel
  weekend <year>               - Trips departing in <year> that include a weekend day
  first / last                 - Trip with the earliest / latest departure
  sort                         - Order the schedule by departure date
  date <m/d/yyyy|day> [+n|-n]  - Weekday and day count of a date, optionally shifted
  dump                         - Print every trip in full
  help / ?                     - Show this help menu
  exit / quit                  - Exit
";

/// One field of a booked trip to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Destination(String),
    Departure(CalendarDate),
    Duration(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        destination: String,
        departure: CalendarDate,
        duration: u32,
    },
    Edit {
        index: usize,
        edit: Edit,
    },
    Remove {
        index: usize,
    },
    List,
    Show {
        index: usize,
    },
    Search {
        key: SearchKey,
    },
    Free {
        month: u32,
        year: u32,
    },
    Weekend {
        year: u32,
    },
    First,
    Last,
    Sort,
    Date {
        date: CalendarDate,
        offset: Option<i64>,
    },
    Dump,
    Help,
    Exit,
}

fn number<T: FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse::<T>()
        .map_err(|_| CommandError::NotANumber(s.to_string()))
}

/// Accepts `m/d/yyyy` or a bare day count since January 1, 1800.
fn date_arg(s: &str) -> Result<CalendarDate, CommandError> {
    match s.parse::<u64>() {
        Ok(count) => Ok(CalendarDate::from_day_count(count)?),
        Err(_) => Ok(s.parse()?),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts = line.split_whitespace().collect::<Vec<&str>>();
        let Some((name, args)) = parts.split_first() else {
            return Err(CommandError::Usage("help"));
        };
        let command = match (*name, args) {
            ("add", [dest @ .., date, days]) if !dest.is_empty() => Command::Add {
                destination: dest.join(" "),
                departure: date.parse()?,
                duration: number(days)?,
            },
            ("add", _) => return Err(CommandError::Usage("add <dest> <m/d/yyyy> <days>")),
            ("edit", [index, "dest", name @ ..]) if !name.is_empty() => Command::Edit {
                index: number(index)?,
                edit: Edit::Destination(name.join(" ")),
            },
            ("edit", [index, "date", date]) => Command::Edit {
                index: number(index)?,
                edit: Edit::Departure(date.parse()?),
            },
            ("edit", [index, "days", days]) => Command::Edit {
                index: number(index)?,
                edit: Edit::Duration(number(days)?),
            },
            ("edit", _) => return Err(CommandError::Usage("edit <index> dest|date|days <value>")),
            ("rm", [index]) => Command::Remove {
                index: number(index)?,
            },
            ("rm", _) => return Err(CommandError::Usage("rm <index>")),
            ("ls", []) => Command::List,
            ("show", [index]) => Command::Show {
                index: number(index)?,
            },
            ("show", _) => return Err(CommandError::Usage("show <index>")),
            ("search", keyword) if !keyword.is_empty() => Command::Search {
                key: SearchKey::from(keyword.join(" ").as_str()),
            },
            ("search", _) => return Err(CommandError::Usage("search <keyword>")),
            ("free", [month, year]) => Command::Free {
                month: number(month)?,
                year: number(year)?,
            },
            ("free", _) => return Err(CommandError::Usage("free <month> <year>")),
            ("weekend", [year]) => Command::Weekend {
                year: number(year)?,
            },
            ("weekend", _) => return Err(CommandError::Usage("weekend <year>")),
            ("first", []) => Command::First,
            ("last", []) => Command::Last,
            ("sort", []) => Command::Sort,
            ("date", [date]) => Command::Date {
                date: date_arg(date)?,
                offset: None,
            },
            ("date", [date, offset]) => Command::Date {
                date: date_arg(date)?,
                offset: Some(number(offset.trim_start_matches('+'))?),
            },
            ("date", _) => return Err(CommandError::Usage("date <m/d/yyyy|day> [+n|-n]")),
            ("dump", []) => Command::Dump,
            ("help" | "?", _) => Command::Help,
            ("exit" | "quit", _) => Command::Exit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(command)
    }
}
