use crate::command::{COMMANDS, Command, Edit, HELP};
use crate::error::ScheduleError;
use crate::schedule::TripSchedule;
use crate::trip::{Trip, TripRow};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::{ErrorKind, Write};
use std::process::{Command as Process, Stdio};
use tabled::settings::{Alignment, Style};
use tracing::info;

mod command;
mod date;
mod error;
mod logging;
mod schedule;
mod trip;
mod weekday;

#[derive(Parser)]
#[command(name = "itinerary", version, about = "Personal travel schedule")]
struct Args {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Tables with more rows than this are shown through a pager
    #[arg(long, value_name = "ROWS", default_value_t = 20)]
    pager_threshold: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        // only the command name is completed
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) -> std::io::Result<()> {
    let mut pager = Process::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Process::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        // Broken pipe is common if the user quits the pager early
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait()?;
    Ok(())
}

fn print_trips<'a>(trips: impl IntoIterator<Item = (usize, &'a Trip)>, pager_threshold: usize) {
    let rows = trips
        .into_iter()
        .map(|(i, trip)| TripRow::new(i, trip))
        .collect::<Vec<TripRow>>();
    if rows.is_empty() {
        println!("No matching trips found.");
        return;
    }

    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    if rows.len() > pager_threshold {
        if let Err(e) = paginate(table.to_string()) {
            eprintln!("Error writing to pager: {}", e);
            println!("{}", table);
        }
    } else {
        println!("{}", table);
    }
}

/// Pairs query results with their position in the schedule.
fn indexed<'a>(schedule: &'a TripSchedule, found: Vec<&'a Trip>) -> Vec<(usize, &'a Trip)> {
    found
        .into_iter()
        .filter_map(|trip| {
            schedule
                .iter()
                .position(|t| t == trip)
                .map(|i| (i, trip))
        })
        .collect()
}

/// Runs one command. Returns `Ok(false)` when the shell should exit.
fn execute(schedule: &mut TripSchedule, command: Command, args: &Args) -> Result<bool, ScheduleError> {
    match command {
        Command::Add {
            destination,
            departure,
            duration,
        } => {
            let trip = Trip::new(destination, departure, duration)?;
            let arrival = trip.arrival();
            let destination = trip.destination().to_string();
            schedule.insert(trip)?;
            println!(
                "Booked {}: {}, {} to {}, {}. {} trips in schedule.",
                destination.bold(),
                departure.day_of_week(),
                departure,
                arrival.day_of_week(),
                arrival,
                schedule.len()
            );
        }
        Command::Edit { index, edit } => {
            let mut trip = schedule.at(index)?.clone();
            match edit {
                Edit::Destination(destination) => trip.set_destination(destination),
                Edit::Departure(departure) => trip.set_departure(departure)?,
                Edit::Duration(duration) => trip.set_duration(duration)?,
            }
            schedule.replace(index, trip)?;
            println!("{}", schedule.at(index)?);
        }
        Command::Remove { index } => {
            let trip = schedule.at(index)?.clone();
            schedule.delete(&trip)?;
            println!("Removed trip to {}.", trip.destination().bold());
        }
        Command::List if schedule.is_empty() => println!("No trips booked."),
        Command::List => print_trips(schedule.iter().enumerate(), args.pager_threshold),
        Command::Show { index } => println!("{}", schedule.at(index)?),
        Command::Search { key } => {
            let found = schedule.search(key);
            print_trips(indexed(schedule, found), args.pager_threshold);
        }
        Command::Free { month, year } => {
            let free = schedule.available(month, year)?;
            if free.is_empty() {
                println!("No free days.");
            } else {
                let days = free
                    .iter()
                    .map(|d| d.day().to_string())
                    .collect::<Vec<String>>();
                println!("{} {}: {}", free[0].month_name(), year, days.join(", ").green());
            }
        }
        Command::Weekend { year } => {
            let found = schedule.weekend_travel(year);
            print_trips(indexed(schedule, found), args.pager_threshold);
        }
        Command::First => println!("{}", schedule.earliest()?),
        Command::Last => println!("{}", schedule.latest()?),
        Command::Sort => {
            schedule.sort_by_departure();
            println!("Schedule sorted by departure date.");
        }
        Command::Date { date, offset } => {
            let shifted = match offset {
                Some(n) if n < 0 => date.subtract_days(n.unsigned_abs())?,
                Some(n) => date.add_days(n as u64)?,
                None => date,
            };
            let leap = if shifted.is_leap_year() { ", leap year" } else { "" };
            println!(
                "{}, {} (day {}{})",
                shifted.day_of_week(),
                shifted,
                shifted.day_count(),
                leap
            );
        }
        Command::Dump => println!("{}", schedule),
        Command::Help => println!("{}", HELP),
        Command::Exit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }
    info!(pager_threshold = args.pager_threshold, "itinerary shell started");
    println!("Itinerary ready. Type 'help' for commands.");

    let mut schedule = TripSchedule::new();

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                match trimmed.parse::<Command>() {
                    Ok(command) => match execute(&mut schedule, command, &args) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => println!("{} {}", "Error:".red().bold(), e),
                    },
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
