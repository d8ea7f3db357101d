#[allow(clippy::module_inception)]
pub mod schedule;

#[cfg(test)]
mod tests;

pub use schedule::{SearchKey, TripSchedule};
