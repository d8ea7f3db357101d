use crate::error::ScheduleError;
use crate::schedule::TripSchedule;
use crate::schedule::tests::utils::{add_trip, destinations, trip};

#[test]
fn test_insert_disjoint_trips() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);

    assert_eq!(2, schedule.len());
    assert_eq!(vec!["Paris", "Rome"], destinations(&schedule));
}

#[test]
fn test_insert_departure_on_arrival_day() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Tokyo", (3, 1, 2024), 5);

    let result = schedule.insert(trip("Osaka", (3, 6, 2024), 2));

    assert_eq!(
        Err(ScheduleError::AdjacentConflict {
            destination: "Tokyo".to_string()
        }),
        result
    );
    assert_eq!(1, schedule.len());
}

#[test]
fn test_insert_arrival_on_departure_day() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Tokyo", (3, 10, 2024), 5);

    let result = schedule.insert(trip("Osaka", (3, 8, 2024), 2));

    assert_eq!(
        Err(ScheduleError::AdjacentConflict {
            destination: "Tokyo".to_string()
        }),
        result
    );
}

#[test]
fn test_insert_next_day_is_allowed() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Tokyo", (3, 1, 2024), 5);

    assert_eq!(Ok(()), schedule.insert(trip("Osaka", (3, 7, 2024), 2)));
    assert_eq!(Ok(()), schedule.insert(trip("Kyoto", (2, 28, 2024), 0)));
    assert_eq!(3, schedule.len());
}

#[test]
fn test_insert_overlap() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 10);

    assert_eq!(
        Err(ScheduleError::OverlapConflict {
            destination: "Paris".to_string()
        }),
        schedule.insert(trip("Lyon", (6, 3, 2023), 2))
    );
    assert_eq!(
        Err(ScheduleError::OverlapConflict {
            destination: "Paris".to_string()
        }),
        schedule.insert(trip("Nice", (5, 25, 2023), 30))
    );
    assert_eq!(1, schedule.len());
}

#[test]
fn test_insert_same_day_trip_twice() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Lyon", (6, 3, 2023), 0);

    // departure and arrival coincide, so this is reported as back-to-back first
    assert_eq!(
        Err(ScheduleError::AdjacentConflict {
            destination: "Lyon".to_string()
        }),
        schedule.insert(trip("Lyon", (6, 3, 2023), 0))
    );
}

#[test]
fn test_delete() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);
    add_trip(&mut schedule, "Oslo", (7, 1, 2023), 1);

    let removed = schedule.delete(&trip("Rome", (6, 10, 2023), 2));

    assert_eq!(Ok(trip("Rome", (6, 10, 2023), 2)), removed);
    assert_eq!(vec!["Paris", "Oslo"], destinations(&schedule));

    // freed days can be booked again
    add_trip(&mut schedule, "Milan", (6, 10, 2023), 2);
    assert_eq!(3, schedule.len());
}

#[test]
fn test_delete_missing() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);

    assert_eq!(
        Err(ScheduleError::NotFound),
        schedule.delete(&trip("Paris", (6, 1, 2023), 4))
    );
    assert_eq!(1, schedule.len());
}

#[test]
fn test_at() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);

    assert_eq!(Ok(&trip("Rome", (6, 10, 2023), 2)), schedule.at(1));
    assert_eq!(
        Err(ScheduleError::IndexOutOfRange { index: 2, len: 2 }),
        schedule.at(2)
    );
}

#[test]
fn test_iter_restarts() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);

    let mut iter = schedule.iter();
    assert_eq!(2, iter.len());
    assert_eq!(Some("Rome"), iter.next().map(|t| t.destination()));
    assert_eq!(Some("Paris"), iter.next().map(|t| t.destination()));
    assert_eq!(None, iter.next());
    assert_eq!(None, iter.next());

    assert_eq!(vec!["Rome", "Paris"], destinations(schedule.iter()));
}

#[test]
fn test_replace_keeps_position() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);

    // extending a trip may run into its own old days
    let mut longer = schedule.at(0).unwrap().clone();
    longer.set_duration(6).unwrap();
    let old = schedule.replace(0, longer.clone());

    assert_eq!(Ok(trip("Paris", (6, 1, 2023), 3)), old);
    assert_eq!(Ok(&longer), schedule.at(0));
    assert_eq!(vec!["Paris", "Rome"], destinations(&schedule));
}

#[test]
fn test_replace_rejects_conflict() {
    let mut schedule = TripSchedule::new();
    add_trip(&mut schedule, "Paris", (6, 1, 2023), 3);
    add_trip(&mut schedule, "Rome", (6, 10, 2023), 2);

    let mut moved = schedule.at(0).unwrap().clone();
    moved.set_departure(crate::schedule::tests::utils::date(6, 7, 2023)).unwrap();

    assert_eq!(
        Err(ScheduleError::AdjacentConflict {
            destination: "Rome".to_string()
        }),
        schedule.replace(0, moved.clone())
    );
    assert_eq!(Ok(&trip("Paris", (6, 1, 2023), 3)), schedule.at(0));
    assert_eq!(
        Err(ScheduleError::IndexOutOfRange { index: 5, len: 2 }),
        schedule.replace(5, moved)
    );
}
