use super::{entry, t};
use crate::core::types::Weekday;
use crate::grid::placement::{GridPlacementEngine, Placement, placement, span_slots};
use crate::grid::time_grid::TimeGrid;

#[test]
fn off_boundary_entry_starts_in_its_slot() {
    let e = entry(1, "Math", Weekday::Monday, "09:15", "10:05");
    let entries = [e.clone()];

    match placement(&entries, Weekday::Monday, t("09:00")) {
        Placement::Start { entry, span } => {
            assert_eq!(entry.id, 1);
            assert_eq!(span, 2);
        }
        other => panic!("expected start, got {other:?}"),
    }
    assert_eq!(
        placement(&entries, Weekday::Monday, t("09:30")),
        Placement::Continuation
    );
    assert_eq!(
        placement(&entries, Weekday::Monday, t("10:00")),
        Placement::Empty
    );
    assert_eq!(
        placement(&entries, Weekday::Monday, t("08:30")),
        Placement::Empty
    );
}

#[test]
fn other_days_are_empty() {
    let entries = [entry(1, "Math", Weekday::Monday, "09:00", "10:00")];
    assert_eq!(
        placement(&entries, Weekday::Tuesday, t("09:00")),
        Placement::Empty
    );
}

#[test]
fn span_rounds_partial_slots_up() {
    assert_eq!(span_slots(&entry(1, "a", Weekday::Monday, "08:00", "08:30")), 1);
    assert_eq!(span_slots(&entry(1, "a", Weekday::Monday, "08:00", "08:10")), 1);
    assert_eq!(span_slots(&entry(1, "a", Weekday::Monday, "08:00", "09:30")), 3);
    assert_eq!(span_slots(&entry(1, "a", Weekday::Monday, "08:00", "09:31")), 4);
}

#[test]
fn each_entry_has_one_start_and_span_minus_one_continuations() {
    let grid = TimeGrid::standard();
    let entries = vec![
        entry(1, "Math", Weekday::Wednesday, "07:00", "08:30"),
        entry(2, "Physics", Weekday::Wednesday, "09:15", "10:05"),
        entry(3, "Lab", Weekday::Wednesday, "13:00", "16:00"),
    ];
    let engine = GridPlacementEngine::new(entries.iter().collect(), &grid);
    let column = engine.column(Weekday::Wednesday);
    assert_eq!(column.len(), grid.len());

    for e in &entries {
        let starts: Vec<usize> = column
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match p {
                Placement::Start { entry, .. } if entry.id == e.id => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(starts.len(), 1, "entry {} should start once", e.id);

        let first = starts[0];
        let span = span_slots(e);
        for offset in 1..span {
            assert_eq!(column[first + offset], Placement::Continuation);
        }
    }

    let continuations = column
        .iter()
        .filter(|p| **p == Placement::Continuation)
        .count();
    let expected: usize = entries.iter().map(|e| span_slots(e) - 1).sum();
    assert_eq!(continuations, expected);
}

#[test]
fn overlapping_entries_resolve_to_latest_claim() {
    let entries = vec![
        entry(1, "Long", Weekday::Friday, "09:00", "11:00"),
        entry(2, "Short", Weekday::Friday, "10:00", "10:30"),
    ];

    match placement(&entries, Weekday::Friday, t("09:00")) {
        Placement::Start { entry, span } => assert_eq!((entry.id, span), (1, 4)),
        other => panic!("expected start, got {other:?}"),
    }
    match placement(&entries, Weekday::Friday, t("10:00")) {
        Placement::Start { entry, .. } => assert_eq!(entry.id, 2),
        other => panic!("expected start, got {other:?}"),
    }
    assert_eq!(
        placement(&entries, Weekday::Friday, t("10:30")),
        Placement::Continuation
    );
}

#[test]
fn overlap_resolution_is_repeatable() {
    let grid = TimeGrid::standard();
    let entries = vec![
        entry(1, "A", Weekday::Tuesday, "08:00", "10:00"),
        entry(2, "B", Weekday::Tuesday, "08:30", "09:30"),
        entry(3, "C", Weekday::Tuesday, "09:00", "11:00"),
    ];
    let first = GridPlacementEngine::new(entries.iter().collect(), &grid).column(Weekday::Tuesday);
    let second = GridPlacementEngine::new(entries.iter().collect(), &grid).column(Weekday::Tuesday);
    assert_eq!(first, second);
}

#[test]
fn entry_starting_before_grid_opens_starts_in_first_row() {
    let grid = TimeGrid::standard();
    let entries = vec![entry(1, "Early", Weekday::Monday, "06:30", "08:00")];
    let engine = GridPlacementEngine::new(entries.iter().collect(), &grid);

    match engine.placement(Weekday::Monday, t("07:00")) {
        Placement::Start { entry, span } => assert_eq!((entry.id, span), (1, 2)),
        other => panic!("expected start, got {other:?}"),
    }
    assert_eq!(
        engine.placement(Weekday::Monday, t("07:30")),
        Placement::Continuation
    );
    assert_eq!(
        engine.placement(Weekday::Monday, t("08:00")),
        Placement::Empty
    );
}

#[test]
fn half_overlapping_monday_entries_place_without_panicking() {
    let entries = [
        entry(1, "First", Weekday::Monday, "09:00", "10:00"),
        entry(2, "Second", Weekday::Monday, "09:30", "10:30"),
    ];

    match placement(&entries, Weekday::Monday, t("09:00")) {
        Placement::Start { entry, span } => assert_eq!((entry.id, span), (1, 2)),
        other => panic!("expected first entry to start, got {other:?}"),
    }
    match placement(&entries, Weekday::Monday, t("09:30")) {
        Placement::Start { entry, span } => assert_eq!((entry.id, span), (2, 2)),
        other => panic!("expected second entry to start, got {other:?}"),
    }
    assert_eq!(
        placement(&entries, Weekday::Monday, t("10:00")),
        Placement::Continuation
    );
    assert_eq!(
        placement(&entries, Weekday::Monday, t("10:30")),
        Placement::Empty
    );
}

fn starts_per_entry(entries: &[crate::core::models::ScheduleEntry], day: Weekday) -> Vec<usize> {
    let grid = TimeGrid::standard();
    let column = GridPlacementEngine::new(entries.iter().collect(), &grid).column(day);
    entries
        .iter()
        .map(|e| {
            column
                .iter()
                .filter(|p| matches!(p, Placement::Start { entry, .. } if entry.id == e.id))
                .count()
        })
        .collect()
}

#[test]
fn adjacent_entries_sharing_a_half_hour_both_start() {
    let later_class_first = vec![
        entry(1, "Late", Weekday::Monday, "09:45", "10:30"),
        entry(2, "Early", Weekday::Monday, "09:00", "09:45"),
    ];
    assert_eq!(starts_per_entry(&later_class_first, Weekday::Monday), vec![1, 1]);
    match placement(&later_class_first, Weekday::Monday, t("09:30")) {
        Placement::Start { entry, span } => assert_eq!((entry.id, span), (1, 2)),
        other => panic!("expected late class to start, got {other:?}"),
    }

    let earlier_class_first = vec![
        entry(1, "Early", Weekday::Monday, "09:00", "09:45"),
        entry(2, "Late", Weekday::Monday, "09:45", "10:30"),
    ];
    assert_eq!(starts_per_entry(&earlier_class_first, Weekday::Monday), vec![1, 1]);
    match placement(&earlier_class_first, Weekday::Monday, t("09:30")) {
        Placement::Start { entry, .. } => assert_eq!(entry.id, 2),
        other => panic!("expected late class to start, got {other:?}"),
    }
}
