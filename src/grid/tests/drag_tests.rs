use super::t;
use crate::core::types::{PaletteColor, Weekday};
use crate::grid::drag::{DragRangeSelector, DragSelection, DragState};
use crate::grid::time_grid::TimeGrid;

fn selector() -> DragRangeSelector {
    DragRangeSelector::new(TimeGrid::standard())
}

#[test]
fn drag_covers_through_slot_after_last_cell() {
    let mut drag = selector();
    drag.start(Weekday::Wednesday, 4);
    drag.move_to(Weekday::Wednesday, 6);
    assert_eq!(
        drag.end(),
        Some(DragSelection {
            day: Weekday::Wednesday,
            start: t("09:00"),
            end: t("10:30"),
        })
    );
    assert_eq!(drag.state(), DragState::Idle);
}

#[test]
fn upward_drag_is_normalized() {
    let mut drag = selector();
    drag.start(Weekday::Wednesday, 6);
    drag.move_to(Weekday::Wednesday, 4);
    let selection = drag.end().unwrap();
    assert_eq!((selection.start, selection.end), (t("09:00"), t("10:30")));
}

#[test]
fn single_cell_selects_one_slot() {
    let mut drag = selector();
    drag.start(Weekday::Monday, 0);
    let selection = drag.end().unwrap();
    assert_eq!((selection.start, selection.end), (t("07:00"), t("07:30")));
}

#[test]
fn moves_onto_another_day_are_ignored() {
    let mut drag = selector();
    drag.start(Weekday::Monday, 2);
    drag.move_to(Weekday::Tuesday, 5);
    let selection = drag.end().unwrap();
    assert_eq!(selection.day, Weekday::Monday);
    assert_eq!((selection.start, selection.end), (t("08:00"), t("08:30")));
}

#[test]
fn end_clamps_to_last_boundary() {
    let mut drag = selector();
    drag.start(Weekday::Friday, 23);
    drag.move_to(Weekday::Friday, 24);
    let selection = drag.end().unwrap();
    assert_eq!((selection.start, selection.end), (t("18:30"), t("19:00")));
}

#[test]
fn cancel_discards_gesture() {
    let mut drag = selector();
    drag.start(Weekday::Thursday, 3);
    drag.move_to(Weekday::Thursday, 8);
    drag.cancel();
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(drag.end(), None);
}

#[test]
fn idle_events_do_nothing() {
    let mut drag = selector();
    drag.move_to(Weekday::Monday, 3);
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(drag.end(), None);
}

#[test]
fn second_press_restarts_gesture() {
    let mut drag = selector();
    drag.start(Weekday::Monday, 2);
    drag.move_to(Weekday::Monday, 5);
    drag.start(Weekday::Tuesday, 10);
    let selection = drag.end().unwrap();
    assert_eq!(selection.day, Weekday::Tuesday);
    assert_eq!((selection.start, selection.end), (t("12:00"), t("12:30")));
}

#[test]
fn press_on_closing_boundary_row_starts_nothing() {
    let mut drag = selector();
    drag.start(Weekday::Friday, 24);
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(drag.end(), None);
}

#[test]
fn off_grid_indices_are_ignored() {
    let mut drag = selector();
    drag.start(Weekday::Monday, 25);
    assert_eq!(drag.state(), DragState::Idle);

    drag.start(Weekday::Monday, 1);
    drag.move_to(Weekday::Monday, 99);
    let selection = drag.end().unwrap();
    assert_eq!((selection.start, selection.end), (t("07:30"), t("08:00")));
}

#[test]
fn highlight_follows_current_range() {
    let mut drag = selector();
    assert!(!drag.is_highlighted(Weekday::Monday, 0));

    drag.start(Weekday::Monday, 5);
    drag.move_to(Weekday::Monday, 3);
    assert!(drag.is_highlighted(Weekday::Monday, 3));
    assert!(drag.is_highlighted(Weekday::Monday, 4));
    assert!(drag.is_highlighted(Weekday::Monday, 5));
    assert!(!drag.is_highlighted(Weekday::Monday, 6));
    assert!(!drag.is_highlighted(Weekday::Tuesday, 4));
}

#[test]
fn selection_prefills_a_draft_without_subject() {
    let selection = DragSelection {
        day: Weekday::Saturday,
        start: t("10:00"),
        end: t("11:00"),
    };
    let draft = selection.into_draft(PaletteColor::Teal);
    assert_eq!(draft.subject, "");
    assert_eq!(draft.day, Weekday::Saturday);
    assert_eq!((draft.start, draft.end), (t("10:00"), t("11:00")));
    assert_eq!(draft.color, PaletteColor::Teal);
    assert!(draft.validate().is_err());
}
