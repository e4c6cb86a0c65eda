mod drag_tests;
mod placement_tests;

use crate::core::models::ScheduleEntry;
use crate::core::types::{ClockTime, PaletteColor, Weekday};

pub(super) fn t(s: &str) -> ClockTime {
    ClockTime::try_from_str(s).unwrap()
}

pub(super) fn entry(id: i32, subject: &str, day: Weekday, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry {
        id,
        subject: subject.to_string(),
        room: None,
        day,
        start_time: t(start),
        end_time: t(end),
        color: PaletteColor::Blue,
    }
}
