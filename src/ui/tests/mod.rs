
use crate::core::models::ScheduleEntry;
use crate::core::types::{ClockTime, PaletteColor, Weekday};

pub(super) fn entry(id: i32, subject: &str, room: Option<&str>, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry {
        id,
        subject: subject.to_string(),
        room: room.map(str::to_string),
        day: Weekday::Monday,
        start_time: ClockTime::try_from_str(start).unwrap(),
        end_time: ClockTime::try_from_str(end).unwrap(),
        color: PaletteColor::Green,
    }
}
