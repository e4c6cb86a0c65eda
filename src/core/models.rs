use crate::core::aliases::EntryId;
use crate::core::types::{ClockTime, PaletteColor, Weekday};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait BaseEntity {
    fn id(&self) -> EntryId;
    fn set_id(&mut self, id: EntryId);
}

/// Every field of an entry except its id: what the edit form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub subject: String,
    pub room: Option<String>,
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
    pub color: PaletteColor,
}

impl EntryDraft {
    pub fn new(
        subject: impl Into<String>,
        day: Weekday,
        start: ClockTime,
        end: ClockTime,
        color: PaletteColor,
    ) -> Self {
        Self {
            subject: subject.into(),
            room: None,
            day,
            start,
            end,
            color,
        }
    }

    /// Blank rooms are stored as no room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        let room = room.into();
        self.room = if room.trim().is_empty() {
            None
        } else {
            Some(room.trim().to_string())
        };
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(Error::invalid_entry("subject cannot be empty"));
        }
        if self.end <= self.start {
            return Err(Error::invalid_entry(format!(
                "end time {} must be after start time {}",
                self.end, self.start
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub day: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub color: PaletteColor,
}

impl ScheduleEntry {
    /// Id is assigned by the repository on insert.
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: 0,
            subject: draft.subject,
            room: draft.room,
            day: draft.day,
            start_time: draft.start,
            end_time: draft.end,
            color: draft.color,
        }
    }

    /// Replaces every field except `id`.
    pub fn modify(&mut self, draft: EntryDraft) -> &Self {
        self.subject = draft.subject;
        self.room = draft.room;
        self.day = draft.day;
        self.start_time = draft.start;
        self.end_time = draft.end;
        self.color = draft.color;
        self
    }

    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            subject: self.subject.clone(),
            room: self.room.clone(),
            day: self.day,
            start: self.start_time,
            end: self.end_time,
            color: self.color,
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }

    pub fn occupies(&self, day: Weekday, start: ClockTime, end: ClockTime) -> bool {
        self.day == day && self.start_time == start && self.end_time == end
    }
}

impl BaseEntity for ScheduleEntry {
    fn id(&self) -> EntryId {
        self.id
    }
    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry(id={}, subject='{}', room={}, day={}, time={}-{}, color={})",
            self.id,
            self.subject,
            self.room.as_deref().unwrap_or("-"),
            self.day,
            self.start_time,
            self.end_time,
            self.color
        )
    }
}
