use crate::core::aliases::EntryId;
use crate::core::models::EntryDraft;
use crate::core::store::ScheduleEntryStore;
use crate::core::types::{ClockTime, Weekday};
use crate::extensions::chrono::WeekdayExt;
use crate::import::color::ColorAssigner;
use crate::import::day_names::normalize_day_list;
use crate::import::payload::{RawCalendarItem, RawEvent, RawScheduleEntry};
use crate::logging::LogTarget;
use crate::parser::schedule_text::ScheduleTimeParser;
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Ids of the new entries, in the order they were added.
    pub added: Vec<EntryId>,
    /// Skipped because an entry already holds the same day and time range.
    pub duplicates: usize,
    /// Source rows that could not become a valid entry.
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The source held nothing that looks like a schedule entry.
    NothingFound,
    Imported(ImportReport),
}

#[derive(Debug, Clone)]
struct Candidate {
    subject: String,
    room: Option<String>,
    day: Weekday,
    start: ClockTime,
    end: ClockTime,
}

/// Rows from the schedule reader, one entry per named day. Times may be
/// 24-hour or 12-hour.
pub fn import_raw_entries(
    store: &mut ScheduleEntryStore,
    rows: &[RawScheduleEntry],
) -> ImportOutcome {
    let mut candidates = Vec::new();
    let mut rejected = 0;

    for row in rows {
        match candidates_from_row(row) {
            Some(expanded) => candidates.extend(expanded),
            None => rejected += 1,
        }
    }
    commit(store, candidates, rejected, "schedule payload")
}

/// Free schedule text for a single subject, e.g. `"MWF 9:00AM-10:00AM"`.
pub fn import_schedule_text(
    store: &mut ScheduleEntryStore,
    subject: &str,
    text: &str,
    room: Option<&str>,
) -> ImportOutcome {
    let candidates = ScheduleTimeParser::parse(text)
        .into_iter()
        .map(|slot| Candidate {
            subject: subject.trim().to_string(),
            room: room.map(str::to_string),
            day: slot.day,
            start: slot.start,
            end: slot.end,
        })
        .collect();
    commit(store, candidates, 0, "schedule text")
}

/// Events land on the weekday of their start date. Tasks have no time range
/// and are passed over, as are events that end on a later day.
pub fn import_calendar_items(
    store: &mut ScheduleEntryStore,
    items: &[RawCalendarItem],
) -> ImportOutcome {
    let mut candidates = Vec::new();
    let mut rejected = 0;

    for item in items {
        if let RawCalendarItem::Event(event) = item {
            match candidate_from_event(event) {
                Some(candidate) => candidates.push(candidate),
                None => rejected += 1,
            }
        }
    }
    commit(store, candidates, rejected, "calendar items")
}

fn candidates_from_row(row: &RawScheduleEntry) -> Option<Vec<Candidate>> {
    let subject = row.subject()?.to_string();
    let start = ClockTime::try_from_loose(&row.start_time).ok()?;
    let end = ClockTime::try_from_loose(&row.end_time).ok()?;
    let days = normalize_day_list(&row.day);
    if days.is_empty() {
        return None;
    }

    let room = row
        .room
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    Some(
        days.into_iter()
            .map(|day| Candidate {
                subject: subject.clone(),
                room: room.clone(),
                day,
                start,
                end,
            })
            .collect(),
    )
}

fn candidate_from_event(event: &RawEvent) -> Option<Candidate> {
    let start = parse_date_time(&event.start_date_time)?;
    let end = parse_date_time(&event.end_date_time)?;
    if end.date() != start.date() {
        return None;
    }

    Some(Candidate {
        subject: event.title.trim().to_string(),
        room: event.location.clone(),
        day: start.weekday().to_weekday(),
        start: wall_clock(&start)?,
        end: wall_clock(&end)?,
    })
}

/// Offset timestamps keep their own wall-clock reading.
fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok())
}

fn wall_clock(dt: &NaiveDateTime) -> Option<ClockTime> {
    ClockTime::from_hm(dt.hour() as u16, dt.minute() as u16)
}

fn commit(
    store: &mut ScheduleEntryStore,
    candidates: Vec<Candidate>,
    rejected: usize,
    source: &str,
) -> ImportOutcome {
    if candidates.is_empty() && rejected == 0 {
        store.logger().info(
            format!("No schedule entries found in {source}."),
            LogTarget::FileOnly,
        );
        return ImportOutcome::NothingFound;
    }

    let subjects: Vec<&str> = candidates.iter().map(|c| c.subject.as_str()).collect();
    let colors = ColorAssigner::assign(store.list(), &subjects);

    let mut report = ImportReport {
        rejected,
        ..ImportReport::default()
    };
    for candidate in candidates {
        if store.has_slot(candidate.day, candidate.start, candidate.end) {
            report.duplicates += 1;
            continue;
        }
        let Some(color) = colors.get(&candidate.subject).copied() else {
            report.rejected += 1;
            continue;
        };
        let mut draft = EntryDraft::new(
            candidate.subject,
            candidate.day,
            candidate.start,
            candidate.end,
            color,
        );
        if let Some(room) = candidate.room {
            draft = draft.with_room(room);
        }
        match store.add(draft) {
            Some(id) => report.added.push(id),
            None => report.rejected += 1,
        }
    }

    store.logger().info(
        format!(
            "Imported {source}: {} added, {} duplicates skipped, {} rejected.",
            report.added.len(),
            report.duplicates,
            report.rejected
        ),
        LogTarget::FileOnly,
    );
    ImportOutcome::Imported(report)
}
