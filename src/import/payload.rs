//! JSON contracts of the two collaborators that feed the import pipeline:
//! the schedule reader (OCR/AI over a class schedule) and the free-text
//! reader (events and to-dos). Both answer with a JSON array, sometimes
//! wrapped in a Markdown code fence and sometimes as a lone object.

use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a read class schedule. Times are meant to be 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleEntry {
    #[serde(default)]
    pub subject_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl RawScheduleEntry {
    /// The code when present, else the name.
    pub fn subject(&self) -> Option<&str> {
        let code = self.subject_code.trim();
        if !code.is_empty() {
            return Some(code);
        }
        self.subject_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawCalendarItem {
    Event(RawEvent),
    Task(RawTask),
}

/// ISO 8601 date-times, with or without an offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date_time: String,
    pub end_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

pub fn decode_schedule_payload(text: &str) -> Result<Vec<RawScheduleEntry>> {
    decode_list(text, "schedule entry")
}

pub fn decode_item_payload(text: &str) -> Result<Vec<RawCalendarItem>> {
    decode_list(text, "calendar item")
}

/// The body of a fenced block (```` ```json ... ``` ````), or the trimmed text
/// when it is not fenced.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest).trim_start();
    match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => rest[4..].trim(),
        _ => rest.trim(),
    }
}

fn decode_list<T: DeserializeOwned>(text: &str, what: &str) -> Result<Vec<T>> {
    let body = strip_code_fence(text);
    let value: Value = serde_json::from_str(body)
        .map_err(|err| Error::payload(format!("response is not valid JSON: {err}")))?;

    let invalid = |err: serde_json::Error| Error::payload(format!("invalid {what}: {err}"));
    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(invalid),
        Value::Object(_) => Ok(vec![serde_json::from_value(value).map_err(invalid)?]),
        other => Err(Error::payload(format!(
            "expected a JSON array of {what} objects, got {other}"
        ))),
    }
}
