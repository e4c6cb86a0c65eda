//! Extraction of `<days> <start>-<end>` groups from free schedule text such
//! as `"MTH 8:30AM-10:00AM"` or `"TTh 1:00 PM – 2:30 PM (lab)"`.
//!
//! Grammar, after parenthetical annotations are removed:
//!
//! ```text
//! group     := day-code ws* clock ws* separator ws* clock
//! day-code  := letter (('-' | '/')? letter)*, letters from M T W H F S U (any case)
//! clock     := digit{1,2} ':' digit{2} ws* ("AM" | "PM")
//! separator := '-' | '–' | '—'
//! ```
//!
//! Text that does not form a group is skipped. Nothing here fails.

use crate::core::types::{ClockTime, Meridiem, TimeRange, Weekday};
use crate::parser::day_code::{DayCodeResolver, is_day_code_letter};

/// One weekday occurrence of a parsed group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedSlot {
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
}

pub struct ScheduleTimeParser;

impl ScheduleTimeParser {
    /// Every group expanded across its weekdays, in text order, with
    /// identical (day, start, end) tuples collapsed.
    pub fn parse(raw: &str) -> Vec<ParsedSlot> {
        let cleaned: Vec<char> = strip_annotations(raw).chars().collect();
        let mut slots: Vec<ParsedSlot> = Vec::new();
        let mut pos = 0;

        while pos < cleaned.len() {
            let at_word_start =
                cleaned[pos].is_alphabetic() && (pos == 0 || !cleaned[pos - 1].is_alphabetic());
            if !at_word_start {
                pos += 1;
                continue;
            }

            let mut cursor = Cursor::at(&cleaned, pos);
            match schedule_group(&mut cursor) {
                Some((days, range)) => {
                    for day in days {
                        let slot = ParsedSlot {
                            day,
                            start: range.start,
                            end: range.end,
                        };
                        if !slots.contains(&slot) {
                            slots.push(slot);
                        }
                    }
                    pos = cursor.pos;
                }
                None => {
                    while pos < cleaned.len() && cleaned[pos].is_alphabetic() {
                        pos += 1;
                    }
                }
            }
        }
        slots
    }
}

/// Removes `( ... )` annotations, nested ones included.
pub fn strip_annotations(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// A 12-hour clock reading such as `"8:30AM"` or `"12:00 pm"`.
pub fn parse_clock_time(text: &str) -> Option<ClockTime> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut cursor = Cursor::at(&chars, 0);
    let time = clock_time(&mut cursor)?;
    cursor.at_end().then_some(time)
}

/// A start-end pair such as `"8:30AM-10:00AM"`. `None` unless the end is
/// after the start.
pub fn parse_time_range(text: &str) -> Option<TimeRange> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut cursor = Cursor::at(&chars, 0);
    let range = time_range(&mut cursor)?;
    cursor.at_end().then_some(range)
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(chars: &'a [char], pos: usize) -> Self {
        Self { chars, pos }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.bump(),
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.eat(char::is_whitespace).is_some() {}
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

fn schedule_group(cursor: &mut Cursor<'_>) -> Option<(Vec<Weekday>, TimeRange)> {
    let days = day_code(cursor)?;
    cursor.skip_whitespace();
    let range = time_range(cursor)?;
    Some((days, range))
}

/// A whole word made only of day-code letters, optionally joined by `-` or
/// `/` as in `"M-W-F"`. A joiner must sit between two letters.
fn day_code(cursor: &mut Cursor<'_>) -> Option<Vec<Weekday>> {
    let mut token = String::new();
    loop {
        match cursor.peek() {
            Some(c) if c.is_alphabetic() => {
                if !is_day_code_letter(c) {
                    return None;
                }
                token.push(c);
                cursor.bump();
            }
            Some('-' | '/')
                if !token.is_empty() && cursor.peek_at(1).is_some_and(is_day_code_letter) =>
            {
                cursor.bump();
            }
            _ => break,
        }
    }
    let days = DayCodeResolver::resolve(&token);
    (!days.is_empty()).then_some(days)
}

fn time_range(cursor: &mut Cursor<'_>) -> Option<TimeRange> {
    let start = clock_time(cursor)?;
    cursor.skip_whitespace();
    cursor.eat(|c| matches!(c, '-' | '\u{2013}' | '\u{2014}'))?;
    cursor.skip_whitespace();
    let end = clock_time(cursor)?;
    TimeRange::new(start, end).ok()
}

fn clock_time(cursor: &mut Cursor<'_>) -> Option<ClockTime> {
    let hour = digits(cursor, 1, 2)?;
    cursor.eat(|c| c == ':')?;
    let minute = digits(cursor, 2, 2)?;
    cursor.skip_whitespace();
    let meridiem = meridiem(cursor)?;
    ClockTime::from_meridiem(hour, minute, meridiem)
}

fn meridiem(cursor: &mut Cursor<'_>) -> Option<Meridiem> {
    let first = cursor.eat(|c| matches!(c.to_ascii_uppercase(), 'A' | 'P'))?;
    cursor.eat(|c| c.eq_ignore_ascii_case(&'M'))?;
    if first.eq_ignore_ascii_case(&'A') {
        Some(Meridiem::Am)
    } else {
        Some(Meridiem::Pm)
    }
}

/// Between `min` and `max` ASCII digits, not followed by another digit.
fn digits(cursor: &mut Cursor<'_>, min: usize, max: usize) -> Option<u16> {
    let mut value: u16 = 0;
    let mut count = 0;
    while count < max {
        match cursor.eat(|c| c.is_ascii_digit()) {
            Some(c) => {
                value = value * 10 + c.to_digit(10)? as u16;
                count += 1;
            }
            None => break,
        }
    }
    if count < min || cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(value)
}
