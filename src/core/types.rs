use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "show", to_string = "show")]
    Show,
    #[strum(serialize = "list", to_string = "list")]
    List,
    #[strum(serialize = "add", to_string = "add")]
    Add,
    #[strum(serialize = "edit", to_string = "edit")]
    Edit,
    #[strum(serialize = "delete", serialize = "del", to_string = "delete")]
    Delete,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "import", to_string = "import")]
    Import,
    #[strum(serialize = "import-items", to_string = "import-items")]
    ImportItems,
    #[strum(serialize = "parse", to_string = "parse")]
    Parse,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "help", serialize = "-h", serialize = "--help", to_string = "help")]
    Help,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<GlobalCommand>()
            ))
        })
    }

    pub fn usage(&self) -> &'static str {
        match self {
            GlobalCommand::Show => "show [--auto-fit] [DAY...]",
            GlobalCommand::List => "list",
            GlobalCommand::Add => "add SUBJECT DAY START END [ROOM] [--color COLOR]",
            GlobalCommand::Edit => "edit ID SUBJECT DAY START END [ROOM] [--color COLOR]",
            GlobalCommand::Delete => "delete ID",
            GlobalCommand::Clear => "clear",
            GlobalCommand::Import => "import FILE",
            GlobalCommand::ImportItems => "import-items FILE",
            GlobalCommand::Parse => "parse SUBJECT TEXT [ROOM]",
            GlobalCommand::Config => "config [KEY VALUE]",
            GlobalCommand::Help => "help",
        }
    }
}

/// Canonical weekday. Declaration order is the grid's column order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(serialize = "monday", serialize = "mon", serialize = "mon.", to_string = "Monday")]
    Monday,
    #[strum(
        serialize = "tuesday",
        serialize = "tue",
        serialize = "tue.",
        serialize = "tues",
        to_string = "Tuesday"
    )]
    Tuesday,
    #[strum(serialize = "wednesday", serialize = "wed", serialize = "wed.", to_string = "Wednesday")]
    Wednesday,
    #[strum(
        serialize = "thursday",
        serialize = "thu",
        serialize = "thu.",
        serialize = "thur",
        serialize = "thurs",
        to_string = "Thursday"
    )]
    Thursday,
    #[strum(serialize = "friday", serialize = "fri", serialize = "fri.", to_string = "Friday")]
    Friday,
    #[strum(serialize = "saturday", serialize = "sat", serialize = "sat.", to_string = "Saturday")]
    Saturday,
    #[strum(serialize = "sunday", serialize = "sun", serialize = "sun.", to_string = "Sunday")]
    Sunday,
}

impl Weekday {
    /// Parses a long-form or abbreviated day name. Day codes go through the
    /// day-code resolver instead.
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<Weekday>()
            ))
        })
    }

    pub fn all() -> Vec<Weekday> {
        Weekday::iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum Meridiem {
    #[strum(serialize = "AM")]
    Am,
    #[strum(serialize = "PM")]
    Pm,
}

/// Wall-clock time of day at minute resolution, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// 12-hour clock: `12 AM` is midnight, `12 PM` is noon.
    pub fn from_meridiem(hour: u16, minute: u16, meridiem: Meridiem) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour24 = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Self::from_hm(hour24, minute)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Rounds down to the nearest multiple of `step` minutes.
    pub fn floor_to(self, step: u16) -> Self {
        Self(self.0 - self.0 % step)
    }

    /// Strict 24-hour `H:MM` / `HH:MM`.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (h, m) = s.split_once(':').ok_or_else(|| Self::error(s))?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(Self::error(s));
        }
        let hour: u16 = h.parse().map_err(|_| Self::error(s))?;
        let minute: u16 = m.parse().map_err(|_| Self::error(s))?;
        Self::from_hm(hour, minute).ok_or_else(|| Self::error(s))
    }

    /// 12-hour `h:mmAM`, with optional space and any case on the meridiem.
    pub fn try_from_meridiem_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let (clock, meridiem) = Meridiem::iter()
            .find_map(|m| {
                upper
                    .strip_suffix(m.as_ref())
                    .map(|rest| (rest.trim_end().to_string(), m))
            })
            .ok_or_else(|| Self::error(s))?;
        let (h, mm) = clock.split_once(':').ok_or_else(|| Self::error(s))?;
        if mm.len() != 2 {
            return Err(Self::error(s));
        }
        let hour: u16 = h.parse().map_err(|_| Self::error(s))?;
        let minute: u16 = mm.parse().map_err(|_| Self::error(s))?;
        Self::from_meridiem(hour, minute, meridiem).ok_or_else(|| Self::error(s))
    }

    /// Accepts either clock; 24-hour wins when both could apply.
    pub fn try_from_loose(s: &str) -> Result<Self> {
        Self::try_from_str(s).or_else(|_| Self::try_from_meridiem_str(s))
    }

    pub fn to_meridiem_string(self) -> String {
        let (hour12, meridiem) = match self.hour() {
            0 => (12, Meridiem::Am),
            h @ 1..=11 => (h, Meridiem::Am),
            12 => (12, Meridiem::Pm),
            h => (h - 12, Meridiem::Pm),
        };
        format!("{}:{:02}{}", hour12, self.minute(), meridiem)
    }

    fn error(input: &str) -> Error {
        Error::Parse(format!(
            "Invalid time: '{}'. Expected 24-hour HH:MM (e.g. 08:30, 13:00).",
            input
        ))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ClockTime, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if start >= end {
            return Err(Error::Parse(format!(
                "Start time '{}' must be earlier than end time '{}'.",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid time range format: '{}'. Expected format: 'HH:MM-HH:MM'.",
                s
            ))
        })?;
        Self::new(ClockTime::try_from_str(start)?, ClockTime::try_from_str(end)?)
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TimeRange, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        TimeRange::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// The fixed subject palette, in assignment order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
    Red,
    Yellow,
}

impl PaletteColor {
    pub const PALETTE: [PaletteColor; 8] = [
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Purple,
        PaletteColor::Orange,
        PaletteColor::Pink,
        PaletteColor::Teal,
        PaletteColor::Red,
        PaletteColor::Yellow,
    ];

    pub const RESET: &'static str = crate::csi!("0m");

    /// Palette entry for an assignment counter; wraps after the last color.
    pub fn cycle(counter: usize) -> Self {
        Self::PALETTE[counter % Self::PALETTE.len()]
    }

    /// Foreground ANSI color for terminal rendering.
    pub fn ansi_fg(self) -> &'static str {
        match self {
            PaletteColor::Blue => crate::csi!("34m"),
            PaletteColor::Green => crate::csi!("32m"),
            PaletteColor::Purple => crate::csi!("35m"),
            PaletteColor::Orange => crate::csi!("38;5;208m"),
            PaletteColor::Pink => crate::csi!("38;5;205m"),
            PaletteColor::Teal => crate::csi!("36m"),
            PaletteColor::Red => crate::csi!("31m"),
            PaletteColor::Yellow => crate::csi!("33m"),
        }
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!("{}{}{}", self.ansi_fg(), s.as_ref(), Self::RESET)
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid value for color: '{}'. Valid colors: {}",
                s.trim(),
                valid_csv::<PaletteColor>()
            ))
        })
    }
}
