use crate::core::types::{ClockTime, TimeRange};
use crate::errors::{Error, Result};

pub const SLOT_MINUTES: u16 = 30;

const STANDARD_START: u16 = 7 * 60;
const STANDARD_END: u16 = 19 * 60;

/// Half-hour boundaries of the operating window, both ends included. The last
/// boundary only closes the final slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    slots: Vec<ClockTime>,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::standard()
    }
}

impl TimeGrid {
    /// 07:00 through 19:00: 25 boundaries.
    pub fn standard() -> Self {
        Self::build(STANDARD_START, STANDARD_END)
    }

    pub fn from_window(window: &TimeRange) -> Result<Self> {
        let (start, end) = (window.start.minutes(), window.end.minutes());
        if start % SLOT_MINUTES != 0 || end % SLOT_MINUTES != 0 {
            return Err(Error::config(format!(
                "Grid window {} must start and end on a {}-minute boundary.",
                window, SLOT_MINUTES
            )));
        }
        Ok(Self::build(start, end))
    }

    fn build(start: u16, end: u16) -> Self {
        let slots = (start..=end)
            .step_by(SLOT_MINUTES as usize)
            .filter_map(ClockTime::from_minutes)
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[ClockTime] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<ClockTime> {
        self.slots.get(index).copied()
    }

    /// Index of a boundary; `None` for times that are not exactly on one.
    pub fn index_of(&self, time: ClockTime) -> Option<usize> {
        self.slots.binary_search(&time).ok()
    }

    pub fn first(&self) -> ClockTime {
        self.slots[0]
    }

    /// Final end boundary.
    pub fn last(&self) -> ClockTime {
        self.slots[self.slots.len() - 1]
    }

    pub fn window(&self) -> TimeRange {
        TimeRange {
            start: self.first(),
            end: self.last(),
        }
    }

    /// Narrows the grid to the boundaries covering `[from, to]`, rounding
    /// outward to whole slots and never leaving the current window.
    pub fn crop(&self, from: ClockTime, to: ClockTime) -> TimeGrid {
        let lo = from
            .floor_to(SLOT_MINUTES)
            .minutes()
            .max(self.first().minutes());
        let hi = ceil_to_slot(to.minutes()).min(self.last().minutes());
        if hi <= lo {
            return self.clone();
        }
        Self::build(lo, hi)
    }
}

fn ceil_to_slot(minutes: u16) -> u16 {
    minutes.div_ceil(SLOT_MINUTES) * SLOT_MINUTES
}
