use crate::core::models::EntryDraft;
use crate::core::types::{ClockTime, PaletteColor, Weekday};
use crate::grid::time_grid::TimeGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        day: Weekday,
        start_index: usize,
        current_index: usize,
    },
}

/// Range picked by a completed drag; pre-fills the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSelection {
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl DragSelection {
    /// Subject and room are left for the user to fill in.
    pub fn into_draft(self, color: PaletteColor) -> EntryDraft {
        EntryDraft::new("", self.day, self.start, self.end, color)
    }
}

/// Pointer-drag over grid cells, as an explicit state machine.
#[derive(Debug, Clone)]
pub struct DragRangeSelector {
    grid: TimeGrid,
    state: DragState,
}

impl DragRangeSelector {
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pointer down on a cell. A second press without a release restarts.
    /// The closing boundary row starts nothing, since no slot follows it.
    pub fn start(&mut self, day: Weekday, index: usize) {
        if index + 1 >= self.grid.len() {
            return;
        }
        self.state = DragState::Dragging {
            day,
            start_index: index,
            current_index: index,
        };
    }

    /// Pointer over a cell. Ignored when idle, off the grid, or on another day.
    pub fn move_to(&mut self, day: Weekday, index: usize) {
        if index >= self.grid.len() {
            return;
        }
        if let DragState::Dragging {
            day: drag_day,
            current_index,
            ..
        } = &mut self.state
        {
            if *drag_day == day {
                *current_index = index;
            }
        }
    }

    /// Pointer up. Returns to idle and yields the covered range; the end is
    /// one slot past the last highlighted cell, clamped to the grid's end.
    pub fn end(&mut self) -> Option<DragSelection> {
        let DragState::Dragging {
            day,
            start_index,
            current_index,
        } = std::mem::replace(&mut self.state, DragState::Idle)
        else {
            return None;
        };

        let lo = start_index.min(current_index);
        let hi = start_index.max(current_index);
        let start = self.grid.slot(lo)?;
        let end = self.grid.slot(hi + 1).unwrap_or_else(|| self.grid.last());
        Some(DragSelection { day, start, end })
    }

    /// Pointer left the grid: drop the gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Whether a cell lies inside the range currently being dragged.
    pub fn is_highlighted(&self, day: Weekday, index: usize) -> bool {
        match self.state {
            DragState::Dragging {
                day: drag_day,
                start_index,
                current_index,
            } => {
                drag_day == day
                    && start_index.min(current_index) <= index
                    && index <= start_index.max(current_index)
            }
            DragState::Idle => false,
        }
    }
}
