use crate::core::models::ScheduleEntry;
use crate::core::types::{ClockTime, Weekday};
use crate::grid::time_grid::{SLOT_MINUTES, TimeGrid};

/// What a single (day, slot) cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<'a> {
    Empty,
    /// First cell of an entry; the renderer stretches it over `span` slots.
    Start {
        entry: &'a ScheduleEntry,
        span: usize,
    },
    /// Covered by an earlier `Start` cell; draw nothing.
    Continuation,
}

/// Slots an entry covers: partial trailing slots count as whole ones.
pub fn span_slots(entry: &ScheduleEntry) -> usize {
    let minutes = entry.duration_minutes();
    (minutes.div_ceil(SLOT_MINUTES) as usize).max(1)
}

fn block_end(entry: &ScheduleEntry) -> u16 {
    entry.start_time.floor_to(SLOT_MINUTES).minutes() + span_slots(entry) as u16 * SLOT_MINUTES
}

fn placement_for<'a>(entry: &'a ScheduleEntry, slot: ClockTime) -> Placement<'a> {
    let start = entry.start_time.minutes();
    let slot = slot.minutes();

    if slot <= start && start < slot + SLOT_MINUTES {
        return Placement::Start {
            entry,
            span: span_slots(entry),
        };
    }
    if start < slot && slot < block_end(entry) {
        Placement::Continuation
    } else {
        Placement::Empty
    }
}

/// The entry deciding a cell together with its placement. A `Start` beats
/// any `Continuation`; among claims of the same kind the last one wins.
fn claim<'a, I>(
    entries: I,
    day: Weekday,
    slot: ClockTime,
) -> Option<(&'a ScheduleEntry, Placement<'a>)>
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.day == day)
        .map(|entry| (entry, placement_for(entry, slot)))
        .filter(|(_, p)| *p != Placement::Empty)
        .fold(None, |best, claim| match (best, claim) {
            (Some(kept @ (_, Placement::Start { .. })), (_, Placement::Continuation)) => {
                Some(kept)
            }
            (_, claim) => Some(claim),
        })
}

/// Placement of one cell. `entries` is taken in insertion order; when
/// entries overlap, a starting entry shows over a continuing one and
/// otherwise the last one that claims the cell decides it.
pub fn placement<'a, I>(entries: I, day: Weekday, slot: ClockTime) -> Placement<'a>
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    claim(entries, day, slot)
        .map(|(_, p)| p)
        .unwrap_or(Placement::Empty)
}

/// A snapshot of entries laid over a grid, queried cell by cell.
pub struct GridPlacementEngine<'a> {
    entries: Vec<&'a ScheduleEntry>,
    grid: &'a TimeGrid,
}

impl<'a> GridPlacementEngine<'a> {
    pub fn new(entries: Vec<&'a ScheduleEntry>, grid: &'a TimeGrid) -> Self {
        Self { entries, grid }
    }

    pub fn grid(&self) -> &TimeGrid {
        self.grid
    }

    /// Like [`placement`], except that an entry which began before the grid
    /// opens starts in the first row with the span it has left.
    pub fn placement(&self, day: Weekday, slot: ClockTime) -> Placement<'a> {
        match claim(self.entries.iter().copied(), day, slot) {
            Some((entry, Placement::Continuation)) if slot == self.grid.first() => {
                let left = block_end(entry).saturating_sub(slot.minutes());
                Placement::Start {
                    entry,
                    span: left.div_ceil(SLOT_MINUTES) as usize,
                }
            }
            Some((_, p)) => p,
            None => Placement::Empty,
        }
    }

    /// One placement per grid boundary for `day`, top to bottom.
    pub fn column(&self, day: Weekday) -> Vec<Placement<'a>> {
        self.grid
            .slots()
            .iter()
            .map(|slot| self.placement(day, *slot))
            .collect()
    }
}
