use crate::core::models::ScheduleEntry;
use crate::core::types::Weekday;
use crate::grid::time_grid::TimeGrid;
use std::cmp::{max, min};

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Days to include; empty means the whole week.
    pub days: Vec<Weekday>,
    /// Crop the hours to the earliest start and latest end across all entries.
    pub auto_fit: bool,
}

/// Day columns and slot rows a static export draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportView {
    pub days: Vec<Weekday>,
    pub grid: TimeGrid,
}

pub fn export_view<'a, I>(entries: I, base: &TimeGrid, options: &ExportOptions) -> ExportView
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut days = if options.days.is_empty() {
        Weekday::all()
    } else {
        options.days.clone()
    };
    days.sort();
    days.dedup();

    let grid = if options.auto_fit {
        fitted_grid(entries, base)
    } else {
        base.clone()
    };

    ExportView { days, grid }
}

fn fitted_grid<'a, I>(entries: I, base: &TimeGrid) -> TimeGrid
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let bounds = entries.into_iter().fold(None, |acc, e| match acc {
        None => Some((e.start_time, e.end_time)),
        Some((from, to)) => Some((min(from, e.start_time), max(to, e.end_time))),
    });
    match bounds {
        Some((from, to)) => base.crop(from, to),
        None => base.clone(),
    }
}
