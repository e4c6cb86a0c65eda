use crate::config::Config;
use crate::core::models::ScheduleEntry;
use crate::grid::export::ExportView;
use crate::grid::placement::{GridPlacementEngine, Placement};
use crate::ui::ansi::{FG_DARK_GRAY, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

const TIME_COLUMN_WIDTH: usize = 7;
const MIN_CELL_WIDTH: usize = 8;
const MAX_CELL_WIDTH: usize = 18;

/// Builds the string rows the display manager hands to the table printer.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder {
    util: WidthUtil,
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_rows(&self, entries: &[&ScheduleEntry]) -> Vec<Vec<String>> {
        entries
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.color.paint(&e.subject),
                    e.room.clone().unwrap_or_else(|| "-".into()),
                    e.day.to_string(),
                    format!("{}-{}", e.start_time, e.end_time),
                    e.color.paint(e.color.to_string()),
                ]
            })
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .into_iter()
            .map(|(key, description, value)| vec![key, description, value])
            .collect()
    }

    /// Column headers of the week grid: the time column, then one per day.
    pub fn week_headers(&self, view: &ExportView) -> Vec<String> {
        std::iter::once("TIME".to_string())
            .chain(view.days.iter().map(|d| d.to_string()))
            .collect()
    }

    /// One row per grid boundary. A starting entry shows its subject and room
    /// in its color, covered cells show a bar and free cells stay blank.
    pub fn week_rows(
        &self,
        view: &ExportView,
        engine: &GridPlacementEngine<'_>,
        cell_width: usize,
    ) -> Vec<Vec<String>> {
        view.grid
            .slots()
            .iter()
            .map(|slot| {
                let mut row = vec![slot.to_meridiem_string()];
                for day in &view.days {
                    row.push(self.cell(engine.placement(*day, *slot), cell_width));
                }
                row
            })
            .collect()
    }

    /// Width of a day cell that lets `days` columns fit the terminal.
    pub fn cell_width_for(&self, days: usize) -> usize {
        let days = days.max(1);
        let gaps = days * 3;
        let room = self
            .util
            .terminal_width()
            .saturating_sub(TIME_COLUMN_WIDTH + gaps);
        (room / days).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
    }

    fn cell(&self, placement: Placement<'_>, width: usize) -> String {
        match placement {
            Placement::Empty => String::new(),
            Placement::Continuation => format!("{FG_DARK_GRAY}│{STYLE_RESET}"),
            Placement::Start { entry, .. } => {
                let label = match &entry.room {
                    Some(room) => format!("{} @{}", entry.subject, room),
                    None => entry.subject.clone(),
                };
                entry.color.paint(self.util.truncate(&label, width))
            }
        }
    }
}
