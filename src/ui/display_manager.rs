use crate::config::Config;
use crate::core::models::ScheduleEntry;
use crate::grid::export::ExportView;
use crate::grid::placement::GridPlacementEngine;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::TablePrinter;
use std::io::{self, Write};

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            data: DisplayDataBuilder::new(),
        }
    }

    pub fn display_config(&self, config: &Config) {
        let headers = ["KEY", "DESCRIPTION", "VALUE"];
        let rows = self.data.config_rows(config);
        self.printer
            .print_table("Config", &headers, &rows, Some("No config items found."));
    }

    pub fn render_entries<W: Write + ?Sized>(
        &self,
        entries: &[&ScheduleEntry],
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["ID", "SUBJECT", "ROOM", "DAY", "TIME", "COLOR"];
        let rows = self.data.entry_rows(entries);
        self.printer.render_table(
            "Entries",
            &headers,
            &rows,
            Some("No schedule entries yet."),
            out,
        )
    }

    pub fn display_entries(&self, entries: &[&ScheduleEntry]) {
        let _ = self.render_entries(entries, &mut io::stdout());
    }

    pub fn render_week<W: Write + ?Sized>(
        &self,
        view: &ExportView,
        entries: Vec<&ScheduleEntry>,
        cell_width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let engine = GridPlacementEngine::new(entries, &view.grid);
        let headers = self.data.week_headers(view);
        let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
        let rows = self.data.week_rows(view, &engine, cell_width);
        self.printer.render_table("Week", &headers, &rows, None, out)
    }

    /// Week grid sized to the terminal.
    pub fn display_week(&self, view: &ExportView, entries: Vec<&ScheduleEntry>) {
        let width = self.data.cell_width_for(view.days.len());
        let _ = self.render_week(view, entries, width, &mut io::stdout());
    }
}
