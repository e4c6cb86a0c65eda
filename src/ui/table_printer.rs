use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_GAP: &str = " | ";

/// Plain-text tables: a banner with the upper-cased title, a header line and
/// one line per row, columns padded by visible width so painted cells line up.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let widths = self.column_widths(headers, rows);
        Self::natural_width(&widths)
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
    ) {
        let mut stdout = io::stdout();
        let _ = self.render_table(title, headers, rows, empty_message, &mut stdout);
    }

    /// Writes the table to `out`. With no rows and an `empty_message`, the
    /// message stands in for header and rows.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.column_widths(headers, rows);
        let mut total = Self::natural_width(&widths).max(self.util.visible_width(title));

        if let (true, Some(msg)) = (rows.is_empty(), empty_message) {
            total = total.max(self.util.visible_width(msg));
            self.write_banner(out, title, total)?;
            writeln!(out, "{msg}")?;
            return Self::write_rule(out, total);
        }

        self.write_banner(out, title, total)?;
        writeln!(out, "{}", self.join_cells(headers, &widths))?;
        Self::write_rule(out, total)?;
        for row in rows {
            writeln!(out, "{}", self.join_cells(row, &widths))?;
        }
        Self::write_rule(out, total)
    }

    fn column_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(widths: &[usize]) -> usize {
        match widths.len() {
            0 => 0,
            n => widths.iter().sum::<usize>() + (n - 1) * COLUMN_GAP.len(),
        }
    }

    fn join_cells<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| self.util.pad_visible(cell.as_ref(), *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    }

    fn write_banner<W: Write + ?Sized>(&self, out: &mut W, title: &str, width: usize) -> io::Result<()> {
        Self::write_rule(out, width)?;
        writeln!(out, "{}", title.to_uppercase())?;
        Self::write_rule(out, width)
    }

    fn write_rule<W: Write + ?Sized>(out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }
}
