//! Fixed-width text tables.
//!
//! Every column is as wide as its longest cell (header included) and cells
//! are right-aligned. The header row is underlined with `=` across the full
//! row width.

/// Separator placed between columns.
pub const COLUMN_SEPARATOR: &str = "  |  ";

/// Accumulates rows and renders them as an aligned table.
#[derive(Debug, Default)]
pub struct TablePrinter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header row.
    #[must_use]
    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(ToString::to_string).collect();
        self
    }

    /// Append a data row.
    pub fn add_row(&mut self, fields: Vec<String>) {
        self.rows.push(fields);
    }

    /// Render the table. Each line ends with `\n`.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        if !self.headers.is_empty() {
            let header = format_row(&self.headers, &widths);
            let rule = "=".repeat(header.chars().count());
            out.push_str(&header);
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}
