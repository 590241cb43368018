//! GitHub-flavored markdown table rendering.
//!
//! Tables are rendered with every column left-aligned and padded to a common
//! width, so the markdown source stays readable next to the rendered output:
//!
//! ```text
//! | Ziel / Auftrag   | Zieltermin   |
//! |------------------|--------------|
//! | Release 1.2      | 14.03.2025   |
//! ```
//!
//! A column is at least two characters wider than its header. Rows shorter
//! than the widest row are padded with empty cells, so ragged input still
//! renders with consistent column alignment.

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use std::fmt::{Display, Formatter};

/// Extra width every column gets on top of its header text.
const MIN_PADDING: usize = 2;

/// Pipe borders and a dashed line under the header, nothing else.
fn markdown_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table whose first row is the header.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let header = rows.remove(0);
        Self { header, rows }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width of the widest row, header included.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).chain(std::iter::once(self.header.len())).max().unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let mut table = Table::new();
        table.set_format(markdown_format());
        // Trailing blanks in the header cell set the minimum column width.
        let padding = " ".repeat(MIN_PADDING);
        table.set_titles(to_row(pad_row(&self.header, columns).into_iter().map(|cell| format!("{}{}", cell, padding))));
        for row in &self.rows {
            table.add_row(to_row(pad_row(row, columns)));
        }

        // `lines()` also drops the `\r` prettytable emits on Windows.
        table.to_string().lines().collect::<Vec<_>>().join("\n")
    }
}

impl Display for MarkdownTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn pad_row(row: &[String], columns: usize) -> Vec<&str> {
    let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
    cells.resize(columns, "");
    cells
}

fn to_row<I, S>(cells: I) -> Row
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Row::new(cells.into_iter().map(|cell| Cell::new(cell.as_ref())).collect())
}
