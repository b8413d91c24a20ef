// src/services/render.rs

//! Table rendering for one polling cycle.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use prettytable::{Attr, Cell, Row, Table, format};
use term::Terminal;
use term::terminfo::{TermInfo, TerminfoTerminal};

use crate::error::Result;
use crate::models::{DisplayRow, Styled};

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["Time (UTC)", "Mag", "Location", "PAGER", "More info"];

/// Renders display rows as a box-drawn table.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    colors: bool,
}

impl TableRenderer {
    /// Create a renderer; `colors` controls ANSI output.
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Build the table. Colors are attached as cell styles, never as text.
    pub fn table(&self, rows: &[DisplayRow]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(HEADERS.iter().map(|h| Cell::new(h)).collect()));

        for row in rows {
            table.add_row(Row::new(vec![
                Cell::new(&row.time),
                styled_cell(&row.mag),
                Cell::new(&row.place),
                styled_cell(&row.alert),
                Cell::new(&row.url),
            ]));
        }

        table
    }

    /// Print the table to text, with ANSI colors when enabled.
    pub fn render_table(&self, rows: &[DisplayRow]) -> Result<String> {
        let table = self.table(rows);
        let out = if self.colors {
            let mut terminal = TerminfoTerminal::new_with_terminfo(Vec::new(), ansi_256());
            table.print_term(&mut terminal)?;
            terminal.into_inner()
        } else {
            let mut out = Vec::new();
            table.print(&mut out)?;
            out
        };
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Render a full frame: title line, table, and a refresh footer.
    pub fn frame<Tz>(
        &self,
        title: &str,
        rows: &[DisplayRow],
        refreshed: &DateTime<Tz>,
    ) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let noun = if rows.len() == 1 { "earthquake" } else { "earthquakes" };
        Ok(format!(
            "{title}\n{}{} {noun}, refreshed {}\n",
            self.render_table(rows)?,
            rows.len(),
            refreshed.format("%H:%M:%S"),
        ))
    }
}

fn styled_cell(styled: &Styled) -> Cell {
    let cell = Cell::new(&styled.text);
    match styled.color {
        Some(index) => cell.with_style(Attr::ForegroundColor(u32::from(index))),
        None => cell,
    }
}

/// Terminfo entry for a 256-color ANSI terminal.
fn ansi_256() -> TermInfo {
    let strings = HashMap::from([
        ("setaf", b"\x1b[38;5;%p1%dm".to_vec()),
        ("setab", b"\x1b[48;5;%p1%dm".to_vec()),
        ("sgr0", b"\x1b[0m".to_vec()),
    ]);
    TermInfo {
        names: vec!["xterm-256color".to_string()],
        bools: HashMap::new(),
        numbers: HashMap::from([("colors", 256)]),
        strings,
    }
}
