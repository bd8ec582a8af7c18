//! Rows, the rendered view, and the results region that holds it.

use std::fmt;

use serde::Serialize;

use crate::session::{ParseOutcome, ParseStep};

use super::Banner;

const HEADERS: [&str; 4] = ["Step", "Stack", "Input", "Action"];

/// One displayed parse step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    pub step: usize,
    /// Stack symbols separated by single spaces, bottom first.
    pub stack: String,
    pub input: String,
    /// The action descriptor, followed by ` - ` and the production when the
    /// step reduced.
    pub action: String,
    /// Last step of a trace that was not accepted.
    pub failure_point: bool,
}

impl TraceRow {
    fn from_step(step: &ParseStep, failure_point: bool) -> Self {
        let action = match &step.reduce_production {
            Some(production) => format!("{} - {}", step.action, production),
            None => step.action.clone(),
        };
        Self {
            step: step.index,
            stack: step.stack.join(" "),
            input: step.remaining_input.clone(),
            action,
            failure_point,
        }
    }

    /// The four cells in column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.step.to_string(),
            self.stack.clone(),
            self.input.clone(),
            self.action.clone(),
        ]
    }
}

/// Everything the results region shows for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceView {
    pub banner: Banner,
    pub rows: Vec<TraceRow>,
}

impl TraceView {
    /// An empty trace suppresses the results region entirely.
    pub fn shows_results(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn failure_row(&self) -> Option<&TraceRow> {
        self.rows.iter().find(|row| row.failure_point)
    }
}

/// Render an outcome.
pub fn render(outcome: &ParseOutcome) -> TraceView {
    let trace = outcome.trace();
    let failed = !outcome.accepted();
    let last = trace.len();

    let rows = trace
        .iter()
        .enumerate()
        .map(|(i, step)| TraceRow::from_step(step, failed && i + 1 == last))
        .collect();

    TraceView {
        banner: Banner::for_outcome(outcome),
        rows,
    }
}

impl fmt::Display for TraceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner)?;
        if !self.shows_results() {
            return Ok(());
        }

        let cells: Vec<[String; 4]> = self.rows.iter().map(TraceRow::cells).collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f)?;
        write_line(f, "  ", &HEADERS.map(String::from), &widths)?;
        let rule = widths.map(|w| "-".repeat(w));
        write_line(f, "  ", &rule, &widths)?;
        for (row, line) in self.rows.iter().zip(&cells) {
            let marker = if row.failure_point { "> " } else { "  " };
            write_line(f, marker, line, &widths)?;
        }
        Ok(())
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    marker: &str,
    cells: &[String; 4],
    widths: &[usize; 4],
) -> fmt::Result {
    let mut line = String::from(marker);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = width.saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }
    writeln!(f, "{line}")
}

/// The results region. Holds at most one rendered outcome.
#[derive(Debug, Default)]
pub struct TraceTable {
    view: Option<TraceView>,
}

impl TraceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed outcome. Prior rows never survive.
    pub fn show(&mut self, outcome: &ParseOutcome) -> &TraceView {
        self.view.insert(render(outcome))
    }

    pub fn clear(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<&TraceView> {
        self.view.as_ref()
    }

    pub fn rows(&self) -> &[TraceRow] {
        self.view.as_ref().map_or(&[], |view| view.rows.as_slice())
    }
}
