//! Interactive collection of entry content.
//!
//! Each collector drives a [`LinePrompt`] until the user types one of the
//! terminators (`done` or `end`, any case) and returns the rendered markdown.

use super::assessment::{AssessmentTable, Category};
use super::error::LogbookError;
use super::messages::Message;
use super::prompt::LinePrompt;
use super::table::MarkdownTable;
use anyhow::Result;

pub const TERMINATORS: [&str; 2] = ["done", "end"];

/// True for `done` and `end`, ignoring case and surrounding whitespace.
pub fn is_terminator(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    TERMINATORS.contains(&value.as_str())
}

/// Collects table rows one cell at a time.
///
/// Each cell is asked for as `"{header} {hint}"`. A terminator in any cell
/// ends collection and drops the row that was being entered. `hints` shorter
/// than `headers` is padded with empty hints.
pub fn freeform_table(prompt: &mut dyn LinePrompt, headers: &[&str], hints: &[&str]) -> Result<String> {
    prompt.notify(&Message::TableEntryHint);

    let mut table = MarkdownTable::new(headers.iter().copied());
    'rows: loop {
        let mut row = Vec::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let hint = hints.get(i).copied().unwrap_or_default();
            let value = prompt.read_line(&Message::PromptTableCell(header.to_string(), hint.to_string()))?;
            if is_terminator(&value) {
                break 'rows;
            }
            row.push(value.trim().to_string());
        }
        table.push_row(row);
    }

    tracing::debug!(rows = table.rows().len(), "freeform table collected");
    Ok(table.render())
}

/// Asks for a 1 to 5 position for both categories and renders the grid.
///
/// Invalid answers are reported and asked again, without an attempt limit.
pub fn assessment_table(prompt: &mut dyn LinePrompt) -> Result<String> {
    let mut table = AssessmentTable::new();
    for category in Category::ALL {
        loop {
            let answer = prompt.read_line(&Message::PromptPosition(category.label().to_string()))?;
            match table.mark_input(category, &answer) {
                Ok(()) => break,
                Err(LogbookError::NotANumber(_)) => prompt.warn(&Message::PositionNotANumber),
                Err(LogbookError::PositionOutOfRange(_)) => prompt.warn(&Message::PositionOutOfRange),
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(table.render())
}

/// Collects bullet lines for one section.
///
/// Blank lines are skipped. Lines are joined with `"\n- "`, so the result
/// continues a bullet list when the caller puts it after a leading marker.
pub fn multiline(prompt: &mut dyn LinePrompt, label: &str) -> Result<String> {
    prompt.notify(&Message::MultilineHint(label.to_string()));

    let mut lines = Vec::new();
    loop {
        let line = prompt.read_line(&Message::PromptMultilineLine)?;
        let line = line.trim();
        if is_terminator(line) {
            break;
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines.join("\n- "))
}
