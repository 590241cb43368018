//! Building and writing one weekly logbook entry.
//!
//! [`generate`] runs the whole interview:
//!
//! 1. Announce the week (Monday to Friday of the run date)
//! 2. Ask for the title and whether the content is entered by hand
//! 3. Load the base template; it must exist in either mode
//! 4. Manual: fill header and content tokens of the base template from the
//!    interview. Human: load the human template and erase its content tokens
//! 5. Write `{monday}.md` into the output directory
//!
//! All run state lives in a [`LogbookContext`] that the caller builds from the
//! configuration and passes in.

use super::collect;
use super::config::Config;
use super::messages::Message;
use super::prompt::LinePrompt;
use super::template::{read_template, substitute, tokens, Replacements};
use super::week::Week;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

pub const GOAL_HEADERS: [&str; 3] = ["Ziel / Auftrag", "Zieltermin", "Ziel erreicht am"];
pub const GOAL_HINTS: [&str; 3] = ["", "(DD.MM.YYYY)", "(DD.MM.YYYY)"];

pub const ACHIEVEMENTS_LABEL: &str = "Was mir gut gelungen ist";
pub const DIFFICULTIES_LABEL: &str = "Was mir Schwierigkeiten bereitet hat";
pub const LEARNINGS_LABEL: &str = "Was ich für die Zukunft mitnehme";

/// How the content sections are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Interview the user for every section.
    Manual,
    /// Use the pre-written template; content tokens are erased.
    Human,
}

/// Answers given up front, e.g. from command-line flags. `None` means ask.
#[derive(Debug, Clone, Default)]
pub struct EntryOptions {
    pub title: Option<String>,
    pub mode: Option<EntryMode>,
}

#[derive(Debug, Clone)]
pub struct LogbookContext {
    pub now: NaiveDateTime,
    pub week: Week,
    pub template_path: PathBuf,
    pub human_template_path: PathBuf,
    pub output_dir: PathBuf,
    pub date_format: String,
    pub time_format: String,
}

impl LogbookContext {
    pub fn new(config: &Config, now: NaiveDateTime) -> Self {
        Self {
            now,
            week: Week::containing(now.date()),
            template_path: config.template_path(),
            human_template_path: config.human_template_path(),
            output_dir: config.output_dir(),
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.week.file_name())
    }

    pub fn date_stamp(&self) -> Result<String> {
        format_stamp(&self.now, &self.date_format)
    }

    pub fn time_stamp(&self) -> Result<String> {
        format_stamp(&self.now, &self.time_format)
    }

    /// Week range, title and creation stamps.
    pub fn header_replacements(&self, title: &str) -> Result<Replacements> {
        let mut replacements = Replacements::new();
        replacements.insert(tokens::WEEK_RANGE, self.week.range());
        replacements.insert(tokens::TITLE, title);
        replacements.insert(tokens::DATE, self.date_stamp()?);
        replacements.insert(tokens::TIME, self.time_stamp()?);
        Ok(replacements)
    }
}

// `DelayedFormat` reports a bad format string as `fmt::Error`, which
// `to_string()` would turn into a panic.
fn format_stamp(now: &NaiveDateTime, format: &str) -> Result<String> {
    let mut stamp = String::new();
    write!(stamp, "{}", now.format(format)).map_err(|_| anyhow::anyhow!("invalid stamp format '{}'", format))?;
    Ok(stamp)
}

/// Interviews the user for all seven content sections.
pub fn content_replacements(prompt: &mut dyn LinePrompt) -> Result<Replacements> {
    let goals = collect::freeform_table(prompt, &GOAL_HEADERS, &GOAL_HINTS)?;
    let achievements = collect::multiline(prompt, ACHIEVEMENTS_LABEL)?;
    let difficulties = collect::multiline(prompt, DIFFICULTIES_LABEL)?;
    let learnings = collect::multiline(prompt, LEARNINGS_LABEL)?;

    prompt.notify(&Message::AssessmentHeader("Selbsteinschätzung".to_string()));
    let self_assessment = collect::assessment_table(prompt)?;
    let notes = prompt.read_line(&Message::PromptAssessmentNotes)?;
    prompt.notify(&Message::AssessmentHeader("Feedback".to_string()));
    let feedback = collect::assessment_table(prompt)?;

    let mut replacements = Replacements::new();
    replacements.insert(tokens::GOALS, goals);
    replacements.insert(tokens::ACHIEVEMENTS, format!("> {}", achievements));
    replacements.insert(tokens::DIFFICULTIES, format!("> {}", difficulties));
    replacements.insert(tokens::LEARNINGS, format!("> {}", learnings));
    replacements.insert(tokens::SELF_ASSESSMENT, self_assessment);
    replacements.insert(tokens::ASSESSMENT_NOTES, format!("> {}", notes.trim()));
    replacements.insert(tokens::FEEDBACK, feedback);
    Ok(replacements)
}

/// Erases every content token.
pub fn blank_content() -> Replacements {
    tokens::CONTENT.iter().map(|token| (*token, "")).collect()
}

/// Runs the interview and returns the finished document.
///
/// # Errors
///
/// Fails with [`TemplateNotFound`](super::error::LogbookError::TemplateNotFound) if the base template
/// is missing (in either mode) or, in human mode, if the human template is
/// missing. Any error of the prompt is passed through.
pub fn render_entry(ctx: &LogbookContext, prompt: &mut dyn LinePrompt, options: &EntryOptions) -> Result<String> {
    prompt.notify(&Message::WeekRange(ctx.week.start_formatted(), ctx.week.end_formatted()));

    let title = match &options.title {
        Some(title) => title.clone(),
        None => prompt.read_line(&Message::PromptTitle)?,
    };
    let mode = match options.mode {
        Some(mode) => mode,
        None if prompt.confirm(&Message::PromptManualEntry)? => EntryMode::Manual,
        None => EntryMode::Human,
    };
    tracing::debug!(?mode, title = %title, "entry options resolved");

    let template = read_template(&ctx.template_path)?;
    match mode {
        EntryMode::Manual => {
            let mut replacements = ctx.header_replacements(&title)?;
            replacements.extend(content_replacements(prompt)?);
            tracing::debug!(count = replacements.len(), "applying replacements");
            Ok(substitute(&template, &replacements))
        }
        // The human template is used as written; header tokens stay.
        EntryMode::Human => {
            let human = read_template(&ctx.human_template_path)?;
            Ok(substitute(&human, &blank_content()))
        }
    }
}

/// Writes the document to `{output_dir}/{monday}.md`, replacing any entry for
/// the same week.
pub fn write_entry(ctx: &LogbookContext, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(&ctx.output_dir)?;
    let path = ctx.output_path();
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "entry written");
    Ok(path)
}

/// Builds and saves the entry for the context's week.
///
/// A failed write is reported through the prompt and yields `Ok(None)`; a
/// missing template is returned as an error.
pub fn generate(ctx: &LogbookContext, prompt: &mut dyn LinePrompt, options: &EntryOptions) -> Result<Option<PathBuf>> {
    let content = render_entry(ctx, prompt, options)?;
    match write_entry(ctx, &content) {
        Ok(path) => {
            prompt.notify(&Message::EntryCreated(path.display().to_string()));
            Ok(Some(path))
        }
        Err(e) => {
            prompt.error(&Message::EntrySaveFailed(e.to_string()));
            Ok(None)
        }
    }
}
