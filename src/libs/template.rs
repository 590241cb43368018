//! Literal placeholder substitution for markdown templates.
//!
//! Templates carry plain-text tokens such as `Title` or `T0` with no
//! delimiter syntax around them. Every occurrence of a token is replaced
//! verbatim, so any prose in a template that happens to contain a token is
//! replaced as well. Templates are written with that in mind.
//!
//! ## Usage
//!
//! ```rust
//! use logbook::libs::template::{substitute, tokens, Replacements};
//!
//! let mut replacements = Replacements::new();
//! replacements.insert(tokens::TITLE, "Sprint 1");
//! replacements.insert(tokens::TIME, "09-30");
//!
//! let text = substitute("# Title (HH:MM)", &replacements);
//! assert_eq!(text, "# Sprint 1 (09-30)");
//! ```

use super::error::LogbookError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Token vocabulary understood by the logbook templates.
pub mod tokens {
    /// Reporting period, replaced with `start - end` of the week.
    pub const WEEK_RANGE: &str = "dd.mm.yyyy - dd.mm.yyyy";
    pub const TITLE: &str = "Title";
    /// Creation date stamp.
    pub const DATE: &str = "YYYY-MM-DD";
    /// Creation time stamp.
    pub const TIME: &str = "HH:MM";

    /// Goals table.
    pub const GOALS: &str = "T0";
    pub const ACHIEVEMENTS: &str = "M0";
    pub const DIFFICULTIES: &str = "M1";
    pub const LEARNINGS: &str = "M2";
    /// Self-assessment table.
    pub const SELF_ASSESSMENT: &str = "T1";
    pub const ASSESSMENT_NOTES: &str = "M3";
    /// Feedback table.
    pub const FEEDBACK: &str = "T2";

    /// Content tokens in the order they are filled.
    pub const CONTENT: [&str; 7] = [GOALS, ACHIEVEMENTS, DIFFICULTIES, LEARNINGS, SELF_ASSESSMENT, ASSESSMENT_NOTES, FEEDBACK];
}

/// Ordered token to value mapping.
///
/// Insertion order is application order. Re-inserting a token replaces its
/// value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == token) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((token, value)),
        }
    }

    /// Appends all pairs of `other`, in its order.
    pub fn extend(&mut self, other: Replacements) {
        for (token, value) in other.pairs {
            self.insert(token, value);
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.pairs.iter().find(|(existing, _)| existing == token).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(token, value)| (token.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Replacements::new();
        for (token, value) in iter {
            replacements.insert(token, value);
        }
        replacements
    }
}

/// Replaces every occurrence of every token, pair by pair in mapping order.
///
/// Tokens that do not occur are no-ops. Empty tokens are skipped.
pub fn substitute(template: &str, replacements: &Replacements) -> String {
    let mut text = template.to_string();
    for (token, value) in replacements.iter() {
        if token.is_empty() || !text.contains(token) {
            continue;
        }
        text = text.replace(token, value);
    }
    text
}

/// Reads a template file as UTF-8.
///
/// A missing file is reported as [`LogbookError::TemplateNotFound`] so that
/// the caller can treat it as fatal.
pub fn read_template(path: &Path) -> Result<String, LogbookError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "template loaded");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(LogbookError::TemplateNotFound(path.to_path_buf())),
        Err(source) => Err(LogbookError::TemplateRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
