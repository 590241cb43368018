//! Domain errors raised while building a logbook entry.
//!
//! Most of the application propagates `anyhow::Result`; the variants here
//! exist so that callers can match on the failures that drive control flow,
//! such as re-prompting on a bad assessment position or aborting on a missing
//! template.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogbookError {
    /// A required template file does not exist.
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// The template exists but could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An assessment position that is not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// An assessment position outside of `1..=5`.
    #[error("position {0} is outside of 1..=5")]
    PositionOutOfRange(i64),

    /// The input source has no more lines to offer.
    #[error("input ended before the entry was complete")]
    InputExhausted,

    /// A `--date` value that is not `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
