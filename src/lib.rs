//! # Logbook
//!
//! Weekly work-log generator. Interviews the user about the week's goals,
//! achievements and self-assessment and merges the answers into a markdown
//! template, producing one dated entry per week.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
