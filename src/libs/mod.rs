//! Core library modules of the logbook generator.
//!
//! - **Rendering**: `template`, `table`, `assessment`
//! - **Interview**: `prompt`, `collect`
//! - **Entry**: `week`, `logbook`
//! - **Infrastructure**: `config`, `data_storage`, `error`, `messages`
//!
//! ```rust
//! use logbook::libs::template::{substitute, Replacements};
//!
//! let text = substitute("Title", &[("Title", "Sprint 1")].into_iter().collect::<Replacements>());
//! assert_eq!(text, "Sprint 1");
//! ```

pub mod assessment;
pub mod collect;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod logbook;
pub mod messages;
pub mod prompt;
pub mod table;
pub mod template;
pub mod week;
