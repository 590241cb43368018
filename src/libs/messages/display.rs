//! Text of every [`Message`].
//!
//! Prompts carry no trailing `": "`; the console prompt adds its own
//! decoration around them.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::WeekRange(start, end) => format!("Creating logbook entry for week: {} - {}", start, end),
            Message::EntryFile(path) => format!("Entry file: {}", path),
            Message::EntryCreated(path) => format!("Logbook entry created successfully: {}", path),
            Message::EntrySaveFailed(error) => format!("Error saving logbook entry: {}", error),

            // === ENTRY PROMPTS ===
            Message::PromptTitle => "Enter the title of the entry".to_string(),
            Message::PromptManualEntry => "Do you want to enter the log content manually? (y/n)".to_string(),
            Message::PromptTableCell(header, hint) if hint.is_empty() => header.clone(),
            Message::PromptTableCell(header, hint) => format!("{} {}", header, hint),
            Message::PromptMultilineLine => "-".to_string(),
            Message::PromptPosition(category) => format!("Select position (1-5) for {}", category),
            Message::PromptAssessmentNotes => "Erläutern Sie Ihre Einschätzung kurz".to_string(),

            // === INPUT GUIDANCE ===
            Message::TableEntryHint => "Type 'done' or 'end' to finish entering data.".to_string(),
            Message::MultilineHint(label) => format!("Enter text for {} (Type 'done' or 'end' to finish):", label),
            Message::AssessmentHeader(title) => format!("{}:", title),
            Message::PositionOutOfRange => "Please enter a number between 1 and 5.".to_string(),
            Message::PositionNotANumber => "Invalid input. Please enter a number.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleDirectories => "Template and output locations".to_string(),
            Message::ConfigModuleFormats => "Date and time stamp formats".to_string(),
            Message::PromptTemplateDir => "Directory containing the templates".to_string(),
            Message::PromptOutputDir => "Directory for generated entries (empty for default)".to_string(),
            Message::PromptTemplateFile => "Template for manual entries".to_string(),
            Message::PromptHumanTemplateFile => "Template with pre-written content".to_string(),
            Message::PromptDateFormat => "Date stamp format (chrono)".to_string(),
            Message::PromptTimeFormat => "Time stamp format (chrono)".to_string(),
        };
        write!(f, "{}", text)
    }
}
