/// Every user-facing line the application prints or prompts with.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and fill in its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === ENTRY MESSAGES ===
    WeekRange(String, String), // start, end
    EntryFile(String),         // path
    EntryCreated(String),      // path
    EntrySaveFailed(String),   // error

    // === ENTRY PROMPTS ===
    PromptTitle,
    PromptManualEntry,
    PromptTableCell(String, String), // header, hint
    PromptMultilineLine,
    PromptPosition(String), // category
    PromptAssessmentNotes,

    // === INPUT GUIDANCE ===
    TableEntryHint,
    MultilineHint(String), // section label
    AssessmentHeader(String),
    PositionOutOfRange,
    PositionNotANumber,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDirectories,
    ConfigModuleFormats,
    PromptTemplateDir,
    PromptOutputDir,
    PromptTemplateFile,
    PromptHumanTemplateFile,
    PromptDateFormat,
    PromptTimeFormat,
}
