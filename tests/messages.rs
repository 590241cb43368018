#[cfg(test)]
mod tests {
    use logbook::libs::messages::Message;

    #[test]
    fn test_prompt_texts() {
        assert_eq!(Message::PromptTitle.to_string(), "Enter the title of the entry");
        assert_eq!(
            Message::PromptManualEntry.to_string(),
            "Do you want to enter the log content manually? (y/n)"
        );
        assert_eq!(Message::PromptTableCell("Ziel / Auftrag".into(), "".into()).to_string(), "Ziel / Auftrag");
    }

    #[test]
    fn test_status_texts() {
        assert_eq!(
            Message::WeekRange("2025.03.10".into(), "2025.03.14".into()).to_string(),
            "Creating logbook entry for week: 2025.03.10 - 2025.03.14"
        );
        assert_eq!(
            Message::MultilineHint("Was mir gut gelungen ist".into()).to_string(),
            "Enter text for Was mir gut gelungen ist (Type 'done' or 'end' to finish):"
        );
        assert_eq!(Message::PositionOutOfRange.to_string(), "Please enter a number between 1 and 5.");
        assert_eq!(Message::PositionNotANumber.to_string(), "Invalid input. Please enter a number.");
    }
}
