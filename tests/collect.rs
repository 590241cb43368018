#[cfg(test)]
mod tests {
    use logbook::libs::collect::{assessment_table, freeform_table, is_terminator, multiline};
    use logbook::libs::error::LogbookError;
    use logbook::libs::messages::Message;
    use logbook::libs::prompt::ScriptedPrompt;

    const HEADERS: [&str; 3] = ["Ziel / Auftrag", "Zieltermin", "Ziel erreicht am"];
    const HINTS: [&str; 3] = ["", "(DD.MM.YYYY)", "(DD.MM.YYYY)"];

    #[test]
    fn test_terminators() {
        assert!(is_terminator("done"));
        assert!(is_terminator("  END "));
        assert!(is_terminator("Done"));
        assert!(!is_terminator("done."));
        assert!(!is_terminator(""));
    }

    #[test]
    fn test_multiline_joins_non_blank_lines() {
        let mut prompt = ScriptedPrompt::new(["a", "", "b", "end"]);
        assert_eq!(multiline(&mut prompt, "Was mir gut gelungen ist").unwrap(), "a\n- b");
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(prompt.notices(), &[Message::MultilineHint("Was mir gut gelungen ist".to_string())]);
    }

    #[test]
    fn test_multiline_done_first_is_empty() {
        let mut prompt = ScriptedPrompt::new(["done", "never read"]);
        assert_eq!(multiline(&mut prompt, "label").unwrap(), "");
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn test_multiline_trims_lines() {
        let mut prompt = ScriptedPrompt::new(["  first  ", "   ", "second", "DONE"]);
        assert_eq!(multiline(&mut prompt, "label").unwrap(), "first\n- second");
    }

    #[test]
    fn test_multiline_fails_when_input_ends() {
        let mut prompt = ScriptedPrompt::new(["a"]);
        let error = multiline(&mut prompt, "label").unwrap_err();
        assert!(matches!(error.downcast_ref::<LogbookError>(), Some(LogbookError::InputExhausted)));
    }

    #[test]
    fn test_freeform_table_collects_rows_until_terminator() {
        let mut prompt = ScriptedPrompt::new(["Release 1.2", "14.03.2025", "13.03.2025", "Docs", "end"]);
        let rendered = freeform_table(&mut prompt, &HEADERS, &HINTS).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("| Ziel / Auftrag "));
        assert!(lines[2].starts_with("| Release 1.2 "));
        assert!(lines[2].contains("| 14.03.2025 "));
        assert!(!rendered.contains("Docs"));
    }

    #[test]
    fn test_freeform_table_prompts_with_hints() {
        let mut prompt = ScriptedPrompt::new(["x", "done"]);
        freeform_table(&mut prompt, &HEADERS, &HINTS).unwrap();

        assert_eq!(
            prompt.prompts(),
            &[
                Message::PromptTableCell("Ziel / Auftrag".to_string(), "".to_string()),
                Message::PromptTableCell("Zieltermin".to_string(), "(DD.MM.YYYY)".to_string()),
            ]
        );
        assert_eq!(prompt.prompts()[1].to_string(), "Zieltermin (DD.MM.YYYY)");
        assert_eq!(prompt.prompts()[0].to_string(), "Ziel / Auftrag");
    }

    #[test]
    fn test_freeform_table_without_rows() {
        let mut prompt = ScriptedPrompt::new(["DONE"]);
        let rendered = freeform_table(&mut prompt, &HEADERS, &[]).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'));
    }

    #[test]
    fn test_assessment_reprompts_until_valid() {
        let mut prompt = ScriptedPrompt::new(["abc", "0", "6", "2", "", "5"]);
        let rendered = assessment_table(&mut prompt).unwrap();

        assert_eq!(
            prompt.warnings(),
            &[
                Message::PositionNotANumber,
                Message::PositionOutOfRange,
                Message::PositionOutOfRange,
                Message::PositionNotANumber,
            ]
        );
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(rendered.matches(":arrow_double_down:").count(), 1);
        assert_eq!(rendered.matches(":arrow_double_up:").count(), 1);
    }

    #[test]
    fn test_assessment_prompts_categories_in_order() {
        let mut prompt = ScriptedPrompt::new(["1", "1"]);
        assessment_table(&mut prompt).unwrap();

        let prompts: Vec<String> = prompt.prompts().iter().map(ToString::to_string).collect();
        assert_eq!(
            prompts,
            vec![
                "Select position (1-5) for Qualität des Eintrags",
                "Select position (1-5) for Effektivität in der Berichtsperiode",
            ]
        );
    }
}
