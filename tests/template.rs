#[cfg(test)]
mod tests {
    use logbook::libs::error::LogbookError;
    use logbook::libs::template::{read_template, substitute, tokens, Replacements};

    const TEMPLATE: &str = "# Title\nZeitraum: dd.mm.yyyy - dd.mm.yyyy\nT0\nM0\nTitle again";

    fn pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            (tokens::TITLE, "Sprint 1"),
            (tokens::WEEK_RANGE, "2025.03.10 - 2025.03.14"),
            (tokens::GOALS, "| table |"),
            (tokens::ACHIEVEMENTS, "> done it"),
        ]
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let replacements: Replacements = pairs().into_iter().collect();
        let text = substitute(TEMPLATE, &replacements);

        assert_eq!(text, "# Sprint 1\nZeitraum: 2025.03.10 - 2025.03.14\n| table |\n> done it\nSprint 1 again");
        assert!(!text.contains(tokens::TITLE));
    }

    #[test]
    fn test_substitute_is_order_independent_for_disjoint_tokens() {
        let forward: Replacements = pairs().into_iter().collect();
        let backward: Replacements = pairs().into_iter().rev().collect();
        let rotated: Replacements = pairs().into_iter().cycle().skip(2).take(4).collect();

        let expected = substitute(TEMPLATE, &forward);
        assert_eq!(substitute(TEMPLATE, &backward), expected);
        assert_eq!(substitute(TEMPLATE, &rotated), expected);
    }

    #[test]
    fn test_substitute_with_empty_map_returns_template() {
        assert_eq!(substitute(TEMPLATE, &Replacements::new()), TEMPLATE);
    }

    #[test]
    fn test_substitute_missing_and_empty_tokens_are_noops() {
        let mut replacements = Replacements::new();
        replacements.insert("NOT THERE", "x");
        replacements.insert("", "x");
        assert_eq!(substitute(TEMPLATE, &replacements), TEMPLATE);
    }

    #[test]
    fn test_substitute_empty_value_erases_token() {
        let replacements: Replacements = [(tokens::GOALS, ""), (tokens::ACHIEVEMENTS, "")].into_iter().collect();
        assert_eq!(substitute("a T0 b M0 c", &replacements), "a  b  c");
    }

    #[test]
    fn test_replacements_keep_first_position_on_overwrite() {
        let mut replacements = Replacements::new();
        replacements.insert("A", "1");
        replacements.insert("B", "2");
        replacements.insert("A", "3");

        let order: Vec<(&str, &str)> = replacements.iter().collect();
        assert_eq!(order, vec![("A", "3"), ("B", "2")]);
        assert_eq!(replacements.len(), 2);
        assert_eq!(replacements.get("A"), Some("3"));
    }

    #[test]
    fn test_replacements_apply_in_insertion_order() {
        // Overlapping tokens make the order observable.
        let mut replacements = Replacements::new();
        replacements.insert("ab", "X");
        replacements.insert("b", "Y");
        assert_eq!(substitute("abb", &replacements), "XY");
    }

    #[test]
    fn test_read_template_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.md");

        match read_template(&path) {
            Err(LogbookError::TemplateNotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_template_error_names_the_file() {
        let path = std::path::PathBuf::from("templates").join("template.md");
        let error = LogbookError::TemplateNotFound(path.clone());

        assert_eq!(error.to_string(), format!("Template file not found: {}", path.display()));
    }

    #[test]
    fn test_read_template_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.md");
        std::fs::write(&path, "Grüße, Title").unwrap();

        assert_eq!(read_template(&path).unwrap(), "Grüße, Title");
    }
}
