#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::*;

    #[test]
    fn parses_entries_in_order() {
        let ron = r#"(
            actions: [
                (label: "Open File", description: "New Tab", shortcut: "ctrl+o"),
                (label: "Save", shortcut: "Control+S"),
                (description: "Print", disabled: true),
            ],
        )"#;
        let cat = load_from_str(ron, None).unwrap();
        assert_eq!(cat.len(), 3);
        let texts: Vec<String> = cat.entries().iter().map(ActionEntry::text).collect();
        assert_eq!(texts, vec!["Open File: New Tab", "Save", "Print"]);
        assert_eq!(
            cat.entries()[1].shortcut.as_ref().unwrap().to_string(),
            "ctrl+s"
        );
        assert_eq!(cat.enabled().count(), 2);
    }

    #[test]
    fn everything_is_optional() {
        let cat = load_from_str("()", None).unwrap();
        assert!(cat.is_empty());
        let cat = load_from_str("(actions: [()])", None).unwrap();
        assert_eq!(cat.entries()[0], ActionEntry::default());
        assert_eq!(cat.entries()[0].text(), "");
    }

    #[test]
    fn bad_shortcut_is_validation_error() {
        let ron = r#"(actions: [(label: "A"), (label: "B", shortcut: "ctrl++")])"#;
        let err = load_from_str(ron, Some(Path::new("cat.ron"))).unwrap_err();
        match &err {
            Error::Validation { entry, .. } => assert_eq!(*entry, 1),
            other => panic!("{:?}", other),
        }
        let pretty = err.pretty();
        assert!(pretty.contains("cat.ron"), "{pretty}");
        assert!(pretty.contains("action #2"), "{pretty}");
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let ron = r#"(actions: [(title: "A")])"#;
        let err = load_from_str(ron, None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{:?}", err);
    }

    #[test]
    fn syntax_error_is_parse_error() {
        let ron = "(\n  actions: [\n    (label: \"A\"\n";
        let err = load_from_str(ron, None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{:?}", err);
        assert!(err.pretty().starts_with("Catalog parse error"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_from_path(Path::new("/nonexistent/palette/catalog.ron")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(
            err.path(),
            Some(Path::new("/nonexistent/palette/catalog.ron"))
        );
    }

    #[test]
    fn explicit_path_wins() {
        let p = resolve_config_path(Some(Path::new("/tmp/x.ron"))).unwrap();
        assert_eq!(p, Path::new("/tmp/x.ron"));
    }

    #[test]
    fn excerpt_points_at_column() {
        let src = "one\ntwo\nthree";
        let ex = excerpt_at(src, 2, 3);
        assert!(ex.contains("    2 | two"));
        assert!(ex.lines().any(|l| l.trim_end().ends_with('^')));
    }
}
