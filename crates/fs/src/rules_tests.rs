use super::*;

#[test]
fn default_rules_skip_nothing_and_allow_everything() {
    let rules = RuleSet::default();

    assert!(!rules.is_skipped_dir(".git"));
    assert!(rules.is_allowed_ext(".rs"));
    assert!(rules.is_allowed_ext(""));
}

#[test]
fn skip_matches_exact_base_names_only() {
    let rules = RuleSet::new([".git", "target"], Vec::<String>::new());

    let cases: &[(&str, bool)] = &[
        (".git", true),
        ("target", true),
        ("Target", false),
        ("target2", false),
        ("src/target", false),
        ("*", false),
    ];

    for (name, expected) in cases {
        assert_eq!(rules.is_skipped_dir(name), *expected, "is_skipped_dir({name:?})");
    }
}

#[test]
fn allow_list_restricts_extensions() {
    let rules = RuleSet::new(Vec::<String>::new(), [".go"]);

    assert!(rules.is_allowed_ext(".go"));
    assert!(!rules.is_allowed_ext(".java"));
    assert!(!rules.is_allowed_ext(".cpp"));
    assert!(!rules.is_allowed_ext("go"), "leading dot is significant");
    assert!(!rules.is_allowed_ext(""), "extensionless files are excluded");
}

#[test]
fn accessors_expose_configured_values() {
    let rules = RuleSet::new(["vendor".to_string()], [".rs".to_string(), ".toml".to_string()]);

    let skips: Vec<_> = rules.skip_directories().collect();
    assert_eq!(skips, vec!["vendor"]);

    let mut exts: Vec<_> = rules.allowed_extensions().collect();
    exts.sort();
    assert_eq!(exts, vec![".rs", ".toml"]);
}
