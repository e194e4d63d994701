use super::*;
use std::fs::{create_dir, write};
use tempfile::tempdir;

#[test]
fn defaults_disable_itemization() {
    let s = Settings::default();
    assert_eq!(s.root, None);
    assert!(s.skip.is_empty());
    assert!(s.ext.is_empty());
    assert!(!s.print_by_size);
    assert_eq!(s.print_value, DEFAULT_PRINT_VALUE);
    assert_eq!(s.workers, None);
}

#[test]
fn load_parses_all_keys() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write(
        &path,
        r#"{
            "root": "src",
            "skip": [".git", "target"],
            "ext": [".rs"],
            "print_by_size": true,
            "print_value": 2048,
            "workers": 3
        }"#,
    )
    .expect("write config");

    let s = Settings::load(&path).expect("load");

    assert_eq!(s.root, Some(PathBuf::from("src")));
    assert_eq!(s.skip, vec![".git".to_string(), "target".to_string()]);
    assert_eq!(s.ext, vec![".rs".to_string()]);
    assert!(s.print_by_size);
    assert_eq!(s.print_value, 2048);
    assert_eq!(s.workers, Some(3));
}

#[test]
fn load_fills_missing_keys_with_defaults() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write(&path, r#"{ "skip": ["node_modules"] }"#).expect("write config");

    let s = Settings::load(&path).expect("load");

    assert_eq!(s.skip, vec!["node_modules".to_string()]);
    assert_eq!(s.print_value, DEFAULT_PRINT_VALUE);
    assert_eq!(s.root, None);
}

#[test]
fn print_lines_is_accepted_as_alias() {
    let s: Settings = serde_json::from_str(r#"{ "print_lines": 100 }"#).expect("parse");
    assert_eq!(s.print_value, 100);
    assert!(!s.print_by_size);
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write(&path, r#"{ "rooot": "." }"#).expect("write config");

    let err = Settings::load(&path).expect_err("typo must fail");
    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write(&path, "{ not json").expect("write config");

    let err = Settings::load_optional(&path).expect_err("must fail");
    match err {
        ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn missing_file_is_none_for_optional_and_error_for_required() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");

    assert!(Settings::load_optional(&path).expect("optional").is_none());

    let err = Settings::load(&path).expect_err("required must fail");
    assert!(matches!(err, ConfigError::NotFound { .. }), "got {err:?}");
}

#[test]
fn validated_root_checks_presence_and_kind() {
    let dir = tempdir().expect("create temp dir");
    let sub = dir.path().join("sub");
    create_dir(&sub).expect("create sub");
    let file = dir.path().join("file.txt");
    write(&file, b"x").expect("write file");

    let cases: Vec<(Option<PathBuf>, &str)> = vec![
        (None, "missing"),
        (Some(PathBuf::new()), "missing"),
        (Some(dir.path().join("nope")), "not-found"),
        (Some(file.clone()), "not-dir"),
        (Some(sub.clone()), "ok"),
    ];

    for (root, expected) in cases {
        let s = Settings {
            root: root.clone(),
            ..Settings::default()
        };
        let got = match s.validated_root() {
            Ok(_) => "ok",
            Err(ConfigError::MissingRoot) => "missing",
            Err(ConfigError::RootNotFound(_)) => "not-found",
            Err(ConfigError::RootNotDirectory(_)) => "not-dir",
            Err(other) => panic!("unexpected error {other:?}"),
        };
        assert_eq!(got, expected, "root {root:?}");
    }
}

#[test]
fn zero_workers_is_rejected() {
    let s = Settings {
        workers: Some(0),
        ..Settings::default()
    };
    assert!(matches!(
        s.validated_workers(),
        Err(ConfigError::ZeroWorkers)
    ));

    let s = Settings {
        workers: Some(2),
        ..Settings::default()
    };
    assert_eq!(s.validated_workers().expect("valid"), Some(2));
}

#[test]
fn worker_count_above_limit_is_rejected() {
    let s = Settings {
        workers: Some(usize::MAX / 2),
        ..Settings::default()
    };
    match s.validated_workers() {
        Err(ConfigError::TooManyWorkers { requested, max }) => {
            assert_eq!(requested, usize::MAX / 2);
            assert_eq!(max, MAX_WORKERS);
        }
        other => panic!("expected TooManyWorkers, got {other:?}"),
    }

    let s = Settings {
        workers: Some(MAX_WORKERS),
        ..Settings::default()
    };
    assert_eq!(s.validated_workers().expect("at limit"), Some(MAX_WORKERS));
}

#[test]
fn oversized_worker_count_from_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    write(&path, format!(r#"{{ "workers": {} }}"#, MAX_WORKERS + 1)).unwrap();

    let s = Settings::load(&path).expect("parses");
    let err = s.validated_workers().unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"), "{err}");
}
