use super::*;
use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use tally_fs::ScanError;
use tally_report::ReportSet;

fn sample_report() -> ScanReport {
    let mut by_extension = BTreeMap::new();
    by_extension.insert(
        String::new(),
        GroupFileInfo {
            count: 1,
            size: 10,
            lines: 2,
        },
    );
    by_extension.insert(
        ".rs".to_string(),
        GroupFileInfo {
            count: 2,
            size: 2048,
            lines: 120,
        },
    );

    ScanReport {
        report: ReportSet {
            by_extension,
            total: GroupFileInfo {
                count: 3,
                size: 2058,
                lines: 122,
            },
            selected: vec![FileInfo {
                path: PathBuf::from("src/lib.rs"),
                size: 1536,
                lines: 100,
                extension: ".rs".into(),
            }],
        },
        errors: vec![ScanError::Open {
            path: PathBuf::from("locked.rs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        }],
        elapsed: Duration::from_millis(12),
    }
}

fn render_human(cfg: PrinterConfig) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    HumanPrinter::new(&mut out, &mut err, cfg)
        .print(&sample_report())
        .expect("print");
    (
        String::from_utf8(out).expect("utf8"),
        String::from_utf8(err).expect("utf8"),
    )
}

#[test]
fn human_printer_writes_all_sections_in_order() {
    let (out, err) = render_human(PrinterConfig::default());

    let expected = "\
Files:
Path = src/lib.rs; Size = 1.50KB; LineCount = 100
Errors:
Error: cannot open locked.rs: permission denied
File count by suffix:
<none> => count = 1; size = 10.00B; lines = 2
.rs => count = 2; size = 2.00KB; lines = 120
Total file info:
total => count = 3; size = 2.01KB; lines = 122
";
    assert_eq!(out, expected);
    assert_eq!(err, "Execution time = 12.00ms\n");
}

#[test]
fn human_printer_quiet_omits_timing() {
    let (_, err) = render_human(PrinterConfig { show_timing: false });
    assert!(err.is_empty());
}

#[test]
fn json_printer_emits_one_document() {
    let mut out = Vec::new();
    JsonPrinter::new(&mut out, PrinterConfig::default())
        .print(&sample_report())
        .expect("print");

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 1);

    let doc: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(doc["total"]["count"], 3);
    assert_eq!(doc["total"]["lines"], 122);
    assert_eq!(doc["by_extension"][".rs"]["size"], 2048);
    assert_eq!(doc["selected"][0]["path"], "src/lib.rs");
    assert_eq!(doc["selected"][0]["extension"], ".rs");
    assert_eq!(doc["errors"][0], "cannot open locked.rs: permission denied");
    assert!(doc["elapsed_ms"].as_f64().is_some());
}

#[test]
fn json_printer_quiet_omits_elapsed() {
    let mut out = Vec::new();
    JsonPrinter::new(&mut out, PrinterConfig { show_timing: false })
        .print(&sample_report())
        .expect("print");

    let doc: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert!(doc.get("elapsed_ms").is_none());
}
