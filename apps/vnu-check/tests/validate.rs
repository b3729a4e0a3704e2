//! End-to-end behavior of `Validator` with an in-process runner.

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use vnu_check::{
    BinaryLocator, Invocation, OptionOverrides, OutputFormat, Platform, ProcessRunner, Result,
    Validator, ValidatorError,
};

/// Answers like v.Nu: reports a violation per known-bad construct.
#[derive(Default)]
struct FakeChecker {
    seen: Mutex<Vec<Invocation>>,
}

#[async_trait]
impl ProcessRunner for FakeChecker {
    async fn run(&self, invocation: &Invocation) -> Result<String> {
        self.seen.lock().unwrap().push(invocation.clone());
        let doc = &invocation.stdin;
        let mut messages = Vec::new();
        if doc.contains("<title></title>") {
            messages.push(serde_json::json!({
                "type": "error",
                "firstLine": 5, "firstColumn": 5, "lastColumn": 19,
                "message": "Element “title” must not be empty.",
                "extract": "    <title></title>\n  </head>"
            }));
        }
        if doc.contains("<marquee") {
            messages.push(serde_json::json!({
                "type": "error",
                "lastLine": 9, "lastColumn": 14,
                "message": "The “marquee” element is obsolete. ",
                "extract": "\n    <marquee>Hi</marquee>"
            }));
        }
        Ok(serde_json::json!({ "messages": messages }).to_string())
    }
}

fn fixture(name: &str) -> String {
    let p = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(p).unwrap()
}

fn validator(root: &Path, runner: Arc<FakeChecker>, overrides: OptionOverrides) -> Validator {
    for p in Platform::ALL {
        let bin = root.join(p.binary_suffix());
        fs::create_dir_all(bin.parent().unwrap()).unwrap();
        fs::write(bin, "").unwrap();
    }
    Validator::builder()
        .platform("linux")
        .locator(BinaryLocator::InstallRoot(root.to_path_buf()))
        .options(overrides)
        .runner(runner)
        .build()
        .unwrap()
}

#[tokio::test]
async fn valid_fixture_has_no_violations() {
    let dir = tempdir().unwrap();
    let runner = Arc::new(FakeChecker::default());
    let v = validator(dir.path(), runner.clone(), OptionOverrides::default());
    let html = fixture("valid.html");
    let report = v.validate(&html).await.unwrap();
    assert!(report.is_valid());
    assert_eq!(report.summary, "");
    // Full documents are submitted unmodified
    assert_eq!(runner.seen.lock().unwrap()[0].stdin, html);
}

#[tokio::test]
async fn invalid_fixture_reports_violations() {
    let dir = tempdir().unwrap();
    let runner = Arc::new(FakeChecker::default());
    let v = validator(dir.path(), runner, OptionOverrides::default());
    let report = v.validate(&fixture("invalid.html")).await.unwrap();
    assert_eq!(report.violations.len(), 2);

    let title = &report.violations[0];
    assert_eq!(title.description, "Element “title” must not be empty.");
    assert_eq!(title.path, "line 5, column 5");
    assert_eq!(title.snippet, "<title></title>  </head>");

    let marquee = &report.violations[1];
    assert_eq!(marquee.description, "The “marquee” element is obsolete.");
    assert_eq!(marquee.path, "line 9, column 14");
    assert_eq!(marquee.snippet, "<marquee>Hi</marquee>");

    assert!(report.summary.starts_with("Failed checks:\n"));
    for v in &report.violations {
        assert!(report.summary.contains(&v.description));
    }
}

#[tokio::test]
async fn fragment_is_wrapped_before_submission() {
    let dir = tempdir().unwrap();
    let runner = Arc::new(FakeChecker::default());
    let v = validator(dir.path(), runner.clone(), OptionOverrides::default());
    v.validate("<marquee>x</marquee>").await.unwrap();
    let seen = runner.seen.lock().unwrap();
    assert!(seen[0].stdin.starts_with("<!doctype html>\n<html lang=\"en\">"));
    assert!(seen[0].stdin.contains("<marquee>x</marquee>"));
}

#[tokio::test]
async fn option_overrides_reach_the_command_line() {
    let dir = tempdir().unwrap();
    let runner = Arc::new(FakeChecker::default());
    let overrides = OptionOverrides {
        format: Some(OutputFormat::Text),
        errors_only: Some(false),
        ..Default::default()
    };
    let v = validator(dir.path(), runner.clone(), overrides);
    let inv = v.invocation("<p></p>").unwrap();
    let line = inv.to_string();
    assert!(line.contains("--format text"));
    assert!(!line.contains("--format json"));
    assert!(!line.contains("--errors-only"));
    assert!(line.starts_with(&dir.path().join("linux/bin/vnu").display().to_string()));
}

#[tokio::test]
async fn missing_binary_is_reported_not_run() {
    let dir = tempdir().unwrap();
    let runner = Arc::new(FakeChecker::default());
    let v = Validator::builder()
        .platform("darwin")
        .locator(BinaryLocator::InstallRoot(dir.path().join("nowhere")))
        .runner(runner.clone())
        .build()
        .unwrap();
    let err = v.validate("<p></p>").await.unwrap_err();
    assert!(matches!(err, ValidatorError::BinaryResolution { .. }));
    assert!(runner.seen.lock().unwrap().is_empty());
}
