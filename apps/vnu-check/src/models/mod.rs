//! Shared data models: violations, reports, platforms and checker options.

pub mod options;
pub mod platform;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single markup problem reported by v.Nu.
pub struct Violation {
    pub description: String,
    /// Location descriptor, `line L, column C`.
    pub path: String,
    /// One-line extract of the offending markup.
    pub snippet: String,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Outcome of one `validate()` call.
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub summary: String,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Serialize)]
/// Per-file result used by the CLI printers.
pub struct FileReport {
    pub file: String,
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
/// Aggregated counts across a `check` run.
pub struct Summary {
    pub files: usize,
    pub failed: usize,
    pub violations: usize,
    pub errors: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        Summary {
            files: reports.len(),
            failed: reports.iter().filter(|r| !r.violations.is_empty()).count(),
            violations: reports.iter().map(|r| r.violations.len()).sum(),
            errors: reports.iter().filter(|r| r.error.is_some()).count(),
        }
    }
}
