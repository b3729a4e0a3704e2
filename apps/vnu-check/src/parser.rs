//! v.Nu JSON output parsing and summary rendering.

use crate::error::Result;
use crate::models::Violation;
use serde::Deserialize;

#[derive(Deserialize)]
struct CheckerOutput {
    messages: Vec<CheckerMessage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckerMessage {
    message: String,
    // Absent for non-document errors
    #[serde(default)]
    extract: String,
    first_line: Option<u64>,
    last_line: Option<u64>,
    first_column: Option<u64>,
    last_column: Option<u64>,
}

impl From<CheckerMessage> for Violation {
    fn from(m: CheckerMessage) -> Self {
        let line = m.first_line.or(m.last_line).unwrap_or(0);
        let column = m.first_column.or(m.last_column).unwrap_or(0);
        let snippet: String = m.extract.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        Violation {
            description: m.message.trim().to_string(),
            path: format!("line {}, column {}", line, column),
            snippet: snippet.trim().to_string(),
        }
    }
}

/// Parse the `--format json` output of v.Nu into violations, in emission
/// order.
pub fn parse(raw: &str) -> Result<Vec<Violation>> {
    let out: CheckerOutput = serde_json::from_str(raw)?;
    Ok(out.messages.into_iter().map(Violation::from).collect())
}

/// Human-readable summary; empty when there is nothing to report.
pub fn summary(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return String::new();
    }
    let mut out = String::from("Failed checks:");
    for v in violations {
        out.push_str(&format!(
            "\n  {}\n    - {}\n    - {}",
            v.description, v.path, v.snippet
        ));
    }
    out
}
