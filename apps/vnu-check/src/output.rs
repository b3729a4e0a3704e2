//! Output rendering for `check` and `command`.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file violations and a top-level summary.

use crate::command::Invocation;
use crate::models::{FileReport, Summary};
use crate::parser;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Print check results in the requested format.
pub fn print_check(reports: &[FileReport], output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_check_json(reports)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for r in reports {
                if let Some(err) = &r.error {
                    let tag = if color {
                        "✖ ⟦error⟧".red().bold().to_string()
                    } else {
                        "✖ ⟦error⟧".to_string()
                    };
                    println!("{} {} — {}", tag, r.file, err);
                } else if r.violations.is_empty() {
                    if color {
                        println!("{} {}", "✔ valid:".green().bold(), r.file);
                    } else {
                        println!("✔ valid: {}", r.file);
                    }
                } else {
                    if color {
                        println!("{} {}", "✖ ⟦fail⟧".red().bold(), r.file.bold());
                    } else {
                        println!("✖ ⟦fail⟧ {}", r.file);
                    }
                    println!("{}", parser::summary(&r.violations));
                }
            }
            let s = Summary::from_reports(reports);
            let line = format!(
                "— Summary — files={} failed={} violations={} errors={}",
                s.files, s.failed, s.violations, s.errors
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Print the display form of an invocation.
pub fn print_command(inv: &Invocation, output: &str) {
    match output {
        "json" => {
            let out = json!({
                "program": inv.program.to_string_lossy(),
                "args": inv.args,
            });
            println!("{}", out);
        }
        _ => println!("{}", inv),
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(reports: &[FileReport]) -> JsonVal {
    json!({
        "results": reports,
        "summary": Summary::from_reports(reports),
    })
}
