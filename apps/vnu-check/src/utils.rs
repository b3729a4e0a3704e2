//! Terminal helpers shared by the binary and printers.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on for human output unless `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if use_colors("human") {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    let rel = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd));
    match rel {
        Some(p) if !p.as_os_str().is_empty() && !p.starts_with("..") => {
            p.to_string_lossy().to_string()
        }
        _ => path.to_string_lossy().to_string(),
    }
}
