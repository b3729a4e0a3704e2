//! vnu-check CLI binary entry point.
//! Resolves configuration, runs v.Nu over the requested files and prints
//! results.

use clap::Parser;
use futures::future::join_all;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vnu_check::cli::{CheckerArgs, Cli, Commands};
use vnu_check::config::{self, Effective};
use vnu_check::models::{FileReport, Summary};
use vnu_check::{output, utils, Validator};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("VNU_CHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve(checker: &CheckerArgs, output: Option<&str>) -> Effective {
    let eff = config::resolve_effective(
        checker.repo_root.as_deref(),
        checker.platform.as_deref(),
        checker.vnu_root.as_deref(),
        output,
        checker.overrides(),
    );
    // Friendly note if no config was found
    if eff.output != "json" && !eff.config_found {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No vnu-check.toml found; using defaults."
        );
    }
    eff
}

fn build_validator(eff: &Effective) -> vnu_check::Result<Validator> {
    let mut builder = Validator::builder()
        .locator(eff.locator.clone())
        .options(eff.options.clone());
    if let Some(p) = &eff.platform {
        builder = builder.platform(p.clone());
    }
    builder.build()
}

/// Keep matched regular files; unreadable entries come back as messages.
fn split_matches<E: std::fmt::Display>(
    entries: impl IntoIterator<Item = Result<PathBuf, E>>,
) -> (Vec<PathBuf>, Vec<String>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for entry in entries {
        match entry {
            Ok(p) if p.is_file() => files.push(p),
            Ok(_) => {}
            Err(e) => skipped.push(format!("Skipping unreadable path: {}", e)),
        }
    }
    (files, skipped)
}

/// Expand glob patterns; plain paths are kept as given so a missing file is
/// reported per file.
fn expand_files(patterns: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for pat in patterns {
        if !pat.contains(['*', '?', '[']) {
            files.push(PathBuf::from(pat));
            continue;
        }
        let entries = glob::glob(pat).map_err(|e| format!("bad glob pattern '{}': {}", pat, e))?;
        let (matched, skipped) = split_matches(entries);
        for msg in skipped {
            eprintln!("{} {}", utils::info_prefix(), msg);
        }
        if matched.is_empty() {
            eprintln!(
                "{} {}",
                utils::info_prefix(),
                format!("No files matched '{}'", pat)
            );
        }
        files.extend(matched);
    }
    Ok(files)
}

async fn check_file(validator: &Validator, path: PathBuf) -> FileReport {
    let file = utils::display_path(&path);
    debug!("checking {}", file);
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(s) => s,
        Err(e) => {
            return FileReport {
                file,
                violations: Vec::new(),
                error: Some(format!("cannot read file: {}", e)),
            }
        }
    };
    match validator.validate(&content).await {
        Ok(report) => FileReport {
            file,
            violations: report.violations,
            error: None,
        },
        Err(e) => FileReport {
            file,
            violations: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

async fn run_check(files: Vec<String>, output: Option<String>, checker: CheckerArgs) -> i32 {
    let eff = resolve(&checker, output.as_deref());
    let validator = match build_validator(&eff) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };
    let paths = match expand_files(&files) {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("{} {}", utils::error_prefix(), "No HTML files to check.");
            return 2;
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };

    // One v.Nu process per file, all in flight at once
    let reports = join_all(paths.into_iter().map(|p| check_file(&validator, p))).await;
    output::print_check(&reports, &eff.output);

    let summary = Summary::from_reports(&reports);
    if summary.errors > 0 {
        2
    } else if summary.failed > 0 {
        1
    } else {
        0
    }
}

fn run_command(checker: CheckerArgs) -> i32 {
    let eff = resolve(&checker, None);
    let invocation = build_validator(&eff).and_then(|v| v.invocation(""));
    match invocation {
        Ok(inv) => {
            output::print_command(&inv, &eff.output);
            0
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            2
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let code = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            0
        }
        Commands::Check {
            files,
            output,
            checker,
        } => run_check(files, output, checker).await,
        Commands::Command { checker } => run_command(checker),
    };
    std::process::exit(code);
}
