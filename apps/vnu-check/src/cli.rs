//! CLI argument parsing via `clap`.

use crate::models::options::OptionOverrides;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vnu-check",
    version,
    about = "Validate HTML with the W3C Nu Html Checker",
    long_about = "vnu-check runs the bundled v.Nu binary over HTML files and reports violations.\n\nConfiguration precedence: CLI > vnu-check.toml > defaults.",
    after_help = "Examples:\n  vnu-check check 'site/**/*.html'\n  vnu-check check index.html --output json\n  vnu-check command --platform linux --css",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Debug, Clone, Default)]
/// Options shared by commands that build a v.Nu invocation.
pub struct CheckerArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Target platform: darwin|linux|win32 (default: current OS)")]
    pub platform: Option<String>,
    #[arg(long, help = "Directory holding <platform>/bin/vnu")]
    pub vnu_root: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Also check CSS (--also-check-css)")]
    pub css: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Report warnings too (drops --errors-only)")]
    pub warnings: bool,
}

impl CheckerArgs {
    /// Only flags the user actually passed become overrides.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            also_check_css: self.css.then_some(true),
            errors_only: self.warnings.then_some(false),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current vnu-check version.")]
    Version,
    /// Validate HTML files
    #[command(
        about = "Validate HTML files",
        long_about = "Validate each file (or glob match) with v.Nu. Exits 1 when violations are found and 2 when validation could not run.",
        after_help = "Examples:\n  vnu-check check index.html about.html\n  vnu-check check 'dist/**/*.html' --output json"
    )]
    Check {
        #[arg(required = true, help = "HTML files or glob patterns")]
        files: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[command(flatten)]
        checker: CheckerArgs,
    },
    /// Print the v.Nu command line without running it
    #[command(
        about = "Print the v.Nu command",
        long_about = "Resolve the v.Nu binary and print the command line `check` would run. The document itself is sent on stdin and is not shown."
    )]
    Command {
        #[command(flatten)]
        checker: CheckerArgs,
    },
}
