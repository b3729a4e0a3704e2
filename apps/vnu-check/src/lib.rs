//! vnu-check core library.
//!
//! This crate runs the W3C Nu Html Checker (v.Nu) as an external process and
//! turns its JSON report into typed violations plus a readable summary.
//!
//! High-level modules:
//! - `command`: Binary resolution per platform and invocation building.
//! - `parser`: v.Nu JSON output parsing and summary rendering.
//! - `validator`: Fragment wrapping, execution and parsing in one call.
//! - `runner`: Process execution behind the `ProcessRunner` trait.
//! - `models`: Violations, reports, platforms and checker options.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
//!
//! ```no_run
//! # async fn run() -> vnu_check::Result<()> {
//! let validator = vnu_check::create_validator(None)?;
//! let report = validator.validate("<p>Hello</p>").await?;
//! if !report.is_valid() {
//!     eprintln!("{}", report.summary);
//! }
//! # Ok(())
//! # }
//! ```
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
pub mod validator;

pub use command::{BinaryCommand, BinaryLocator, Invocation};
pub use error::{Result, ValidatorError};
pub use models::options::{OptionOverrides, OutputFormat, ValidationOptions};
pub use models::platform::Platform;
pub use models::{ValidationReport, Violation};
pub use parser::{parse, summary};
pub use runner::{ProcessRunner, TokioRunner};
pub use validator::{create_validator, HtmlInput, OuterHtml, Validator, ValidatorBuilder};
