//! Validation entry point: input normalization, invocation, parsing.
//!
//! A `Validator` is cheap to clone and stateless between calls; each
//! `validate()` resolves the binary, spawns one v.Nu process and parses its
//! output. Fragments without an `<html` tag are wrapped in a minimal
//! document so v.Nu does not report missing document structure.

use crate::command::{BinaryCommand, BinaryLocator, Invocation};
use crate::error::Result;
use crate::models::options::OptionOverrides;
use crate::models::platform::Platform;
use crate::models::ValidationReport;
use crate::parser;
use crate::runner::{ProcessRunner, TokioRunner};
use std::sync::Arc;
use tracing::{debug, info};

/// Node-like values that can serialize their own markup.
pub trait OuterHtml: Sync {
    fn outer_html(&self) -> String;
}

/// What `validate()` accepts: raw markup or a node.
pub enum HtmlInput<'a> {
    Markup(&'a str),
    Element(&'a dyn OuterHtml),
}

impl<'a> HtmlInput<'a> {
    pub fn element(node: &'a dyn OuterHtml) -> Self {
        HtmlInput::Element(node)
    }
}

impl<'a> From<&'a str> for HtmlInput<'a> {
    fn from(s: &'a str) -> Self {
        HtmlInput::Markup(s)
    }
}

impl<'a> From<&'a String> for HtmlInput<'a> {
    fn from(s: &'a String) -> Self {
        HtmlInput::Markup(s.as_str())
    }
}

/// Return full documents untouched and wrap fragments in a document shell.
pub fn prepare_html(input: HtmlInput<'_>) -> String {
    let markup = match input {
        HtmlInput::Markup(s) => s.to_string(),
        HtmlInput::Element(node) => node.outer_html(),
    };
    if markup.contains("<html") {
        return markup;
    }
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>HTML</title>
  </head>
  <body>
  {}
  </body>
</html>"#,
        markup
    )
}

#[derive(Clone)]
pub struct Validator {
    command: BinaryCommand,
    runner: Arc<dyn ProcessRunner>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub fn command(&self) -> &BinaryCommand {
        &self.command
    }

    /// The invocation `validate()` would run for `input`.
    pub fn invocation<'a>(&self, input: impl Into<HtmlInput<'a>>) -> Result<Invocation> {
        self.command.build(&prepare_html(input.into()))
    }

    /// Validate markup with v.Nu. An `Ok` report with no violations means the
    /// document is valid.
    pub async fn validate<'a>(&self, input: impl Into<HtmlInput<'a>>) -> Result<ValidationReport> {
        let invocation = self.invocation(input)?;
        debug!(bytes = invocation.stdin.len(), "submitting markup to v.Nu");
        let raw = self.runner.run(&invocation).await?;
        let violations = parser::parse(&raw)?;
        let summary = parser::summary(&violations);
        info!(violations = violations.len(), "v.Nu check finished");
        Ok(ValidationReport {
            violations,
            summary,
        })
    }
}

#[derive(Default)]
pub struct ValidatorBuilder {
    platform: Option<String>,
    locator: BinaryLocator,
    overrides: OptionOverrides,
    runner: Option<Arc<dyn ProcessRunner>>,
}

impl ValidatorBuilder {
    /// Platform identifier such as `linux`, `darwin` or `win32`; defaults to
    /// the current OS.
    pub fn platform(mut self, id: impl Into<String>) -> Self {
        self.platform = Some(id.into());
        self
    }

    pub fn locator(mut self, locator: BinaryLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn options(mut self, overrides: OptionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    pub fn build(self) -> Result<Validator> {
        let platform = match self.platform.as_deref() {
            Some(id) => id.parse::<Platform>()?,
            None => Platform::current()?,
        };
        Ok(Validator {
            command: BinaryCommand::new(platform, self.locator, &self.overrides),
            runner: self.runner.unwrap_or_else(|| Arc::new(TokioRunner)),
        })
    }
}

/// Validator for `platform` (or the current OS) with default options and
/// binaries under `./lib`.
pub fn create_validator(platform: Option<&str>) -> Result<Validator> {
    let builder = Validator::builder();
    match platform {
        Some(id) => builder.platform(id).build(),
        None => builder.build(),
    }
}
