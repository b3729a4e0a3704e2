//! v.Nu command-line options.
//!
//! `ValidationOptions` holds the effective flag set and defaults to:
//! - `stdout`, `errors-only`, `exit-zero-always`, `html`: true
//! - `also-check-css`: false
//! - `format`: json
//!
//! `OptionOverrides` carries caller or config supplied values; every field is
//! optional and a present value always wins over the default.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
/// Value of v.Nu's `--format` flag.
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Xml,
    Gnu,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Xml => "xml",
            OutputFormat::Gnu => "gnu",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rendered flag value: switches are bare `--key`, text is `--key value`.
pub enum FlagValue {
    Switch(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pub stdout: bool,
    pub errors_only: bool,
    pub exit_zero_always: bool,
    pub also_check_css: bool,
    pub html: bool,
    pub format: OutputFormat,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            stdout: true,
            errors_only: true,
            exit_zero_always: true,
            also_check_css: false,
            html: true,
            format: OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
/// Partial option set, e.g. the `[options]` table of `vnu-check.toml`.
pub struct OptionOverrides {
    pub stdout: Option<bool>,
    pub errors_only: Option<bool>,
    pub exit_zero_always: Option<bool>,
    pub also_check_css: Option<bool>,
    pub html: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl OptionOverrides {
    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn or_from(self, other: OptionOverrides) -> OptionOverrides {
        OptionOverrides {
            stdout: other.stdout.or(self.stdout),
            errors_only: other.errors_only.or(self.errors_only),
            exit_zero_always: other.exit_zero_always.or(self.exit_zero_always),
            also_check_css: other.also_check_css.or(self.also_check_css),
            html: other.html.or(self.html),
            format: other.format.or(self.format),
        }
    }
}

impl ValidationOptions {
    /// Defaults first, overrides last.
    pub fn merged(overrides: &OptionOverrides) -> Self {
        let d = ValidationOptions::default();
        ValidationOptions {
            stdout: overrides.stdout.unwrap_or(d.stdout),
            errors_only: overrides.errors_only.unwrap_or(d.errors_only),
            exit_zero_always: overrides.exit_zero_always.unwrap_or(d.exit_zero_always),
            also_check_css: overrides.also_check_css.unwrap_or(d.also_check_css),
            html: overrides.html.unwrap_or(d.html),
            format: overrides.format.unwrap_or(d.format),
        }
    }

    /// Flags in the order they are passed to v.Nu.
    pub fn flags(&self) -> Vec<(&'static str, FlagValue)> {
        vec![
            ("stdout", FlagValue::Switch(self.stdout)),
            ("errors-only", FlagValue::Switch(self.errors_only)),
            ("exit-zero-always", FlagValue::Switch(self.exit_zero_always)),
            ("also-check-css", FlagValue::Switch(self.also_check_css)),
            ("html", FlagValue::Switch(self.html)),
            ("format", FlagValue::Text(self.format.as_str().to_string())),
        ]
    }

    /// Render flags as argv entries. Switches set to `false` are omitted
    /// since v.Nu has no negated form for them.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (key, value) in self.flags() {
            match value {
                FlagValue::Switch(true) => args.push(format!("--{}", key)),
                FlagValue::Switch(false) => {}
                FlagValue::Text(v) => {
                    args.push(format!("--{}", key));
                    args.push(v);
                }
            }
        }
        args
    }
}
