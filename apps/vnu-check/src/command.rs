//! v.Nu invocation builder.
//!
//! Resolves the platform binary through a single lookup routine and renders
//! the argument list. The HTML payload travels on stdin and is never spliced
//! into a shell string.

use crate::error::{Result, ValidatorError};
use crate::models::options::{OptionOverrides, ValidationOptions};
use crate::models::platform::Platform;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default install root, relative to the working directory.
pub const DEFAULT_INSTALL_ROOT: &str = "lib";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where platform builds of v.Nu live.
pub enum BinaryLocator {
    /// A known install directory holding `<platform>/bin/<exe>`.
    InstallRoot(PathBuf),
    /// `lib/` next to the running executable.
    ExecutableRelative,
}

impl Default for BinaryLocator {
    fn default() -> Self {
        BinaryLocator::InstallRoot(PathBuf::from(DEFAULT_INSTALL_ROOT))
    }
}

impl BinaryLocator {
    fn root(&self) -> Result<PathBuf> {
        match self {
            BinaryLocator::InstallRoot(p) if p.is_absolute() => Ok(p.clone()),
            BinaryLocator::InstallRoot(p) => {
                let cwd = std::env::current_dir().map_err(|source| ValidatorError::InstallRoot {
                    path: p.clone(),
                    source,
                })?;
                Ok(cwd.join(p))
            }
            BinaryLocator::ExecutableRelative => {
                let exe = std::env::current_exe().map_err(|source| ValidatorError::InstallRoot {
                    path: PathBuf::from(DEFAULT_INSTALL_ROOT),
                    source,
                })?;
                let dir = exe.parent().unwrap_or_else(|| Path::new("."));
                Ok(dir.join(DEFAULT_INSTALL_ROOT))
            }
        }
    }

    /// Absolute path of the v.Nu binary for `platform`; it must exist.
    pub fn resolve(&self, platform: Platform) -> Result<PathBuf> {
        let path = self.root()?.join(platform.binary_suffix());
        debug!(platform = %platform, path = %path.display(), "resolved v.Nu binary");
        if !path.is_file() {
            return Err(ValidatorError::BinaryResolution { path });
        }
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A ready-to-spawn v.Nu call.
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Markup written to the child's stdin.
    pub stdin: String,
}

impl fmt::Display for Invocation {
    /// Display-only command line; the payload is not shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for a in &self.args {
            write!(f, " {}", a)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BinaryCommand {
    platform: Platform,
    locator: BinaryLocator,
    options: ValidationOptions,
}

impl BinaryCommand {
    pub fn new(platform: Platform, locator: BinaryLocator, overrides: &OptionOverrides) -> Self {
        BinaryCommand {
            platform,
            locator,
            options: ValidationOptions::merged(overrides),
        }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Build the invocation that validates `html`. Pure apart from checking
    /// that the binary exists.
    pub fn build(&self, html: &str) -> Result<Invocation> {
        let program = self.locator.resolve(self.platform)?;
        let mut args = self.options.to_args();
        // v.Nu reads the document from stdin when given `-`
        args.push("-".to_string());
        Ok(Invocation {
            program,
            args,
            stdin: html.to_string(),
        })
    }
}
