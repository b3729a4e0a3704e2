//! Operating systems with a bundled v.Nu build.

use crate::error::ValidatorError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Windows];

    /// Platform of the running process.
    pub fn current() -> Result<Self, ValidatorError> {
        std::env::consts::OS.parse()
    }

    /// Directory name used for this platform under the install root.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Windows => "win32",
        }
    }

    /// Binary location relative to the install root.
    pub fn binary_suffix(self) -> PathBuf {
        let exe = match self {
            Platform::Windows => "vnu.bat",
            Platform::Darwin | Platform::Linux => "vnu",
        };
        [self.id(), "bin", exe].iter().collect()
    }
}

impl FromStr for Platform {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "win32" | "windows" => Ok(Platform::Windows),
            _ => Err(ValidatorError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
