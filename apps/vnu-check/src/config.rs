//! Configuration discovery and effective settings resolution.
//!
//! vnu-check reads `vnu-check.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `platform`: the current OS
//! - `vnu_root`: `<repo>/lib` when present, else `lib/` next to the executable
//! - `output`: `human`
//! - `[options]`: v.Nu defaults (see `models::options`)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::command::BinaryLocator;
use crate::models::options::OptionOverrides;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_TOML: &str = "vnu-check.toml";
const CONFIG_YAML: [&str; 2] = ["vnu-check.yaml", "vnu-check.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `vnu-check.toml|yaml`.
pub struct VnuCheckConfig {
    pub platform: Option<String>,
    /// Install root holding `<platform>/bin/vnu`; relative to the repo root.
    pub vnu_root: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub options: Option<OptionOverrides>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub platform: Option<String>,
    pub locator: BinaryLocator,
    pub output: String,
    pub options: OptionOverrides,
    /// Whether a `vnu-check.toml|yaml` was found and parsed.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `vnu-check.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|y| cur.join(y).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `VnuCheckConfig` from `vnu-check.toml` or `vnu-check.yaml|yml` if
/// present. Unreadable or malformed files are logged and treated as absent.
pub fn load_config(root: &Path) -> Option<VnuCheckConfig> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = read_logged(&toml_path)?;
        return match toml::from_str(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("ignoring {}: {}", toml_path.display(), e);
                None
            }
        };
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read_logged(&p)?;
            return match serde_yaml::from_str(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!("ignoring {}: {}", p.display(), e);
                    None
                }
            };
        }
    }
    None
}

fn read_logged(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_platform: Option<&str>,
    cli_vnu_root: Option<&str>,
    cli_output: Option<&str>,
    cli_options: OptionOverrides,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let platform = cli_platform.map(|s| s.to_string()).or(cfg.platform);

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let locator = match (cli_vnu_root, cfg.vnu_root) {
        (Some(p), _) => BinaryLocator::InstallRoot(PathBuf::from(p)),
        (None, Some(p)) => BinaryLocator::InstallRoot(repo_root.join(p)),
        (None, None) => {
            let local = repo_root.join(crate::command::DEFAULT_INSTALL_ROOT);
            if local.is_dir() {
                BinaryLocator::InstallRoot(local)
            } else {
                BinaryLocator::ExecutableRelative
            }
        }
    };

    let options = cfg.options.unwrap_or_default().or_from(cli_options);

    Effective {
        repo_root,
        platform,
        locator,
        output,
        options,
        config_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::options::OutputFormat;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("vnu-check.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
platform = "linux"
vnu_root = "vendor/vnu"
output = "json"
[options]
also-check-css = true
format = "json"
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None, OptionOverrides::default());
        assert_eq!(eff.platform.as_deref(), Some("linux"));
        assert_eq!(eff.output, "json");
        assert_eq!(eff.locator, BinaryLocator::InstallRoot(root.join("vendor/vnu")));
        assert_eq!(eff.options.also_check_css, Some(true));
        assert!(eff.config_found);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("vnu-check.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
options:
  errors-only: false
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None, OptionOverrides::default());
        assert_eq!(eff.output, "human");
        assert_eq!(eff.platform, None);
        assert_eq!(eff.options.errors_only, Some(false));
        // No ./lib in the repo, so binaries are looked up next to the executable
        assert_eq!(eff.locator, BinaryLocator::ExecutableRelative);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("lib")).unwrap();
        let mut f = fs::File::create(root.join("vnu-check.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
platform = "darwin"
output = "json"
[options]
format = "xml"
errors-only = false
            "#
        )
        .unwrap();

        let cli = OptionOverrides {
            format: Some(OutputFormat::Gnu),
            ..Default::default()
        };
        let eff = resolve_effective(root.to_str(), Some("win32"), None, Some("human"), cli);
        assert_eq!(eff.platform.as_deref(), Some("win32"));
        assert_eq!(eff.output, "human");
        assert_eq!(eff.options.format, Some(OutputFormat::Gnu));
        assert_eq!(eff.options.errors_only, Some(false));
        assert_eq!(eff.locator, BinaryLocator::InstallRoot(root.join("lib")));
    }

    #[test]
    fn test_malformed_config_is_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("vnu-check.toml"), "[options]\nbogus = 1\n").unwrap();
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None, None, OptionOverrides::default());
        assert_eq!(eff.options, OptionOverrides::default());
        assert!(!eff.config_found);
    }

    #[test]
    fn test_unreadable_config_is_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // A directory in place of the file cannot be read as text
        fs::create_dir_all(root.join("vnu-check.toml")).unwrap();
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None, None, OptionOverrides::default());
        assert!(!eff.config_found);
        assert_eq!(eff.output, "human");
    }
}
