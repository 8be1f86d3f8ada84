//! Configuration loading and hosts path resolution.
//!
//! Supports HOSTEDIT_CONFIG and HOSTEDIT_HOSTS_FILE env var overrides for testing.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Env var naming the config file to read instead of the platform default.
pub const CONFIG_ENV: &str = "HOSTEDIT_CONFIG";
/// Env var naming the hosts file to edit.
pub const HOSTS_FILE_ENV: &str = "HOSTEDIT_HOSTS_FILE";

/// config.toml structure.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Hosts file to edit when neither --file nor HOSTEDIT_HOSTS_FILE is given.
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
    /// Reject malformed addresses and host names on add/update.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_file: None,
            strict: default_strict(),
        }
    }
}

impl Config {
    /// Load config from `path`; a missing file gives defaults.
    pub fn load(path: &Path) -> Result<Config> {
        if path.is_file() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to `path`. Creates parent dirs if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            fs::create_dir_all(p)?;
        }
        let s = toml::to_string_pretty(self)?;
        fs::write(path, s)?;
        Ok(())
    }

    /// Hosts file to edit: `cli_override`, then HOSTEDIT_HOSTS_FILE, then
    /// `hosts_file`, then the system hosts file.
    pub fn resolve_hosts_file(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(p) = cli_override {
            return p.to_path_buf();
        }
        if let Some(p) = std::env::var_os(HOSTS_FILE_ENV) {
            return PathBuf::from(p);
        }
        self.hosts_file.clone().unwrap_or_else(system_hosts_file)
    }
}

/// Path to config.toml (respects HOSTEDIT_CONFIG).
pub fn config_path() -> PathBuf {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        PathBuf::from(p)
    } else if let Some(dirs) = directories::ProjectDirs::from("", "", "hostedit") {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from(".hostedit.toml")
    }
}

/// The platform hosts file.
#[cfg(unix)]
pub fn system_hosts_file() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

/// The platform hosts file.
#[cfg(windows)]
pub fn system_hosts_file() -> PathBuf {
    match std::env::var_os("SystemRoot") {
        Some(root) => PathBuf::from(root).join(r"System32\drivers\etc\hosts"),
        None => PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts"),
    }
}
