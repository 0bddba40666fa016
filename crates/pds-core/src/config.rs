use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_check::Scheme;

/// Node used when none is given on the command line.
pub const DEFAULT_NODE: &str = "pds-imaging.jpl.nasa.gov";
/// Mission used when none is given on the command line.
pub const DEFAULT_MISSION: &str = "MARS 2020";

/// Reachability probe timeouts (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole HEAD request, redirects included.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/pds-scraper/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// PDS node (URL or bare host) to use when the CLI gets none.
    pub default_node: String,
    /// Mission name to use when the CLI gets none.
    pub default_mission: String,
    /// Scheme prefixed onto bare hosts: "http", "https" (default), "ftp" or "ftps".
    #[serde(default)]
    pub default_scheme: Scheme,
    /// Whether node URLs are probed with HEAD before use.
    #[serde(default = "default_check_reachable")]
    pub check_reachable: bool,
    /// Optional probe timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
}

fn default_check_reachable() -> bool {
    true
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            default_node: DEFAULT_NODE.to_string(),
            default_mission: DEFAULT_MISSION.to_string(),
            default_scheme: Scheme::default(),
            check_reachable: true,
            probe: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pds-scraper")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScraperConfig> {
    load_from(&config_path()?)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_from(path: &Path) -> Result<ScraperConfig> {
    if !path.exists() {
        let default_cfg = ScraperConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ScraperConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
