use crate::cli::ExtractStrategy;
use crate::domain::constants::DEFAULT_HISTORY_LIMIT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct ExtractConfig {
    #[serde(default)]
    pub strategy: ExtractStrategy,
}

#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Directory of `<Type>.jsonld` files added to, or replacing, the built-in templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// TOML rule table merged over the built-in one.
    #[serde(default)]
    pub rules_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    /// A strategy given on the command line wins over the configured one.
    pub fn strategy(&self, flag: Option<ExtractStrategy>) -> ExtractStrategy {
        flag.unwrap_or(self.extract.strategy)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/ldsnip/config.toml"))
}

/// Loads an explicit config file, or the per-user one when it exists.
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("failed to read config {}: {e}", path.display()))?;
    Ok(toml::from_str(&raw)?)
}
