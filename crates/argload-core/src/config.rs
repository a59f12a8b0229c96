use crate::error::ConfigError;
use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Scoped configuration key gating `http://` and `https://` parameters.
pub const FOLLOW_URLPARAM_KEY: &str = "cli_follow_urlparam";

const DEFAULT_CONFIG: &str = "\
# argload configuration
#
# Set to false to stop following http:// and https:// parameter values.
# cli_follow_urlparam = true
";

/// Effective state of `cli_follow_urlparam`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUrlParam {
    /// Key absent; remote parameters are followed.
    Unset,
    Enabled,
    Disabled,
}

impl FollowUrlParam {
    /// Interprets a raw scoped value. Only `false` (any ASCII case) disables;
    /// unrecognised values keep remote loading on.
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return FollowUrlParam::Unset;
        };
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("false") {
            FollowUrlParam::Disabled
        } else if raw.eq_ignore_ascii_case("true") {
            FollowUrlParam::Enabled
        } else {
            tracing::warn!(
                "unrecognised {} value {:?}; treating as true",
                FOLLOW_URLPARAM_KEY,
                raw
            );
            FollowUrlParam::Enabled
        }
    }

    pub fn follows_urls(self) -> bool {
        !matches!(self, FollowUrlParam::Disabled)
    }
}

/// Effective key/value configuration for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedConfig {
    values: BTreeMap<String, String>,
}

/// On-disk shape of `config.toml`: a flat table of scalars.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(flatten)]
    values: BTreeMap<String, toml::Value>,
}

impl ScopedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn follow_urlparam(&self) -> FollowUrlParam {
        FollowUrlParam::from_value(self.get(FOLLOW_URLPARAM_KEY))
    }

    /// Parses a flat TOML document. Scalars are stringified; arrays and
    /// nested tables are skipped.
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(data)?;
        let mut cfg = ScopedConfig::new();
        for (key, value) in file.values {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(n) => n.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    tracing::debug!("ignoring non-scalar config key {}", key);
                    continue;
                }
            };
            cfg.values.insert(key, value);
        }
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScopedConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cfg = ScopedConfig::new();
        for (k, v) in iter {
            cfg.set(k, v);
        }
        cfg
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("argload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a commented default file if none exists.
pub fn load_or_init() -> Result<ScopedConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ScopedConfig> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(ScopedConfig::default());
    }

    Ok(ScopedConfig::load_from(path)?)
}
