// Server configuration
//
// Settings are layered: built-in defaults, then an optional TOML or JSON
// file, then `PENNANT_*` environment variables (a `.env` file is honoured).

use crate::{ConfigError, Result};
use pennant_storage::Seed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Prefix shared by every environment variable the server reads.
pub const ENV_PREFIX: &str = "PENNANT";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                ConfigError::Load(format!("No file extension found: {}", path.display()))
            })?;

        Self::from_extension(ext)
            .ok_or_else(|| ConfigError::Load(format!("Unsupported format: {}", ext)))
    }

    /// Deserialize `content` in this format.
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            FileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e))),
            FileFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e))),
        }
    }
}

/// Read and deserialize a JSON or TOML file.
fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::detect(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::Load(format!("Failed to read {}: {}", path.display(), e))
    })?;

    format.parse(&content)
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    #[default]
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Validation(format!(
                "Unknown log format: {}",
                other
            ))),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Level or `EnvFilter` directive, e.g. `info` or `pennant_server=debug`.
    pub level: String,
    pub format: LogFormat,
    /// Colored output for the pretty and compact formats.
    pub ansi: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            ansi: false,
        }
    }
}

/// Store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Seed document (TOML or JSON) loaded into the memory store at startup.
    pub seed: Option<PathBuf>,
}

impl StoreSettings {
    /// Read the configured seed, if any.
    pub fn load_seed(&self) -> Result<Option<Seed>> {
        self.seed.as_deref().map(read_file::<Seed>).transpose()
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub log: LogSettings,
    pub store: StoreSettings,
}

impl ServerConfig {
    /// Load the full layered configuration and validate it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        dotenvy::dotenv().ok(); // Ignore if .env doesn't exist
        config.apply_env(prefixed_vars(std::env::vars_os())?)?;
        config.validate()?;

        Ok(config)
    }

    /// Load from a TOML or JSON file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        read_file(path)
    }

    /// Override settings from `PENNANT_*` variables.
    ///
    /// Recognised: `PENNANT_LOG_LEVEL`, `PENNANT_LOG_FORMAT`,
    /// `PENNANT_LOG_ANSI`, `PENNANT_STORE_SEED`. Anything else is ignored.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{}_", ENV_PREFIX);

        for (key, value) in vars {
            let Some(name) = key.strip_prefix(&prefix) else {
                continue;
            };

            match name {
                "LOG_LEVEL" => self.log.level = value,
                "LOG_FORMAT" => self.log.format = value.parse()?,
                "LOG_ANSI" => self.log.ansi = parse_bool(&key, &value)?,
                "STORE_SEED" if value.is_empty() => self.store.seed = None,
                "STORE_SEED" => self.store.seed = Some(PathBuf::from(value)),
                _ => {}
            }
        }

        Ok(())
    }

    /// Reject settings that would only fail later.
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.log.level).map_err(|e| {
            ConfigError::Validation(format!("Invalid log level {:?}: {}", self.log.level, e))
        })?;

        Ok(())
    }
}

/// Keep the `PENNANT_*` variables, converted to UTF-8.
///
/// Unrelated variables are skipped whatever their encoding; a prefixed one
/// with a non-UTF-8 value is an error.
fn prefixed_vars<I>(vars: I) -> Result<Vec<(String, String)>>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let prefix = format!("{}_", ENV_PREFIX);
    let mut out = Vec::new();

    for (key, value) in vars {
        let Some(key) = key.to_str().filter(|k| k.starts_with(&prefix)) else {
            continue;
        };

        let value = value.into_string().map_err(|raw| {
            ConfigError::Validation(format!("{} is not valid UTF-8: {:?}", key, raw))
        })?;
        out.push((key.to_string(), value));
    }

    Ok(out)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}
