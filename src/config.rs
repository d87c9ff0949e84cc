use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::info;

use crate::error::ConfigError;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Mailbox size of the session actor.
    pub channel_buffer: usize,
    /// JSON catalog to load instead of the built-in sample.
    pub catalog_path: Option<PathBuf>,
    /// Where the palette export is written.
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            catalog_path: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Builds a config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_buffer = match lookup("STOREFRONT_CHANNEL_BUFFER") {
            Some(raw) => parse_buffer(&raw)?,
            None => defaults.channel_buffer,
        };
        let catalog_path = lookup("STOREFRONT_CATALOG")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);
        let export_dir = lookup("STOREFRONT_EXPORT_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        Ok(Self {
            channel_buffer,
            catalog_path,
            export_dir,
        })
    }
}

fn parse_buffer(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: "STOREFRONT_CHANNEL_BUFFER",
        message,
    };
    let size = raw.trim().parse::<usize>().map_err(|e| invalid(e.to_string()))?;
    if size == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(size)
}
