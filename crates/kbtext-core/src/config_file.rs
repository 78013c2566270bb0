use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the per-directory config file, looked up in the CWD.
pub const LOCAL_CONFIG_NAME: &str = ".kbtext.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub input: Option<InputConfig>,
    pub extraction: Option<ExtractionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// PDF to read when no path is given on the command line.
    pub default_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub expand_ligatures: Option<bool>,
    /// Fraction of page height from the top to drop as header. `0.0` disables.
    pub header_exclusion: Option<f32>,
    /// Fraction of page height from the bottom to drop as footer. `0.0` disables.
    pub footer_exclusion: Option<f32>,
}

impl ConfigFile {
    pub fn default_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.default_path.as_deref())
    }

    pub fn expand_ligatures(&self) -> Option<bool> {
        self.extraction.as_ref().and_then(|e| e.expand_ligatures)
    }

    pub fn header_exclusion(&self) -> Option<f32> {
        self.extraction.as_ref().and_then(|e| e.header_exclusion)
    }

    pub fn footer_exclusion(&self) -> Option<f32> {
        self.extraction.as_ref().and_then(|e| e.footer_exclusion)
    }
}

/// Platform config directory path: `<config_dir>/kbtext/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kbtext").join("config.toml"))
}

/// Load config by cascading CWD `.kbtext.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(LOCAL_CONFIG_NAME));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    match load_explicit(path) {
        Ok(config) => Some(config),
        Err(ConfigError::Read { .. }) => None,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Load a config the user named explicitly. Unlike [`load_from_path`], a
/// missing or malformed file is an error.
pub fn load_explicit(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        input: Some(InputConfig {
            default_path: overlay
                .input
                .as_ref()
                .and_then(|i| i.default_path.clone())
                .or_else(|| base.input.as_ref().and_then(|i| i.default_path.clone())),
        }),
        extraction: Some(ExtractionConfig {
            expand_ligatures: overlay
                .expand_ligatures()
                .or_else(|| base.expand_ligatures()),
            header_exclusion: overlay
                .header_exclusion()
                .or_else(|| base.header_exclusion()),
            footer_exclusion: overlay
                .footer_exclusion()
                .or_else(|| base.footer_exclusion()),
        }),
    }
}
