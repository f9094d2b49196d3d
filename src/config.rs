//! Configuration file handling for brlconv.
//!
//! Loads configuration from `~/.config/brlconv/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::braille::{Converter, DotParseOptions, DotStyle, ErrorPolicy, UnknownPolicy};

/// Configuration file structure for brlconv.
/// Loaded from ~/.config/brlconv/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub dots: DotsConfig,
    #[serde(default)]
    pub pseudo: PseudoConfig,
}

#[derive(Debug, Deserialize)]
pub struct ConversionConfig {
    /// raise, passthrough or replace. Validated when the converter is built.
    #[serde(default)]
    pub on_error: Option<String>,
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default = "default_true")]
    pub liberal_input: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            on_error: None,
            replacement: None,
            liberal_input: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DotsConfig {
    #[serde(flatten)]
    pub style: DotStyle,
    #[serde(flatten)]
    pub parse: DotParseOptions,
}

#[derive(Debug, Deserialize)]
pub struct PseudoConfig {
    #[serde(default = "default_true")]
    pub eight_dot: bool,
}

impl Default for PseudoConfig {
    fn default() -> Self {
        Self { eight_dot: true }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the default file doesn't exist.
    /// An explicit path must exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !explicit && !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build a converter from the `[conversion]` section.
    ///
    /// `policy` and `replacement` override the file when given.
    pub fn converter(
        &self,
        policy: Option<ErrorPolicy>,
        replacement: Option<char>,
    ) -> Result<Converter, ConfigError> {
        let policy = match (policy, self.conversion.on_error.as_deref()) {
            (Some(policy), _) => policy,
            (None, Some(name)) => name.parse().map_err(ConfigError::UnknownPolicy)?,
            (None, None) => ErrorPolicy::default(),
        };

        let replacement = match (replacement, self.conversion.replacement.as_deref()) {
            (Some(ch), _) => Some(ch),
            (None, Some(text)) => Some(single_char(text)?),
            (None, None) => None,
        };

        let mut converter =
            Converter::new(policy).with_liberal_input(self.conversion.liberal_input);
        if let Some(ch) = replacement {
            converter = converter.with_replacement(ch);
        }
        Ok(converter)
    }
}

fn single_char(text: &str) -> Result<char, ConfigError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidReplacement(text.to_string())),
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    UnknownPolicy(UnknownPolicy),

    #[error("replacement must be a single character, got \"{0}\"")]
    InvalidReplacement(String),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("brlconv").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/brlconv/config.toml")
        })
}

/// Contents written by `brlconv config init`.
pub const DEFAULT_CONFIG: &str = r#"# brlconv configuration

[conversion]
# What to do with untranslatable input: raise, passthrough, replace
on_error = "passthrough"
# Placeholder used by on_error = "replace"
replacement = "?"
# Accept lowercase braille ASCII
liberal_input = true

[dots]
# Output style: prefix + dots joined by delimiter + suffix, e.g. p1235 or (1,2,3,5)
prefix = "p"
delimiter = ""
suffix = ""
# Input: separator between cells and the characters a cell may contain
cell_delimiter = "p"
valid_chars = "012345678,p() "

[pseudo]
# Draw the fourth row (dots 7 and 8)
eight_dot = true
"#;
