//! Configuration types for placemat.
//!
//! [`Config::load`] reads `~/.config/placemat/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! Configuration only supplies defaults; every operation also accepts its
//! options explicitly, so embedders that manage their own settings can skip
//! this module entirely.

use placemat_core::LoadOptions;
use placemat_text::NormalForm;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[loader]
missing_tokens = []
trim_numeric   = true

[text]
default_form = "composed"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/placemat/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub text: TextConfig,
}

/// `[loader]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub missing_tokens: Vec<String>,
    #[serde(default = "default_trim_numeric")]
    pub trim_numeric: bool,
}

fn default_trim_numeric() -> bool { true }

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            missing_tokens: Vec::new(),
            trim_numeric: default_trim_numeric(),
        }
    }
}

impl LoaderConfig {
    /// Bridge to the loader's option struct.
    pub fn to_options(&self) -> LoadOptions {
        LoadOptions {
            missing_tokens: self.missing_tokens.clone(),
            trim_numeric: self.trim_numeric,
        }
    }
}

/// `[text]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Form applied when the caller does not pick one. An unrecognised name
    /// in the config file fails [`Config::load`] at startup rather than at
    /// first use.
    #[serde(default = "default_form")]
    pub default_form: NormalForm,
}

fn default_form() -> NormalForm { NormalForm::Composed }

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            default_form: default_form(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/placemat/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// The file may be absent.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("placemat")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
