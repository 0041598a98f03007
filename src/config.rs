use crate::casing::CasingStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseshift.toml";

/// Effective settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub default_target: Option<CasingStyle>,
    pub format: String,
    pub color: bool,
    pub skip_blank_lines: bool,
}

/// One config file. Keys missing from the file stay `None` and leave the
/// layers below untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub default_target: Option<CasingStyle>,
    pub format: Option<String>,
    pub color: Option<bool>,
    pub skip_blank_lines: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_target: None,
            format: "text".to_string(),
            color: true,
            skip_blank_lines: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_format: Option<String>, no_color: bool) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(format) = cli_format {
            config.format = format;
        }
        if no_color {
            config.color = false;
        }

        if let Some(style) = config.default_target.filter(|style| !style.is_target()) {
            warn!(
                "ignoring default_target = {}: it cannot be used as a conversion target",
                style
            );
            config.default_target = None;
        }

        debug!("effective configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if layer.default_target.is_some() {
            self.default_target = layer.default_target;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(skip) = layer.skip_blank_lines {
            self.skip_blank_lines = skip;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseshift").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
