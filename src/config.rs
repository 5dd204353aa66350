use crate::cli::output::OutputFormat;
use crate::Convention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG: &str = ".naming.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_convention")]
    pub convention: Convention,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_convention() -> Convention {
    Convention::Snake
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// One config file; only the keys it sets take part in the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ConfigFile {
    convention: Option<Convention>,
    format: Option<OutputFormat>,
    color: Option<bool>,
}

/// Values given on the command line; they win over every file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub convention: Option<Convention>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            log::debug!("loading local config from {}", local.display());
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(convention) = overrides.convention {
            config.convention = convention;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }

        log::debug!("effective config: {:?}", config);
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(convention) = file.convention {
            self.convention = convention;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "naming").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
