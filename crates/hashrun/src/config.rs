//! TOML configuration loading and validation. Handles tilde expansion and the config lookup order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG: &str = "hashrun.toml";

/// Top-level configuration for hashrun.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the `<letter>*<extension>` input files
    #[serde(default = "defaults::data_dir")]
    pub data_dir: PathBuf,

    /// Input file extension, including the leading dot
    #[serde(default = "defaults::extension")]
    pub extension: String,

    /// Build step run once before any solver call
    #[serde(default = "defaults::build")]
    pub build: CommandSpec,

    /// Solver run once per selected input set
    #[serde(default = "defaults::solver")]
    pub solver: CommandSpec,
}

/// An external program and the fixed arguments it is always given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from file, or return defaults if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            config.data_dir = expand_tilde(&config.data_dir)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from CLI-provided path, the local `hashrun.toml`, or the user config.
    pub fn load_or_default(cli_path: Option<&Path>) -> Result<Self> {
        let path = match cli_path {
            Some(p) => p.to_path_buf(),
            None => {
                let local = PathBuf::from(LOCAL_CONFIG);
                if local.exists() {
                    local
                } else {
                    default_config_path()?
                }
            }
        };
        tracing::debug!("loading config from {}", path.display());
        Self::load(&path)
    }

    /// Validate config for common misconfigurations.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.build.program.trim().is_empty(),
            "build program cannot be empty"
        );
        anyhow::ensure!(
            !self.solver.program.trim().is_empty(),
            "solver program cannot be empty"
        );
        anyhow::ensure!(
            !self.extension.contains('/'),
            "extension cannot contain '/': '{}'",
            self.extension
        );

        // data_dir exists but is a file, not a directory
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            anyhow::bail!(
                "data_dir exists but is not a directory: {}",
                self.data_dir.display()
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
            extension: defaults::extension(),
            build: defaults::build(),
            solver: defaults::solver(),
        }
    }
}

/// Expand `~` prefix to the user's home directory.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Ok(stripped) = path.strip_prefix("~") {
        Ok(dirs::home_dir()
            .context("could not determine home directory")?
            .join(stripped))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Default user config file path: ~/.config/hashrun/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    Ok(dirs::home_dir()
        .context("could not determine home directory")?
        .join(".config")
        .join("hashrun")
        .join("config.toml"))
}

mod defaults {
    use super::CommandSpec;
    use std::path::PathBuf;

    pub fn data_dir() -> PathBuf {
        PathBuf::from("../data")
    }

    pub fn extension() -> String {
        ".in".to_string()
    }

    pub fn build() -> CommandSpec {
        CommandSpec::new("make")
    }

    pub fn solver() -> CommandSpec {
        CommandSpec::new("./solve")
    }
}
