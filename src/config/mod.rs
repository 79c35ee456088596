//! Boot configuration: API base URI, bearer token, output defaults.
//!
//! `Config::resolve` is the single construction point. Everything else
//! receives the resulting `Config` by reference.

use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_uri: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_uri: None,
            token: None,
            output_dir: default_output_dir(),
            default_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    /// Build the effective configuration for one run.
    ///
    /// Precedence, lowest to highest: defaults, config file, CLI flags
    /// (clap already folds `RTIMESHEET_TOKEN` / `RTIMESHEET_API_URI` into them).
    pub fn resolve(cli: &Cli) -> AppResult<Self> {
        let path = Self::path_for(cli);
        let mut cfg = Self::load(&path)?;

        if let Some(uri) = &cli.api_uri {
            cfg.api_uri = Some(uri.clone());
        }
        if let Some(token) = &cli.token {
            cfg.token = Some(token.clone());
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Config file selected by `--config`, or the platform default.
    pub fn path_for(cli: &Cli) -> PathBuf {
        cli.config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    fn validate(&self) -> AppResult<()> {
        if let Some(uri) = &self.api_uri {
            url::Url::parse(uri)
                .map_err(|e| AppError::Config(format!("invalid api_uri '{uri}': {e}")))?;
        }
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::Config("token must not be empty".to_string()));
        }
        Ok(())
    }

    /// Bearer token, required by every API call.
    pub fn require_token(&self) -> AppResult<&str> {
        self.token.as_deref().ok_or(AppError::MissingToken)
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Write a default configuration file at `path` (never overwrites).
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(true)
    }
}
