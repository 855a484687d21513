//! Configuration loading
//!
//! The config file is TOML with one table per environment:
//!
//! ```toml
//! [development]
//! port = 8080
//! base_dir = "."
//! html_dir = "html"
//! data_dir = "data"
//!
//! [production]
//! port = 80
//! base_dir = "/srv/catalogue"
//! html_dir = "html"
//! data_dir = "data"
//! ```
//!
//! `CATALOGUE_CONFIG_FILE` overrides the default path and a set
//! `CATALOGUE_ENVIRONMENT` selects the `production` table.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE_ENV: &str = "CATALOGUE_CONFIG_FILE";
pub const ENVIRONMENT_ENV: &str = "CATALOGUE_ENVIRONMENT";
pub const DEFAULT_CONFIG_FILE: &str = "config/config.toml";

/// Settings for one environment
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Root that relative directories are resolved against
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Static front-end files
    #[serde(default = "default_html_dir")]
    pub html_dir: PathBuf,

    /// Corpus and alias files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_corpus_file")]
    pub corpus_file: String,

    #[serde(default = "default_aliases_file")]
    pub aliases_file: String,

    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Name of the table this config was read from
    #[serde(skip)]
    pub environment: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_html_dir() -> PathBuf {
    PathBuf::from("html")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_corpus_file() -> String {
    "JainPraveshika.txt".to_string()
}

fn default_aliases_file() -> String {
    "words_index.txt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            base_dir: default_base_dir(),
            html_dir: default_html_dir(),
            data_dir: default_data_dir(),
            corpus_file: default_corpus_file(),
            aliases_file: default_aliases_file(),
            log_level: default_log_level(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load using the config path and environment from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let environment = match env::var(ENVIRONMENT_ENV) {
            Ok(value) if !value.is_empty() => "production",
            _ => "development",
        };
        Self::from_file(path, environment)
    }

    /// Load the `environment` table of a config file
    pub fn from_file(path: impl AsRef<Path>, environment: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, environment)
    }

    /// Parse config text and pick the `environment` table
    pub fn from_toml(content: &str, environment: &str) -> Result<Self, ConfigError> {
        let mut tables: HashMap<String, Config> = toml::from_str(content)?;
        let mut config = tables
            .remove(environment)
            .ok_or_else(|| ConfigError::MissingEnvironment(environment.to_string()))?;

        config.environment = environment.to_string();
        config.resolve_paths();
        config.validate()?;
        Ok(config)
    }

    /// Resolve relative directories against `base_dir`
    fn resolve_paths(&mut self) {
        self.html_dir = self.base_dir.join(&self.html_dir);
        self.data_dir = self.base_dir.join(&self.data_dir);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".into()));
        }
        if self.corpus_file.is_empty() || self.aliases_file.is_empty() {
            return Err(ConfigError::Invalid(
                "corpus_file and aliases_file must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.data_dir.join(&self.corpus_file)
    }

    pub fn aliases_path(&self) -> PathBuf {
        self.data_dir.join(&self.aliases_file)
    }

    /// `bind_address:port`
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
