//! Error types
//!
//! Loading the catalogue is fail-fast: every variant here aborts startup.
//! Query misses are never errors.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while building the index from its source files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid {field} '{value}': {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while reading or validating the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config file has no [{0}] section")]
    MissingEnvironment(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}
