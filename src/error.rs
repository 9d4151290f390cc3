//! Error types for dataset loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::dataset::DatasetKey;

/// Failure to produce a dataset for a key.
///
/// Load failures are never fatal: the viewer keeps the previously displayed
/// dataset and reports the error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset '{key}' at {path:?}: {source}")]
    Io {
        key: DatasetKey,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read dataset '{key}': {source}")]
    Csv {
        key: DatasetKey,
        #[source]
        source: csv::Error,
    },
    #[error("dataset loader for '{0}' stopped before delivering a result")]
    WorkerDisconnected(DatasetKey),
}

/// Failure to read or validate a viewer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
