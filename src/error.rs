//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, YAML, HTTP and JSON errors, and provides semantic variants
//! for configuration problems and Stash API responses.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("{} was not found, created it now. Fill it in and run again", path.display())]
    ConfigCreated { path: PathBuf },

    #[error("Config root must be a mapping of {keys}")]
    ConfigNotMapping { keys: &'static str },

    #[error("Missing config key: {key}")]
    MissingConfigKey { key: &'static str },

    #[error("Config key is empty: {key}")]
    EmptyConfigValue { key: &'static str },

    #[error("API Key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Could not resolve tag: {name:?}")]
    UnresolvedTag { name: String },

    #[error("Scene not found: {id}")]
    SceneNotFound { id: u64 },

    #[error("Invalid id returned by server: {value:?}")]
    InvalidId { value: String },

    #[error("Scene ID must be a number, got: {input:?}")]
    InvalidSceneId { input: String },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("No scene loaded")]
    NoSceneLoaded,
}
