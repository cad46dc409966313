//! Error types
//!
//! Configuration and asset errors are fatal at startup. The simulation itself
//! only reports `SimError` when an entity ends up in an impossible state.

use std::path::PathBuf;

use thiserror::Error;

/// Settings could not be loaded or are out of range
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `Settings`
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Asset catalog could not be built
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("asset manifest lists no meteor sprites")]
    NoMeteorSprites,

    #[error("sprite `{name}` has zero size ({width}x{height})")]
    EmptySprite {
        name: String,
        width: u32,
        height: u32,
    },
}

/// Failure reported by an entity update during a tick
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{entity} rotation became non-finite")]
    NonFiniteRotation { entity: &'static str },
}
