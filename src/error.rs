//! Startup error types
//!
//! Only bootstrap paths (settings, textures) can fail. The per-frame
//! simulation is total and never returns an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanderError {
    #[error("failed to load texture {}: {reason}", .path.display())]
    TextureLoad { path: PathBuf, reason: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings in {}: {reason}", .path.display())]
    InvalidSettings { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, LanderError>;
