//! Error types for the fallible edges of the crate: settings files and hotkey strings.
//!
//! The sketch session itself cannot fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("HOME environment variable is not set")]
    HomeNotSet,

    #[error("{path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyParseError {
    #[error("empty hotkey")]
    Empty,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("unsupported modifier combination {0:?}")]
    UnsupportedCombination(Vec<String>),

    #[error("too many modifiers: {0:?}")]
    TooManyModifiers(Vec<String>),

    #[error("key must be a single character or 'Space', got '{0}'")]
    InvalidKey(String),
}
