//! CLR-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Top-level error type for clar_compare.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("[CLR-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[CLR-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[CLR-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[CLR-2001] score file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("[CLR-2002] malformed score in {path} at line {line}: {value:?}")]
    DataFormat {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("[CLR-2003] series length mismatch: known has {known} rows, computed has {computed}")]
    LengthMismatch { known: usize, computed: usize },

    #[error("[CLR-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[CLR-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompareError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CLR-1001",
            Self::MissingConfig { .. } => "CLR-1002",
            Self::ConfigParse { .. } => "CLR-1003",
            Self::InputNotFound { .. } => "CLR-2001",
            Self::DataFormat { .. } => "CLR-2002",
            Self::LengthMismatch { .. } => "CLR-2003",
            Self::Serialization { .. } => "CLR-2101",
            Self::Io { .. } => "CLR-3002",
        }
    }

    /// Whether the failure means an input file is absent rather than bad.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    ///
    /// `NotFound` is promoted to [`CompareError::InputNotFound`].
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::InputNotFound { path };
        }
        Self::Io { path, source }
    }
}

impl From<serde_json::Error> for CompareError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for CompareError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
