//! Error types for canon loading operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::category::Category;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a single file or a directory of files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Expected document file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a document file.
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document content is not valid TOML.
    #[error("TOML parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to enumerate a document directory.
    #[error("failed to read directory '{path}': {source}")]
    DirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a Read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a DirRead error.
    pub fn dir_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirRead {
            path: path.into(),
            source,
        }
    }

    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::DirRead { path, .. } => path,
        }
    }
}

/// Errors recorded while loading the whole canon.
///
/// These never surface as a `Result`: `CanonLoader::load_all` collects them
/// into the returned report instead of failing the call.
#[derive(Error, Debug)]
pub enum CanonError {
    /// No root directory was configured before loading.
    #[error("canon root not set - provide a root path before loading")]
    RootNotSet,

    /// A category failed to load.
    #[error("{category}: {source}")]
    Category {
        category: Category,
        #[source]
        source: LoadError,
    },
}

impl CanonError {
    /// The category this error was recorded for, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::RootNotSet => None,
            Self::Category { category, .. } => Some(*category),
        }
    }
}
