//! Error types for component resolution.

use thiserror::Error;

use crate::namespace::registry::LoadError;

/// Component resolver error type.
#[derive(Error, Debug)]
pub enum Error {
    /// No namespace unit is registered at the computed path
    #[error(
        "Could not load namespace '{full_path}' for symbol '{symbol}'. \
         Original name: '{name}', prefix: '{prefix}'. Error: {source}"
    )]
    NamespaceNotFound {
        name: String,
        prefix: String,
        full_path: String,
        symbol: String,
        #[source]
        source: LoadError,
    },

    /// The namespace loaded but does not define the symbol
    #[error(
        "Namespace '{full_path}' has no symbol '{symbol}'. Available names: {available:?}"
    )]
    SymbolNotFound {
        full_path: String,
        symbol: String,
        available: Vec<String>,
    },

    /// A namespace path was registered twice
    #[error("Namespace '{0}' is already registered")]
    DuplicateNamespace(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;
