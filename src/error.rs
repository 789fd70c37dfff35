use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the storefront shell around the search core.
///
/// Matching, debouncing and navigation are total and never produce these;
/// they come from loading catalogs and configuration or from the terminal.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("no catalog given; pass --catalog or set `catalog` in the config")]
    MissingCatalog,

    #[error("unknown sort option '{0}'")]
    UnknownSortOption(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
