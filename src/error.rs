use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a recipe book
#[derive(Error, Debug)]
pub enum ExportError {
    /// Input file is missing or unreadable
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not well-formed or does not match the book layout
    #[error("Failed to parse recipe book: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// Export record could not be serialized to front matter
    #[error("Failed to serialize front matter: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// Output directory or file could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
