//! Error types for configuration loading and per-entry generation

use std::path::PathBuf;

use thiserror::Error;

use crate::style::StyleError;

/// Fatal errors that abort the whole run
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON
    #[error("failed to parse configuration '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Output directory could not be created
    #[error("failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The index page could not be written
    #[error("failed to write index '{path}': {source}")]
    WriteIndex {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors scoped to a single named entry; the run continues past these
#[derive(Debug, Error)]
pub enum EntryError {
    /// A style field failed to resolve to a typed value
    #[error("entry '{name}': {source}")]
    Style { name: String, source: StyleError },

    /// An output file for the entry could not be written
    #[error("entry '{name}': failed to write '{path}': {source}")]
    Write {
        name: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rasterization of the entry's SVG failed
    #[cfg(feature = "raster")]
    #[error("entry '{name}': {source}")]
    Raster {
        name: String,
        source: crate::renderer::RasterError,
    },
}

impl EntryError {
    /// Name of the entry this error belongs to
    pub fn entry_name(&self) -> &str {
        match self {
            Self::Style { name, .. } => name,
            Self::Write { name, .. } => name,
            #[cfg(feature = "raster")]
            Self::Raster { name, .. } => name,
        }
    }
}
