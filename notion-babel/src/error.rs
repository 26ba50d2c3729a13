//! Error types for fetching and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`crate::source::BlockSource`] while listing children.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No children listing exists for the block
    #[error("No children recorded for block '{0}'")]
    NotFound(String),
    /// Snapshot could not be read from disk
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A page announced a cursor that leads nowhere
    #[error("No page for cursor '{cursor}' under block '{block_id}'")]
    MissingPage { block_id: String, cursor: String },
    /// A cursor came back twice while draining one listing
    #[error("Pagination for block '{block_id}' revisited cursor '{cursor}'")]
    CursorLoop { block_id: String, cursor: String },
}

/// Errors that abort rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to fetch children of '{block_id}': {source}")]
    Fetch {
        block_id: String,
        #[source]
        source: FetchError,
    },
}

impl RenderError {
    pub(crate) fn fetch(block_id: &str, source: FetchError) -> Self {
        RenderError::Fetch {
            block_id: block_id.to_string(),
            source,
        }
    }
}
