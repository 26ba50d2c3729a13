//! Block sources
//!
//!     The renderer never talks to the network or the disk itself. It asks a [`BlockSource`] for
//!     the ordered children of a block, at the moment it reaches that block.
//!
//!     Listings are cursor paginated upstream. Backends that speak in pages implement
//!     [`PagedSource`] instead, and get [`BlockSource`] for free: [`drain_pages`] follows
//!     `next_cursor` until the listing is exhausted, so the renderer only ever sees complete,
//!     order-preserving child sequences. A failing page fails the whole listing.
//!
//!     Implementations:
//!     - [`MemorySource`]: in-memory tree, optionally split into fixed-size pages.
//!     - [`SnapshotSource`]: recorded API list responses loaded from a JSON file.

pub mod memory;
pub mod snapshot;

pub use memory::MemorySource;
pub use snapshot::{PageInfo, Snapshot, SnapshotSource};

use crate::error::FetchError;
use crate::model::BlockNode;
use serde::Deserialize;
use std::collections::HashSet;

/// Capability to list the children of a block.
pub trait BlockSource {
    /// Complete, ordered children of `block_id`.
    fn fetch_children(&self, block_id: &str) -> Result<Vec<BlockNode>, FetchError>;

    /// Top-level blocks of a document. Pages are blocks, so this is a children listing too.
    fn fetch_root_blocks(&self, document_id: &str) -> Result<Vec<BlockNode>, FetchError> {
        self.fetch_children(document_id)
    }
}

/// One page of a children listing, in the shape the API returns it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockPage {
    #[serde(default)]
    pub results: Vec<BlockNode>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Capability to fetch a single page of a children listing.
pub trait PagedSource {
    /// `cursor` is `None` for the first page, then the previous page's `next_cursor`.
    fn fetch_page(&self, block_id: &str, cursor: Option<&str>) -> Result<BlockPage, FetchError>;
}

impl<P: PagedSource + ?Sized> BlockSource for P {
    fn fetch_children(&self, block_id: &str) -> Result<Vec<BlockNode>, FetchError> {
        drain_pages(self, block_id)
    }
}

/// Fetch every page of `block_id`'s listing and concatenate the results in order.
pub fn drain_pages<P: PagedSource + ?Sized>(
    source: &P,
    block_id: &str,
) -> Result<Vec<BlockNode>, FetchError> {
    let mut blocks = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = source.fetch_page(block_id, cursor.as_deref())?;
        log::debug!(
            "Fetched {} children of {block_id} (has_more: {})",
            page.results.len(),
            page.has_more
        );
        blocks.extend(page.results);

        match page.next_cursor {
            Some(next) if page.has_more && !next.is_empty() => {
                if !seen.insert(next.clone()) {
                    return Err(FetchError::CursorLoop {
                        block_id: block_id.to_string(),
                        cursor: next,
                    });
                }
                cursor = Some(next);
            }
            _ => break,
        }
    }

    Ok(blocks)
}
