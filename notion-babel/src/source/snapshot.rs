//! Recorded API responses
//!
//! A snapshot is a JSON file holding the children listings of a document exactly as the API
//! returned them, page by page, plus some metadata about the recorded pages:
//!
//! ```text
//! {
//!   "pages": { "<page id>": { "title": "Roadmap", "url": "https://www.notion.so/…" } },
//!   "children": {
//!     "<block id>": [ { "results": […], "has_more": true, "next_cursor": "c1" },
//!                     { "results": […], "has_more": false, "next_cursor": null } ]
//!   }
//! }
//! ```
//!
//! The first page of a listing is the one requested without a cursor. The page requested with
//! cursor `c` is the one following the page that announced `next_cursor: c`.

use super::{BlockPage, PagedSource};
use crate::error::FetchError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Metadata recorded for a page, used by callers for headers and listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub pages: BTreeMap<String, PageInfo>,
    pub children: HashMap<String, Vec<BlockPage>>,
}

/// [`PagedSource`] backed by a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        SnapshotSource { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn page(&self, page_id: &str) -> Option<&PageInfo> {
        self.snapshot.pages.get(page_id)
    }

    /// Recorded pages, sorted by id.
    pub fn pages(&self) -> impl Iterator<Item = (&str, &PageInfo)> {
        self.snapshot
            .pages
            .iter()
            .map(|(id, info)| (id.as_str(), info))
    }
}

impl PagedSource for SnapshotSource {
    fn fetch_page(&self, block_id: &str, cursor: Option<&str>) -> Result<BlockPage, FetchError> {
        let pages = self
            .snapshot
            .children
            .get(block_id)
            .ok_or_else(|| FetchError::NotFound(block_id.to_string()))?;

        let index = match cursor {
            None => 0,
            Some(cursor) => pages
                .iter()
                .position(|page| page.next_cursor.as_deref() == Some(cursor))
                .map(|announcing| announcing + 1)
                .ok_or_else(|| FetchError::MissingPage {
                    block_id: block_id.to_string(),
                    cursor: cursor.to_string(),
                })?,
        };

        match pages.get(index) {
            Some(page) => Ok(page.clone()),
            None if cursor.is_none() => Ok(BlockPage::default()),
            None => Err(FetchError::MissingPage {
                block_id: block_id.to_string(),
                cursor: cursor.unwrap_or_default().to_string(),
            }),
        }
    }
}
