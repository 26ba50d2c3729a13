use super::{BlockPage, PagedSource};
use crate::error::FetchError;
use crate::model::BlockNode;
use std::collections::HashMap;

/// Block tree held in memory, keyed by parent id.
///
/// By default every listing is served as a single page. [`MemorySource::with_page_size`] splits
/// listings into pages whose cursors are the offset of the next page.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    children: HashMap<String, Vec<BlockNode>>,
    page_size: Option<usize>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Record `blocks` as the children of `parent_id`, replacing any previous listing.
    pub fn insert(&mut self, parent_id: impl Into<String>, blocks: Vec<BlockNode>) {
        self.children.insert(parent_id.into(), blocks);
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with(mut self, parent_id: impl Into<String>, blocks: Vec<BlockNode>) -> Self {
        self.insert(parent_id, blocks);
        self
    }
}

impl PagedSource for MemorySource {
    fn fetch_page(&self, block_id: &str, cursor: Option<&str>) -> Result<BlockPage, FetchError> {
        let blocks = self
            .children
            .get(block_id)
            .ok_or_else(|| FetchError::NotFound(block_id.to_string()))?;

        let missing_page = |cursor: &str| FetchError::MissingPage {
            block_id: block_id.to_string(),
            cursor: cursor.to_string(),
        };
        let start = match cursor {
            None => 0,
            Some(cursor) => match cursor.parse::<usize>() {
                Ok(offset) if offset <= blocks.len() => offset,
                _ => return Err(missing_page(cursor)),
            },
        };

        let size = self.page_size.unwrap_or(blocks.len().max(1));
        let end = (start + size).min(blocks.len());
        let has_more = end < blocks.len();

        Ok(BlockPage {
            results: blocks[start..end].to_vec(),
            has_more,
            next_cursor: has_more.then(|| end.to_string()),
        })
    }
}
