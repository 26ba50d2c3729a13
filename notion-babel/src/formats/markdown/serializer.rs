//! Block tree → Markdown document
//!
//! Walks the tree depth first, fetching children through the [`BlockSource`] only when a block
//! announces them. Every sibling sequence becomes a list of *groups* (a block's own output, then
//! its rendered children) joined by one blank line:
//!
//! ```text
//! - parent            ← own group, depth 0
//!
//!     - child         ← child group, rendered one level deeper
//!
//! > [!tip]            ← callout own group
//! > Remember
//!
//! > quoted child      ← children rendered at depth 0, then quoted line by line
//! ```
//!
//! Depth only grows under list items. Quote-like containers restart at depth 0 for their
//! children and indent the quoted result as a whole. Layout containers and every other block
//! pass their depth through unchanged, which flattens columns and synced blocks into the
//! surrounding stream.

use super::leaf::format_block;
use super::rules::RenderRules;
use crate::common::classify::{classify, BlockRole};
use crate::common::lines::{indent_lines, quote_lines};
use crate::diagnostics::Diagnostics;
use crate::error::RenderError;
use crate::model::BlockNode;
use crate::source::BlockSource;

const GROUP_SEPARATOR: &str = "\n\n";

/// Renders documents pulled from a [`BlockSource`].
pub struct MarkdownRenderer<'a, S: BlockSource + ?Sized> {
    source: &'a S,
    rules: &'a RenderRules,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a, S: BlockSource + ?Sized> MarkdownRenderer<'a, S> {
    pub fn new(source: &'a S, rules: &'a RenderRules, diagnostics: &'a dyn Diagnostics) -> Self {
        MarkdownRenderer {
            source,
            rules,
            diagnostics,
        }
    }

    /// Render the whole document rooted at `document_id`.
    pub fn render_document(&self, document_id: &str) -> Result<String, RenderError> {
        let blocks = self
            .source
            .fetch_root_blocks(document_id)
            .map_err(|err| RenderError::fetch(document_id, err))?;
        self.render_blocks(&blocks, 0)
    }

    /// Render a sibling sequence at nesting `depth`.
    pub fn render_blocks(&self, blocks: &[BlockNode], depth: usize) -> Result<String, RenderError> {
        let mut groups = Vec::new();

        for block in blocks {
            let own = format_block(block, self.rules, self.diagnostics);
            if !own.is_empty() {
                groups.push(indent_lines(&own, depth, &self.rules.indent_string));
            }

            if block.has_children {
                let children = self.render_children(block, depth)?;
                if !children.is_empty() {
                    groups.push(children);
                }
            }
        }

        Ok(groups.join(GROUP_SEPARATOR))
    }

    fn render_children(&self, block: &BlockNode, depth: usize) -> Result<String, RenderError> {
        let children = self
            .source
            .fetch_children(&block.id)
            .map_err(|err| RenderError::fetch(&block.id, err))?;

        match classify(&block.kind) {
            BlockRole::ListItem => self.render_blocks(&children, depth + 1),
            BlockRole::QuoteContainer => {
                let inner = self.render_blocks(&children, 0)?;
                if inner.is_empty() {
                    return Ok(inner);
                }
                Ok(indent_lines(
                    &quote_lines(&inner),
                    depth,
                    &self.rules.indent_string,
                ))
            }
            BlockRole::TransparentContainer | BlockRole::Other => {
                self.render_blocks(&children, depth)
            }
        }
    }
}
