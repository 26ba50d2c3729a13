//! Treeviz formatter for block trees
//!
//! Treeviz is a visual outline of the block tree, useful to see why a page renders the way it
//! does (which blocks are layout containers, which types are unknown, where children hang).
//!
//! The format is one line per block:
//! <prefix><connector> <icon> <type> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (3 blocks)
//! ├─ § heading_1 Weekly review
//! ├─ • bulleted_list_item Ship the importer
//! │ └─ ☐ to_do Write the changelog
//! └─ ║ column_list
//!   ├─ ║ column
//!   │ └─ ¶ paragraph Left side
//!   └─ ║ column
//!     └─ ○ table
//!
//! Children are fetched the same way the Markdown renderer fetches them, so a tree that prints
//! here will also render.

use super::icons::get_icon;
use crate::error::RenderError;
use crate::formats::markdown::inline::plain_text;
use crate::model::BlockNode;
use crate::source::BlockSource;

const MAX_LABEL_CHARS: usize = 30;

/// Render the block tree of `document_id` as an outline.
pub fn to_treeviz_str<S: BlockSource + ?Sized>(
    source: &S,
    document_id: &str,
) -> Result<String, RenderError> {
    let blocks = source
        .fetch_root_blocks(document_id)
        .map_err(|err| RenderError::fetch(document_id, err))?;

    let mut output = format!("⧉ Document ({} blocks)\n", blocks.len());
    format_children(source, &blocks, "", &mut output)?;
    Ok(output)
}

fn format_children<S: BlockSource + ?Sized>(
    source: &S,
    blocks: &[BlockNode],
    prefix: &str,
    output: &mut String,
) -> Result<(), RenderError> {
    for (index, block) in blocks.iter().enumerate() {
        let is_last = index == blocks.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        let label = display_label(block);

        output.push_str(&format!(
            "{prefix}{connector} {} {}",
            get_icon(&block.kind),
            block.kind
        ));
        if !label.is_empty() {
            output.push(' ');
            output.push_str(&label);
        }
        output.push('\n');

        if block.has_children {
            let children = source
                .fetch_children(&block.id)
                .map_err(|err| RenderError::fetch(&block.id, err))?;
            let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
            format_children(source, &children, &child_prefix, output)?;
        }
    }
    Ok(())
}

/// First line of the block's text (or title, url, expression), truncated.
fn display_label(block: &BlockNode) -> String {
    let payload = &block.payload;
    let text = plain_text(&payload.rich_text);
    let raw = [
        Some(text.as_str()),
        payload.title.as_deref(),
        payload.name.as_deref(),
        payload.url.as_deref(),
        payload.expression.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|candidate| !candidate.is_empty())
    .unwrap_or_default();

    let first_line = raw.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_LABEL_CHARS {
        let truncated: String = first_line.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{truncated}…")
    } else {
        first_line.to_string()
    }
}
