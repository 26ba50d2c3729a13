//! A block's own Markdown, ignoring its children.
//!
//! Output may span several lines (quotes, callouts, code and equations). Blocks that carry no
//! text of their own (layout containers, table of contents) produce an empty string, as do
//! unsupported kinds, which are also reported to the diagnostics sink.

use super::inline::{plain_text, render_rich_text};
use super::rules::RenderRules;
use crate::common::links::{file_name_from_url, first_non_empty};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::formats::icons::callout_type;
use crate::model::{BlockKind, BlockNode, BlockPayload, FileRef, RichTextSpan};

pub fn format_block(
    block: &BlockNode,
    rules: &RenderRules,
    diagnostics: &dyn Diagnostics,
) -> String {
    let payload = &block.payload;
    let text = || render_rich_text(&payload.rich_text);

    match &block.kind {
        BlockKind::Paragraph => text(),
        BlockKind::Heading1 => format!("# {}", text()),
        BlockKind::Heading2 => format!("## {}", text()),
        BlockKind::Heading3 => format!("### {}", text()),
        BlockKind::BulletedListItem => format!("- {}", text()),
        BlockKind::NumberedListItem => format!("1. {}", text()),
        BlockKind::ToDo => {
            let mark = if payload.checked { 'x' } else { ' ' };
            format!("- [{mark}] {}", text())
        }
        BlockKind::Toggle => format!("> [!info]- {}", text()),
        BlockKind::Quote => text()
            .split('\n')
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::Callout => {
            let emoji = payload.icon.as_ref().and_then(|icon| icon.emoji.as_deref());
            format!("> [!{}]\n> {}", callout_type(emoji), text())
        }
        BlockKind::Code => {
            // Fence bodies are the raw text: no inline markers, no links.
            let language = payload.language.as_deref().unwrap_or_default();
            format!("```{language}\n{}\n```", plain_text(&payload.rich_text))
        }
        BlockKind::Divider => "---".to_string(),
        BlockKind::Image => {
            let url = first_non_empty([file_url(&payload.file), file_url(&payload.external)])
                .unwrap_or_default();
            let label = caption_or_file_name(&payload.caption, url, &rules.image_placeholder);
            format!("![{label}]({url})")
        }
        BlockKind::Bookmark => {
            let url = payload.url.as_deref().unwrap_or_default();
            let label = if payload.caption.is_empty() {
                url.to_string()
            } else {
                render_rich_text(&payload.caption)
            };
            format!("[{label}]({url})")
        }
        BlockKind::LinkPreview => {
            let url = payload.url.as_deref().unwrap_or_default();
            format!("[{url}]({url})")
        }
        BlockKind::Equation => {
            let expression = payload.expression.as_deref().unwrap_or_default();
            format!("$$\n{expression}\n$$")
        }
        BlockKind::ChildPage => {
            let title = first_non_empty([payload.title.as_deref()]).unwrap_or("Untitled");
            format!("📄 [[{title}]]")
        }
        BlockKind::ChildDatabase => {
            let title =
                first_non_empty([payload.title.as_deref()]).unwrap_or("Untitled Database");
            format!("📊 [[{title}]]")
        }
        BlockKind::Embed | BlockKind::Video | BlockKind::File | BlockKind::Pdf => {
            format_attachment(payload, rules)
        }
        BlockKind::TableOfContents
        | BlockKind::ColumnList
        | BlockKind::Column
        | BlockKind::SyncedBlock => String::new(),
        BlockKind::Unknown(_) => {
            diagnostics.report(Diagnostic::unsupported(block));
            String::new()
        }
    }
}

fn format_attachment(payload: &BlockPayload, rules: &RenderRules) -> String {
    let url = first_non_empty([
        file_url(&payload.file),
        file_url(&payload.external),
        payload.url.as_deref(),
    ])
    .unwrap_or_default();
    let label = match first_non_empty([payload.name.as_deref()]) {
        Some(name) => name.to_string(),
        None => file_name_from_url(url).unwrap_or_else(|| rules.file_placeholder.clone()),
    };
    format!("[{label}]({url})")
}

fn file_url(reference: &Option<FileRef>) -> Option<&str> {
    reference.as_ref().and_then(|r| r.url.as_deref())
}

fn caption_or_file_name(caption: &[RichTextSpan], url: &str, placeholder: &str) -> String {
    if caption.is_empty() {
        file_name_from_url(url).unwrap_or_else(|| placeholder.to_string())
    } else {
        render_rich_text(caption)
    }
}
