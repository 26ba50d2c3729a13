//! Icon tables
//!
//! Two small mappings live here:
//! - callout emoji → Obsidian callout type, used by the Markdown writer
//! - block kind → glyph, used by the tree visualization

use crate::model::BlockKind;

/// Callout type used when the icon is missing or not in the table.
pub const DEFAULT_CALLOUT_TYPE: &str = "note";

/// Map a callout's emoji to an Obsidian callout type.
///
/// Only exact glyph matches count: `⚠` without the variation selector is not `⚠️`.
pub fn callout_type(emoji: Option<&str>) -> &'static str {
    match emoji {
        Some("💡") => "tip",
        Some("⚠️") => "warning",
        Some("❗") => "important",
        Some("📝") => "note",
        Some("✅") => "success",
        Some("❌") => "failure",
        Some("🔥") => "danger",
        Some("❓") => "question",
        Some("💬") => "quote",
        Some("📌") => "abstract",
        Some("🐛") => "bug",
        Some("📖") => "example",
        Some("🔗") => "info",
        _ => DEFAULT_CALLOUT_TYPE,
    }
}

/// Get the glyph for a block kind in tree visualizations
pub fn get_icon(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::Paragraph => "¶",
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => "§",
        BlockKind::BulletedListItem | BlockKind::NumberedListItem => "•",
        BlockKind::ToDo => "☐",
        BlockKind::Toggle => "▸",
        BlockKind::Quote => "\"",
        BlockKind::Callout => "!",
        BlockKind::Code => "𝒱",
        BlockKind::Divider => "⎯",
        BlockKind::Image => "▣",
        BlockKind::Bookmark | BlockKind::LinkPreview => "⊕",
        BlockKind::Equation => "√",
        BlockKind::TableOfContents => "☰",
        BlockKind::ChildPage => "⧉",
        BlockKind::ChildDatabase => "⊞",
        BlockKind::Embed | BlockKind::Video | BlockKind::File | BlockKind::Pdf => "/",
        BlockKind::ColumnList | BlockKind::Column => "║",
        BlockKind::SyncedBlock => "⟲",
        BlockKind::Unknown(_) => "○",
    }
}
