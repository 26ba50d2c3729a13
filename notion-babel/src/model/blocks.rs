//! Block nodes and their typed payloads.
//!
//! On the wire a block looks like
//!
//! ```text
//! { "id": "…", "type": "to_do", "has_children": false, "to_do": { "rich_text": […], "checked": true } }
//! ```
//!
//! The payload lives under a key named after the type. Payload shapes overlap heavily between
//! types, so every payload decodes into the same lenient [`BlockPayload`] record and the
//! formatter reads only the fields that matter for the block's [`BlockKind`].

use super::lenient;
use super::rich_text::RichTextSpan;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Block type tag.
///
/// The set is open: types this crate does not know are kept as [`BlockKind::Unknown`] with the
/// raw tag so they can be reported and skipped instead of failing the import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo,
    Toggle,
    Quote,
    Callout,
    Code,
    Divider,
    Image,
    Bookmark,
    LinkPreview,
    Equation,
    TableOfContents,
    ChildPage,
    ChildDatabase,
    Embed,
    Video,
    File,
    Pdf,
    ColumnList,
    Column,
    SyncedBlock,
    Unknown(String),
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => BlockKind::Paragraph,
            "heading_1" => BlockKind::Heading1,
            "heading_2" => BlockKind::Heading2,
            "heading_3" => BlockKind::Heading3,
            "bulleted_list_item" => BlockKind::BulletedListItem,
            "numbered_list_item" => BlockKind::NumberedListItem,
            "to_do" => BlockKind::ToDo,
            "toggle" => BlockKind::Toggle,
            "quote" => BlockKind::Quote,
            "callout" => BlockKind::Callout,
            "code" => BlockKind::Code,
            "divider" => BlockKind::Divider,
            "image" => BlockKind::Image,
            "bookmark" => BlockKind::Bookmark,
            "link_preview" => BlockKind::LinkPreview,
            "equation" => BlockKind::Equation,
            "table_of_contents" => BlockKind::TableOfContents,
            "child_page" => BlockKind::ChildPage,
            "child_database" => BlockKind::ChildDatabase,
            "embed" => BlockKind::Embed,
            "video" => BlockKind::Video,
            "file" => BlockKind::File,
            "pdf" => BlockKind::Pdf,
            "column_list" => BlockKind::ColumnList,
            "column" => BlockKind::Column,
            "synced_block" => BlockKind::SyncedBlock,
            other => BlockKind::Unknown(other.to_string()),
        }
    }

    /// The API tag for this kind (the raw name for unknown kinds).
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading_1",
            BlockKind::Heading2 => "heading_2",
            BlockKind::Heading3 => "heading_3",
            BlockKind::BulletedListItem => "bulleted_list_item",
            BlockKind::NumberedListItem => "numbered_list_item",
            BlockKind::ToDo => "to_do",
            BlockKind::Toggle => "toggle",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
            BlockKind::Code => "code",
            BlockKind::Divider => "divider",
            BlockKind::Image => "image",
            BlockKind::Bookmark => "bookmark",
            BlockKind::LinkPreview => "link_preview",
            BlockKind::Equation => "equation",
            BlockKind::TableOfContents => "table_of_contents",
            BlockKind::ChildPage => "child_page",
            BlockKind::ChildDatabase => "child_database",
            BlockKind::Embed => "embed",
            BlockKind::Video => "video",
            BlockKind::File => "file",
            BlockKind::Pdf => "pdf",
            BlockKind::ColumnList => "column_list",
            BlockKind::Column => "column",
            BlockKind::SyncedBlock => "synced_block",
            BlockKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Callout icon. Only emoji icons take part in callout type mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Icon {
    #[serde(deserialize_with = "lenient")]
    pub emoji: Option<String>,
}

/// A hosted (`file`) or linked (`external`) resource reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileRef {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Union of the payload fields the formatter reads.
///
/// Each field decodes on its own: absent, `null` or wrongly typed values take the field's
/// default without affecting the other fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockPayload {
    #[serde(deserialize_with = "lenient")]
    pub rich_text: Vec<RichTextSpan>,
    #[serde(deserialize_with = "lenient")]
    pub checked: bool,
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub caption: Vec<RichTextSpan>,
    #[serde(deserialize_with = "lenient")]
    pub icon: Option<Icon>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub expression: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub file: Option<FileRef>,
    #[serde(deserialize_with = "lenient")]
    pub external: Option<FileRef>,
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct BlockNode {
    pub id: String,
    pub kind: BlockKind,
    pub payload: BlockPayload,
    pub has_children: bool,
}

impl BlockNode {
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        BlockNode {
            id: id.into(),
            kind,
            payload: BlockPayload::default(),
            has_children: false,
        }
    }

    /// Replace the rich text with a single unannotated span.
    pub fn with_text(self, text: &str) -> Self {
        self.with_rich_text(vec![RichTextSpan::plain(text)])
    }

    pub fn with_rich_text(mut self, rich_text: Vec<RichTextSpan>) -> Self {
        self.payload.rich_text = rich_text;
        self
    }

    pub fn with_payload(mut self, payload: BlockPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Mark the node as having children to fetch.
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(default, deserialize_with = "lenient")]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, deserialize_with = "lenient")]
    has_children: bool,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl From<RawBlock> for BlockNode {
    fn from(mut raw: RawBlock) -> Self {
        let payload = match raw.fields.remove(&raw.kind) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
                log::debug!(
                    "Unreadable payload for {} block {}: {err}",
                    raw.kind,
                    raw.id
                );
                BlockPayload::default()
            }),
            None => BlockPayload::default(),
        };

        BlockNode {
            kind: BlockKind::from_tag(&raw.kind),
            id: raw.id,
            payload,
            has_children: raw.has_children,
        }
    }
}
