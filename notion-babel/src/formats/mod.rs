//! Output formats
//!
//! - markdown: the vault Markdown writer (the point of this crate)
//! - treeviz: block tree outline for inspecting a document
//! - icons: glyph tables shared by both

pub mod icons;
pub mod markdown;
pub mod treeviz;

pub use markdown::{MarkdownRenderer, RenderRules};
pub use treeviz::to_treeviz_str;
