//! Immutable snapshots of Notion content.
//!
//! A [`BlockNode`] is one node of the remote block tree, as returned by a children listing.
//! Nodes never carry their children: the renderer asks a [`crate::source::BlockSource`] for them
//! when it reaches a node whose `has_children` flag is set.

pub mod blocks;
pub mod rich_text;

pub use blocks::{BlockKind, BlockNode, BlockPayload, FileRef, Icon};
pub use rich_text::{Annotations, RichTextSpan};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode one field, falling back to its default when the value is `null` or has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        log::debug!("Unreadable field, using its default: {err}");
        T::default()
    }))
}
