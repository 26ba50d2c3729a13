//! Structural roles of blocks
//!
//! The renderer does not care what a block says, only how its children relate to it:
//!
//! | Role                 | Kinds                                          | Children rendered           |
//! |----------------------|------------------------------------------------|-----------------------------|
//! | ListItem             | bulleted/numbered list item, to-do             | one indent level deeper     |
//! | QuoteContainer       | quote, callout, toggle                         | unindented, then `> `-quoted |
//! | TransparentContainer | column list, column, synced block              | at the parent's depth       |
//! | Other                | everything else, unknown kinds included        | at the parent's depth       |

use crate::model::BlockKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    ListItem,
    QuoteContainer,
    TransparentContainer,
    Other,
}

pub fn classify(kind: &BlockKind) -> BlockRole {
    match kind {
        BlockKind::BulletedListItem | BlockKind::NumberedListItem | BlockKind::ToDo => {
            BlockRole::ListItem
        }
        BlockKind::Quote | BlockKind::Callout | BlockKind::Toggle => BlockRole::QuoteContainer,
        BlockKind::ColumnList | BlockKind::Column | BlockKind::SyncedBlock => {
            BlockRole::TransparentContainer
        }
        _ => BlockRole::Other,
    }
}
