//! Non-fatal diagnostics
//!
//! Problems that should not stop an import (currently: block types the renderer cannot express)
//! are reported to a [`Diagnostics`] sink passed into the renderer. The default sink forwards to
//! the `log` facade; [`CollectedDiagnostics`] keeps them for inspection.

use crate::model::BlockNode;
use std::cell::RefCell;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The block type has no Markdown rendering; the block was skipped.
    UnsupportedBlock { block_id: String, block_type: String },
}

impl Diagnostic {
    pub fn unsupported(block: &BlockNode) -> Self {
        Diagnostic::UnsupportedBlock {
            block_id: block.id.clone(),
            block_type: block.kind.tag().to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedBlock {
                block_id,
                block_type,
            } => write!(f, "Unsupported block type: {block_type} (block {block_id})"),
        }
    }
}

pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);
}

/// Writes every diagnostic as a `warn` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Keeps diagnostics in report order.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
