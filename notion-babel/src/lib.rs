//! Notion → vault Markdown
//!
//!     This crate renders a Notion page (a tree of typed blocks holding styled text runs) into
//!     Obsidian-flavored Markdown. The conversion is one way: there is no parser and no attempt
//!     to round-trip.
//!
//!     This is a pure lib, shell agnostic: it never prints, reads env vars or picks files. The
//!     notion-cli crate is the shell around it.
//!
//! Architecture
//!
//!     The renderer only sees a capability, [`source::BlockSource`]: "given a block id, give me
//!     its complete, ordered children". Fetching happens lazily while rendering, one listing at a
//!     time, strictly depth first. Paginated backends implement [`source::PagedSource`] and get
//!     the cursor draining for free.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FetchError, RenderError
//!     ├── diagnostics.rs          # Non-fatal reports (unsupported blocks)
//!     ├── model                   # BlockNode, BlockKind, RichTextSpan
//!     ├── source                  # BlockSource / PagedSource, memory and snapshot backends
//!     ├── common                  # Block roles, line prefixing, file names from urls
//!     ├── formats
//!     │   ├── markdown            # inline, leaf and tree rendering
//!     │   ├── treeviz             # block tree outline
//!     │   └── icons.rs
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     Each block is rendered in three steps: its own text (formats/markdown/leaf.rs), its role
//!     (common/classify.rs), and its children, rendered recursively with the depth and wrapping
//!     the role asks for (formats/markdown/serializer.rs). Blocks and child groups are separated
//!     by one blank line.
//!
//! Errors
//!
//!     A failed listing aborts the whole document: no partial output is returned. Unknown block
//!     types are not errors; they are reported to a [`diagnostics::Diagnostics`] sink and skipped.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common              # builders shared by the suites
//!     ├── markdown            # document level rendering
//!     ├── snapshot            # recorded API responses
//!     └── fixtures

pub mod common;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod model;
pub mod source;

pub use diagnostics::{CollectedDiagnostics, Diagnostic, Diagnostics, LogDiagnostics};
pub use error::{FetchError, RenderError};
pub use formats::markdown::{MarkdownRenderer, RenderRules};
pub use model::{BlockKind, BlockNode, RichTextSpan};
pub use source::{BlockSource, MemorySource, PagedSource, SnapshotSource};

/// Render a document with the default rules, logging diagnostics.
pub fn render<S: BlockSource + ?Sized>(source: &S, document_id: &str) -> Result<String, RenderError> {
    render_with_rules(source, document_id, &RenderRules::default(), &LogDiagnostics)
}

/// Render a document with explicit rules and diagnostics sink.
pub fn render_with_rules<S: BlockSource + ?Sized>(
    source: &S,
    document_id: &str,
    rules: &RenderRules,
    diagnostics: &dyn Diagnostics,
) -> Result<String, RenderError> {
    MarkdownRenderer::new(source, rules, diagnostics).render_document(document_id)
}
