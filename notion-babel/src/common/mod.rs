//! Format-independent helpers shared by the Markdown writer.

pub mod classify;
pub mod lines;
pub mod links;
