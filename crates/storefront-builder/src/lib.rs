//! Page-builder boundary.
//!
//! The page-builder service authors declarative page documents; this crate
//! owns the pipeline's view of them:
//! - `PageDocument` / `Entity` - the document model, opaque content fields
//!   included
//! - `DefaultDocuments` - the static per-page-type fallback documents
//! - `ElementRegistry` and per-request element resolution
//! - `PageBuilder` - the collaborator trait the pipeline calls

mod client;
mod defaults;
mod document;
mod elements;

pub use client::*;
pub use defaults::*;
pub use document::*;
pub use elements::*;
