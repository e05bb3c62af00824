pub mod document;

pub use crate::types::identifiers::DocumentVersion;
pub use document::{Document, DocumentError};
