pub mod csv;
pub mod writer;

use std::path::PathBuf;

use thiserror::Error;

pub use self::csv::{parse_csv, to_csv};
pub use writer::{write_csv, EXPORT_FILE_NAME};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Nothing to export: no histogram has been computed")]
    NotLoaded,
    #[error("Malformed CSV line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}
