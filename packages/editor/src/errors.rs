//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid page record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("Corrupt stored page: {0}")]
    Document(#[from] pagecraft_blocks::DocumentError),
}
