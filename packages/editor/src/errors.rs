//! Error types for the editor store

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Import error: {0}")]
    Import(#[from] lvforge_codec::ImportError),

    #[error("Persistence error: {0}")]
    Persist(#[from] serde_json::Error),
}
