//! Exporters for the finished citation graph
//!
//! All exporters consume an immutable [`CitationGraph`](crate::CitationGraph)
//! and are deterministic: the same graph yields byte-identical output.

mod graphml;
mod json;
mod sqlite;

pub use graphml::{to_graphml_string, write_graphml};
pub use json::{node_records, to_json_string, write_json, NodeRecord};
pub use sqlite::write_sqlite;

use thiserror::Error;

/// Errors that can occur while writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
