//! Error types for raw-table ingestion and normalization.

use std::path::PathBuf;
use thiserror::Error;

use qna_model::TableRole;

/// Row-level normalization failures.
///
/// Either variant aborts normalization of the whole input batch: partial,
/// silently-dropped data is worse than an explicit failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Period code not matching the 5-character year+quarter pattern.
    #[error("malformed period code '{code}' in table {role}")]
    MalformedPeriod { role: TableRole, code: String },

    /// Non-numeric (or non-finite) value text.
    #[error("malformed value '{value}' for '{category_label}' at '{code}' in table {role}")]
    MalformedValue {
        role: TableRole,
        code: String,
        category_label: String,
        value: String,
    },
}

/// Errors from the filesystem-facing CSV surface.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for filesystem ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
