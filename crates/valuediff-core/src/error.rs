//! Error types for the diff crate.

/// Errors that can occur while loading documents for comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An input stream did not hold a well-formed document.
    #[error("failed to decode document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The document decoded, but its root is not a mapping. Comparison is
    /// defined between two mappings only.
    #[error("document root must be a mapping")]
    RootNotMapping,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
