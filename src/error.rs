//! Error types.

use thiserror::Error;

/// A document read that could not be satisfied.
///
/// This is the only error the resolver ever sees. It is reported to a
/// [`DiagnosticSink`](crate::DiagnosticSink) and turned into an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Offset outside the document, or a partition map that no longer matches it.
    #[error("offset {offset} is outside the document (length {length})")]
    InvalidOffset { offset: usize, length: usize },
}

/// Rejected partition map passed to [`PartitionedText::new`](crate::PartitionedText::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionMapError {
    #[error("partition at index {index} is empty")]
    EmptyPartition { index: usize },

    #[error("partition at index {index} starts at {found}, expected {expected}")]
    Gap {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("partition at index {index} ends past the largest representable offset")]
    Overflow { index: usize },

    #[error("partitions cover {covered} characters but the document has {length}")]
    Coverage { covered: usize, length: usize },
}

/// Rejected descriptor name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("descriptor name is empty")]
    EmptyName,

    #[error("unterminated placeholder in '{0}'")]
    UnterminatedPlaceholder(String),

    #[error("invalid name pattern '{name}': {message}")]
    Pattern { name: String, message: String },
}
