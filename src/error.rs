//! Error types for netdoc.
//!
//! All failures surface through the single [`DocError`] enum:
//! - **Input validation** errors are raised at construction time when a
//!   required input is absent or contains absent elements. They name the
//!   offending argument.
//! - **Integrity** errors indicate inconsistent metadata facts (a bug in
//!   the fact provider or in this crate), never bad user input. They are
//!   raised immediately and never coerced into defaults.
//! - **Cancelled** is returned by the suspension-driven traversal when the
//!   cancellation token fires between two callbacks.
//! - **Visitor** wraps a failure raised by a consumer callback so it can
//!   propagate out of a traversal unchanged.
//!
//! Lookup misses are not errors anywhere in this crate; they are reported
//! through `Option` results. No operation retries, logs-and-continues, or
//! swallows a failure.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocError>;

/// Unified error type for tree construction and traversal.
#[derive(Debug, Error)]
pub enum DocError {
    /// A required input collection or argument was absent.
    #[error("missing required input: {name}")]
    MissingInput {
        /// Name of the absent argument.
        name: &'static str,
    },

    /// An input collection contained an absent element.
    #[error("{name} must not contain null entries")]
    NullEntry {
        /// Name of the collection argument holding the null entry.
        name: &'static str,
    },

    /// Metadata facts were internally inconsistent.
    ///
    /// Examples: a parameter whose default-value flag disagrees with the
    /// presence of a value, or a type reference variant that cannot occur
    /// in the position it was found in.
    #[error("metadata integrity error: {message}")]
    Integrity { message: String },

    /// The suspension-driven traversal was cancelled between callbacks.
    #[error("traversal cancelled")]
    Cancelled,

    /// A consumer visitor callback failed mid-traversal.
    #[error("visitor callback failed: {0}")]
    Visitor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DocError {
    /// Build an integrity error from anything displayable.
    pub fn integrity(message: impl Into<String>) -> Self {
        DocError::Integrity {
            message: message.into(),
        }
    }

    /// Wrap a consumer error raised inside a visitor callback.
    pub fn visitor(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DocError::Visitor(err.into())
    }
}
