//! Generation error types.

use thiserror::Error;

/// Errors that can occur while generating strings
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Enumeration needed more traversal frames than allowed.
    /// Usually an infinite language enumerated without a length bound.
    #[error("Traversal depth limit ({limit}) exceeded; set a max length or raise the depth limit")]
    CapacityExceeded { limit: usize },
}
