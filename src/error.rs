//! Error handling and result types for AvlTreeMap operations.
//!
//! Expected absences (missing keys, empty filter results, absent locate
//! candidates) are represented as `Option`/`bool` results, not errors. The
//! error type exists for the checked operation variants and for invariant
//! validation, where a failure indicates misuse or a structural defect.

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
}

impl AvlTreeError {
    /// Create a DataIntegrityError with context.
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context.
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            AvlTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            AvlTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Result type for key lookup operations.
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations.
pub type ModifyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree operations that may fail.
pub type TreeResult<T> = Result<T, AvlTreeError>;
