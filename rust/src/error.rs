//! Error handling and result types for BstSet operations.
//!
//! Every fallible operation reports one of the variants below to its immediate
//! caller. A failing operation never mutates the set, and a failing cursor
//! operation leaves the cursor where it was.

/// Error type for ordered set operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BstSetError {
    /// Insertion attempted with a key that is already present.
    #[error("Key already present in set")]
    DuplicateKey,
    /// Key or position not present in the set.
    #[error("Key not found in set")]
    KeyNotFound,
    /// Dereference of end, advance past end, retreat before the first element,
    /// or use of a cursor whose node has been erased.
    #[error("Invalid cursor operation: {0}")]
    InvalidCursor(String),
    /// The key producer failed while constructing a key.
    #[error("Key operation failed: {0}")]
    KeyOperationFailure(String),
    /// Tree structure does not satisfy its invariants.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
    /// Allocator bookkeeping disagrees with the tree.
    #[error("Arena error: {0}")]
    ArenaError(String),
}

impl BstSetError {
    /// Create an InvalidCursor error for the named operation.
    pub fn invalid_cursor(operation: &str, details: &str) -> Self {
        Self::InvalidCursor(format!("cannot {} {}", operation, details))
    }

    /// Create a KeyOperationFailure from the producer's error.
    pub fn key_operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::KeyOperationFailure(format!("{}: {}", operation, cause))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Check if this error is a cursor misuse
    pub fn is_cursor_error(&self) -> bool {
        matches!(self, Self::InvalidCursor(_))
    }

    /// Check if this error signals a missing key or position
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

/// Public result type for set operations that may fail
pub type SetResult<T> = Result<T, BstSetError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, BstSetError>;

/// Result type for set modification operations
pub type ModifyResult<T> = Result<T, BstSetError>;

/// Result type for cursor movement and dereference
pub type CursorResult<T> = Result<T, BstSetError>;

/// Result extension trait for improved error handling
pub trait SetResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> SetResult<T>;

    /// Prefix the error message with the failing operation's name
    fn with_operation(self, operation: &str) -> SetResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> SetResultExt<T> for Result<T, BstSetError> {
    fn with_context(self, context: &str) -> SetResult<T> {
        self.map_err(|e| match e {
            BstSetError::DuplicateKey => BstSetError::DuplicateKey,
            BstSetError::KeyNotFound => BstSetError::KeyNotFound,
            BstSetError::InvalidCursor(msg) => {
                BstSetError::InvalidCursor(format!("{}: {}", context, msg))
            }
            BstSetError::KeyOperationFailure(msg) => BstSetError::key_operation(context, msg),
            BstSetError::CorruptedTree(msg) => BstSetError::corrupted_tree(context, &msg),
            BstSetError::ArenaError(msg) => BstSetError::arena_error(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> SetResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Warning: BstSet operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}
