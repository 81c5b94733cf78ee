//! Store error types.
//!
//! Every error is terminal for the operation that raised it and nothing is
//! committed when one is returned. Callers decide whether to retry.

use thiserror::Error;

/// Errors from store operations and seed loading.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type ("Task" or "Category").
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// Catch-all for an operation that could not complete.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Seed JSON could not be parsed.
    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// Seed data parsed but breaks a store invariant.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// Seed file could not be read.
    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a not-found error for a task.
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Task",
            id: id.into(),
        }
    }

    /// Create a not-found error for a category.
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Category",
            id: id.into(),
        }
    }

    /// Whether this is a [`StoreError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_not_found_display() {
        let err = StoreError::task_not_found("task-123");
        assert_eq!(err.to_string(), "Task not found: task-123");
        assert!(err.is_not_found());
    }

    #[test]
    fn category_not_found_display() {
        let err = StoreError::category_not_found("7");
        assert_eq!(err.to_string(), "Category not found: 7");
    }

    #[test]
    fn operation_failed_display() {
        let err = StoreError::OperationFailed("reorder lost 1 task".to_string());
        assert_eq!(err.to_string(), "Operation failed: reorder lost 1 task");
        assert!(!err.is_not_found());
    }

    #[test]
    fn seed_parse_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(err.to_string().starts_with("Seed parse error"));
    }
}
