/// Structured error types for the inventory store.
///
/// Library consumers get a closed taxonomy they can match on; binaries
/// wrap these in `anyhow` at the edge.
use thiserror::Error;

/// Error returned by every store operation
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened or connected to. Fatal at startup.
    #[error("store unavailable at {target}: {source}")]
    StoreUnavailable {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    /// The create-if-absent schema could not be applied. Fatal at startup.
    #[error("failed to establish schema: {source}")]
    SchemaFailed {
        #[source]
        source: sqlx::Error,
    },

    /// A standalone statement failed to execute
    #[error("{operation} failed: {source}")]
    QueryFailed {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The targeted row (or the parent it must hang off) does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// A statement inside a multi-step mutation failed; the transaction was rolled back
    #[error("transaction failed at step '{step}': {source}")]
    TransactionFailed {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a store-unavailable error for the given connection target
    pub fn unavailable(target: impl Into<String>, source: sqlx::Error) -> Self {
        Self::StoreUnavailable {
            target: target.into(),
            source,
        }
    }

    /// Create a query-failed error
    pub fn query(operation: &'static str, source: sqlx::Error) -> Self {
        Self::QueryFailed { operation, source }
    }

    /// Create a transaction-failed error naming the step that broke
    pub fn transaction(step: &'static str, source: sqlx::Error) -> Self {
        Self::TransactionFailed { step, source }
    }

    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// True when the error means "the thing you asked for does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
