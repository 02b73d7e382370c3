//! Error types for queue and coordination operations.

use chrono::Duration;
use thiserror::Error;

/// Comprehensive error type for all queue operations
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Backend unavailable: {message}")]
    BackendUnavailable { message: String },

    #[error("Backend fault: {message}")]
    BackendFault { message: String },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Queue capacity exceeded: {capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("Queue storage lock poisoned")]
    StoragePoisoned,

    #[error("Coordination error: {0}")]
    Semaphore(#[from] SemaphoreError),

    #[error("Reconciliation task failed: {message}")]
    TaskFailed { message: String },
}

impl QueueError {
    /// Check if error is transient and should be retried
    pub fn is_transient(&self) -> bool {
        match self {
            Self::BackendUnavailable { .. } => true,
            Self::BackendFault { .. } => false,
            Self::Timeout { .. } => true,
            Self::CapacityExceeded { .. } => true,
            Self::StoragePoisoned => false,
            Self::Semaphore(_) => false,
            Self::TaskFailed { .. } => false,
        }
    }

    /// Check if error should be retried
    pub fn should_retry(&self) -> bool {
        self.is_transient()
    }

    /// Get suggested retry delay
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::BackendUnavailable { .. } => Some(Duration::seconds(5)),
            Self::Timeout { .. } => Some(Duration::seconds(1)),
            Self::CapacityExceeded { .. } => Some(Duration::seconds(1)),
            _ => None,
        }
    }
}

/// Errors raised by the mutual-exclusion primitive
#[derive(Debug, Error)]
pub enum SemaphoreError {
    #[error("Semaphore has been closed")]
    Closed,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
