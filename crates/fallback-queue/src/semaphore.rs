//! Mutual-exclusion contract used to serialize recovery transitions.

use crate::error::SemaphoreError;
use async_trait::async_trait;

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;

/// Asynchronous mutual-exclusion primitive.
///
/// `wait` suspends the caller until a permit is available; dropping the
/// returned future abandons the wait with no permit held. `release` is
/// synchronous, never blocks, and may be called without a matching wait
/// having been recorded by the caller; the primitive owns the correctness
/// of its permit count.
#[async_trait]
pub trait Semaphore: Send + Sync {
    /// Suspend until a permit is available
    async fn wait(&self) -> Result<(), SemaphoreError>;

    /// Return a permit
    fn release(&self);
}

/// [`Semaphore`] adapter over [`tokio::sync::Semaphore`].
///
/// Tokio's acquire is cancel-safe: a wait future dropped before completion
/// never holds a permit.
pub struct TokioSemaphore {
    inner: tokio::sync::Semaphore,
}

impl TokioSemaphore {
    /// Create a semaphore with the given number of permits
    pub fn new(permits: usize) -> Self {
        Self {
            inner: tokio::sync::Semaphore::new(permits),
        }
    }

    /// Create a single-permit semaphore, usable as a binary lock
    pub fn binary() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl Semaphore for TokioSemaphore {
    async fn wait(&self) -> Result<(), SemaphoreError> {
        let permit = self
            .inner
            .acquire()
            .await
            .map_err(|_| SemaphoreError::Closed)?;
        // The permit is returned through release, not through guard drop.
        permit.forget();
        Ok(())
    }

    fn release(&self) {
        self.inner.add_permits(1);
    }
}
