//! Fail-over queue decorator with automatic reconciliation.
//!
//! [`FallbackQueue`] wraps a master queue and a slave queue and implements
//! the [`Queue`] contract itself, so it is a drop-in replacement anywhere a
//! queue is expected. Operations are routed to the master while it is
//! believed reachable; any master error flips the queue into a degraded
//! state in which items accumulate in the slave. The first master operation
//! to succeed after a failure triggers reconciliation: the slave is drained
//! back into the master before that call returns.
//!
//! Ordering caveat: the item whose enqueue triggers recovery reaches the
//! master before the items buffered earlier in the slave. Global FIFO order
//! across the master+slave timeline is therefore not guaranteed; only
//! per-sub-queue FIFO order is.

use crate::error::QueueError;
use crate::queue::Queue;
use crate::semaphore::{Semaphore, TokioSemaphore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;

// ============================================================================
// Shared State
// ============================================================================

/// State shared between callers and the spawned reconciliation task
struct Inner<T> {
    master: Arc<dyn Queue<T>>,
    slave: Arc<dyn Queue<T>>,
    /// Binary lock guarding the health flip and the reconciliation drain
    gate: Arc<dyn Semaphore>,
    /// Health flag; flipped back to `true` only under the gate
    master_available: AtomicBool,
}

impl<T> Inner<T>
where
    T: Send + Sync + 'static,
{
    /// Recover the master: drain the slave under the gate, then mark healthy.
    ///
    /// The drain runs in a spawned task awaited by the triggering caller, so
    /// a caller abandoned mid-drain cannot strand a dequeued item: the task
    /// runs to its normal termination, settles the flag, and releases the
    /// gate. A caller abandoned while still waiting for the gate holds no
    /// permit and has touched nothing.
    async fn reconcile(self: Arc<Self>) -> Result<(), QueueError> {
        self.gate.wait().await?;
        let task = tokio::spawn(async move {
            let result = self.drain_slave().await;
            self.gate.release();
            if let Err(ref slave_error) = result {
                error!(error = %slave_error, "reconciliation aborted: slave failure");
            }
            result
        });
        match task.await {
            Ok(result) => result,
            Err(join_error) => Err(QueueError::TaskFailed {
                message: join_error.to_string(),
            }),
        }
    }

    /// Move slave-buffered items back into the master. Caller holds the gate.
    async fn drain_slave(&self) -> Result<(), QueueError> {
        if self.master_available.load(Ordering::SeqCst) {
            // Another caller completed the drain while we waited for the gate.
            return Ok(());
        }
        let mut drained: u64 = 0;
        while let Some(item) = self.slave.try_dequeue().await? {
            if let Err(master_error) = self.master.enqueue(&item).await {
                // Put the item back so it is not lost; stay degraded.
                debug!(error = %master_error, drained, "master rejected item mid-drain; re-buffering");
                self.slave.enqueue(&item).await?;
                return Ok(());
            }
            drained += 1;
        }
        self.master_available.store(true, Ordering::SeqCst);
        info!(drained, "master recovered; slave drained");
        Ok(())
    }
}

// ============================================================================
// FallbackQueue
// ============================================================================

/// Queue decorator that fails over to a slave queue while the master is
/// unreachable and self-heals once it recovers.
pub struct FallbackQueue<T> {
    inner: Arc<Inner<T>>,
}

impl<T> FallbackQueue<T>
where
    T: Send + Sync + 'static,
{
    /// Create a fallback queue over the given master and slave queues
    pub fn new(master: Arc<dyn Queue<T>>, slave: Arc<dyn Queue<T>>) -> Self {
        Self::with_semaphore(master, slave, Arc::new(TokioSemaphore::binary()))
    }

    /// Create a fallback queue with an injected mutual-exclusion primitive
    pub fn with_semaphore(
        master: Arc<dyn Queue<T>>,
        slave: Arc<dyn Queue<T>>,
        gate: Arc<dyn Semaphore>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                master,
                slave,
                gate,
                master_available: AtomicBool::new(true),
            }),
        }
    }

    /// Current belief about master reachability
    pub fn is_master_available(&self) -> bool {
        self.inner.master_available.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> Queue<T> for FallbackQueue<T>
where
    T: Send + Sync + 'static,
{
    /// Enqueue to the master, falling back to the slave on any master error.
    ///
    /// A master failure is never surfaced to the caller; only a slave
    /// failure propagates. A success observed while degraded drains the
    /// slave before returning.
    async fn enqueue(&self, item: &T) -> Result<(), QueueError> {
        match self.inner.master.enqueue(item).await {
            Ok(()) => {
                if !self.inner.master_available.load(Ordering::SeqCst) {
                    Arc::clone(&self.inner).reconcile().await?;
                }
                Ok(())
            }
            Err(master_error) => {
                warn!(error = %master_error, "master enqueue failed; buffering item in slave");
                self.inner.master_available.store(false, Ordering::SeqCst);
                self.inner.slave.enqueue(item).await
            }
        }
    }

    /// Dequeue from the master, falling back to the slave on any master
    /// error. A success observed while degraded drains the slave first; the
    /// master's original result is returned unchanged.
    async fn try_dequeue(&self) -> Result<Option<T>, QueueError> {
        match self.inner.master.try_dequeue().await {
            Ok(value) => {
                if !self.inner.master_available.load(Ordering::SeqCst) {
                    Arc::clone(&self.inner).reconcile().await?;
                }
                Ok(value)
            }
            Err(master_error) => {
                warn!(error = %master_error, "master dequeue failed; falling back to slave");
                self.inner.master_available.store(false, Ordering::SeqCst);
                self.inner.slave.try_dequeue().await
            }
        }
    }

    /// Advisory length: best-effort sum of both sides.
    ///
    /// A master probe failure yields the slave's length alone and does not
    /// flip the health flag; lengths never drive state transitions.
    async fn len(&self) -> Result<u64, QueueError> {
        let slave_len = self.inner.slave.len().await?;
        match self.inner.master.len().await {
            Ok(master_len) => Ok(master_len + slave_len),
            Err(master_error) => {
                debug!(error = %master_error, "master length probe failed; reporting slave only");
                Ok(slave_len)
            }
        }
    }
}
