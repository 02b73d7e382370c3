//! In-memory queue implementation for testing and in-process use.
//!
//! This module provides a fully functional in-memory queue that:
//! - Preserves FIFO order under concurrent enqueue/dequeue
//! - Enforces a configurable capacity bound
//! - Supports blocking dequeue for consumer loops
//!
//! The queue is mutex-guarded rather than lock-free; individual operations
//! never hold the lock across an await point.

use crate::error::QueueError;
use crate::queue::{BlockingQueue, Queue};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Notify;
use tracing::trace;

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;

// ============================================================================
// Configuration
// ============================================================================

/// In-memory queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryQueueConfig {
    pub max_queue_size: usize,
}

impl Default for MemoryQueueConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 10000,
        }
    }
}

// ============================================================================
// Internal Storage
// ============================================================================

/// An item stored in the queue with metadata
struct StoredItem<T> {
    item: T,
    enqueued_at: DateTime<Utc>,
}

// ============================================================================
// MemoryQueue
// ============================================================================

/// In-memory FIFO queue
pub struct MemoryQueue<T> {
    items: Mutex<VecDeque<StoredItem<T>>>,
    available: Notify,
    config: MemoryQueueConfig,
}

impl<T> MemoryQueue<T> {
    /// Create new in-memory queue with configuration
    pub fn new(config: MemoryQueueConfig) -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Notify::new(),
            config,
        }
    }

    /// Remove and return the head item, if any
    fn pop(&self) -> Result<Option<T>, QueueError> {
        let mut items = self.items.lock().map_err(|_| QueueError::StoragePoisoned)?;
        Ok(items.pop_front().map(|stored| {
            let queued_for = Utc::now() - stored.enqueued_at;
            trace!(queued_ms = queued_for.num_milliseconds(), "item dequeued");
            stored.item
        }))
    }
}

impl<T> Default for MemoryQueue<T> {
    fn default() -> Self {
        Self::new(MemoryQueueConfig::default())
    }
}

#[async_trait]
impl<T> Queue<T> for MemoryQueue<T>
where
    T: Clone + Send + Sync,
{
    async fn enqueue(&self, item: &T) -> Result<(), QueueError> {
        {
            let mut items = self.items.lock().map_err(|_| QueueError::StoragePoisoned)?;
            if items.len() >= self.config.max_queue_size {
                return Err(QueueError::CapacityExceeded {
                    capacity: self.config.max_queue_size,
                });
            }
            items.push_back(StoredItem {
                item: item.clone(),
                enqueued_at: Utc::now(),
            });
        }
        self.available.notify_one();
        Ok(())
    }

    async fn try_dequeue(&self) -> Result<Option<T>, QueueError> {
        self.pop()
    }

    async fn len(&self) -> Result<u64, QueueError> {
        let items = self.items.lock().map_err(|_| QueueError::StoragePoisoned)?;
        Ok(items.len() as u64)
    }
}

#[async_trait]
impl<T> BlockingQueue<T> for MemoryQueue<T>
where
    T: Clone + Send + Sync,
{
    async fn dequeue(&self) -> Result<T, QueueError> {
        loop {
            if let Some(item) = self.pop()? {
                return Ok(item);
            }
            // notify_one stores a permit when no waiter is registered, so an
            // enqueue landing between the check above and this await still
            // wakes us.
            self.available.notified().await;
        }
    }
}
