//! Queue contracts shared by all backends.

use crate::error::QueueError;
use async_trait::async_trait;

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;

/// Asynchronous FIFO queue contract implemented by every backend.
///
/// Items are enqueued by reference so that a failed attempt leaves the
/// caller in possession of the item; implementations store their own clone.
/// Only per-queue FIFO order is guaranteed. Backends signal transient
/// unavailability through [`QueueError`].
#[async_trait]
pub trait Queue<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Append an item to the tail of the queue
    async fn enqueue(&self, item: &T) -> Result<(), QueueError>;

    /// Remove and return the head of the queue, or `None` if empty
    async fn try_dequeue(&self) -> Result<Option<T>, QueueError>;

    /// Count of pending items
    async fn len(&self) -> Result<u64, QueueError>;
}

/// Queue whose dequeue can suspend until an item arrives.
///
/// Abandoning the wait is done by dropping the future; no item is consumed
/// by an abandoned wait.
#[async_trait]
pub trait BlockingQueue<T>: Queue<T>
where
    T: Send + Sync,
{
    /// Remove and return the head of the queue, waiting for an item if empty
    async fn dequeue(&self) -> Result<T, QueueError>;
}
