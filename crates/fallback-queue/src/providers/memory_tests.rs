//! Tests for the in-memory queue implementation.

use super::*;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// FIFO Behavior
// ============================================================================

#[tokio::test]
async fn test_fifo_order_preserved() {
    let queue = MemoryQueue::default();

    for item in ["a", "b", "c"] {
        queue.enqueue(&item.to_string()).await.unwrap();
    }

    assert_eq!(queue.try_dequeue().await.unwrap(), Some("a".to_string()));
    assert_eq!(queue.try_dequeue().await.unwrap(), Some("b".to_string()));
    assert_eq!(queue.try_dequeue().await.unwrap(), Some("c".to_string()));
    assert_eq!(queue.try_dequeue().await.unwrap(), None);
}

#[tokio::test]
async fn test_len_tracks_pending_items() {
    let queue = MemoryQueue::default();
    assert_eq!(queue.len().await.unwrap(), 0);

    queue.enqueue(&1u32).await.unwrap();
    queue.enqueue(&2u32).await.unwrap();
    assert_eq!(queue.len().await.unwrap(), 2);

    queue.try_dequeue().await.unwrap();
    assert_eq!(queue.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_capacity_bound_enforced() {
    let queue = MemoryQueue::new(MemoryQueueConfig { max_queue_size: 2 });

    queue.enqueue(&1u32).await.unwrap();
    queue.enqueue(&2u32).await.unwrap();

    let overflow = queue.enqueue(&3u32).await;
    assert!(matches!(
        overflow,
        Err(QueueError::CapacityExceeded { capacity: 2 })
    ));

    // Dequeuing frees a slot.
    queue.try_dequeue().await.unwrap();
    queue.enqueue(&3u32).await.unwrap();
}

// ============================================================================
// Blocking Dequeue
// ============================================================================

#[tokio::test]
async fn test_blocking_dequeue_returns_present_item() {
    let queue = MemoryQueue::default();
    queue.enqueue(&"ready".to_string()).await.unwrap();

    assert_eq!(queue.dequeue().await.unwrap(), "ready".to_string());
}

#[tokio::test]
async fn test_blocking_dequeue_waits_for_item() {
    let queue = Arc::new(MemoryQueue::default());

    let consumer = tokio::spawn({
        let queue = Arc::clone(&queue);
        async move { queue.dequeue().await }
    });

    tokio::task::yield_now().await;
    queue.enqueue(&"late".to_string()).await.unwrap();

    assert_eq!(consumer.await.unwrap().unwrap(), "late".to_string());
}

#[tokio::test]
async fn test_concurrent_producers_and_consumers() {
    let queue = Arc::new(MemoryQueue::default());
    let producers = 4u32;
    let items_per_producer = 25u32;
    let total = producers * items_per_producer;

    let mut tasks = Vec::new();
    for producer in 0..producers {
        let queue = Arc::clone(&queue);
        tasks.push(tokio::spawn(async move {
            for i in 0..items_per_producer {
                queue.enqueue(&(producer * items_per_producer + i)).await.unwrap();
            }
        }));
    }

    let mut consumers = Vec::new();
    for _ in 0..2 {
        let queue = Arc::clone(&queue);
        consumers.push(tokio::spawn(async move {
            let mut seen = Vec::new();
            for _ in 0..(total / 2) {
                seen.push(queue.dequeue().await.unwrap());
            }
            seen
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    let mut all_seen = HashSet::new();
    for consumer in consumers {
        for item in consumer.await.unwrap() {
            assert!(all_seen.insert(item), "item delivered twice");
        }
    }
    assert_eq!(all_seen.len(), total as usize);
    assert_eq!(queue.len().await.unwrap(), 0);
}
