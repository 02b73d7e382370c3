//! Shared helpers for integration tests.

use async_trait::async_trait;
use bytes::Bytes;
use fallback_queue::{MemoryQueue, Queue, QueueError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Install a tracing subscriber for test output (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a JSON payload body for item `id`
pub fn payload(id: usize) -> Bytes {
    let body = serde_json::json!({ "id": id });
    Bytes::from(serde_json::to_vec(&body).expect("payload serialization"))
}

/// Queue backend whose availability can be toggled at runtime.
///
/// While down, every operation fails with `BackendUnavailable`; while up it
/// behaves like the in-memory backend it wraps.
pub struct FlakyQueue {
    inner: MemoryQueue<Bytes>,
    down: AtomicBool,
}

impl FlakyQueue {
    pub fn new() -> Self {
        Self {
            inner: MemoryQueue::default(),
            down: AtomicBool::new(false),
        }
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    fn check_up(&self) -> Result<(), QueueError> {
        if self.down.load(Ordering::SeqCst) {
            Err(QueueError::BackendUnavailable {
                message: "backend is down".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for FlakyQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Queue<Bytes> for FlakyQueue {
    async fn enqueue(&self, item: &Bytes) -> Result<(), QueueError> {
        self.check_up()?;
        self.inner.enqueue(item).await
    }

    async fn try_dequeue(&self) -> Result<Option<Bytes>, QueueError> {
        self.check_up()?;
        self.inner.try_dequeue().await
    }

    async fn len(&self) -> Result<u64, QueueError> {
        self.check_up()?;
        self.inner.len().await
    }
}
