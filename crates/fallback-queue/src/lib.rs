//! # Fallback Queue
//!
//! Fail-over queue decorator with automatic master/slave reconciliation.
//!
//! This library provides:
//! - A backend-agnostic asynchronous [`Queue`] contract
//! - [`FallbackQueue`], a decorator that routes operations to a slave queue
//!   while the master is unreachable and drains the slave back into the
//!   master once it recovers
//! - A [`Semaphore`] contract serializing the recovery critical section
//! - An in-memory reference backend with blocking dequeue support
//!
//! ## Module Organization
//!
//! - [`error`] - Error types for queue and coordination operations
//! - [`queue`] - Queue contracts shared by all backends
//! - [`semaphore`] - Mutual-exclusion contract and tokio adapter
//! - [`fallback`] - The fail-over orchestrator
//! - [`providers`] - Concrete queue backends

// Module declarations
pub mod error;
pub mod fallback;
pub mod providers;
pub mod queue;
pub mod semaphore;

// Re-export commonly used types at crate root for convenience
pub use error::{QueueError, SemaphoreError};
pub use fallback::FallbackQueue;
pub use providers::{MemoryQueue, MemoryQueueConfig};
pub use queue::{BlockingQueue, Queue};
pub use semaphore::{Semaphore, TokioSemaphore};
