//! Queue backend implementations.
//!
//! This module contains concrete implementations of the `Queue` contract.
//! The in-memory backend doubles as the reference implementation for tests.

pub mod memory;

pub use memory::{MemoryQueue, MemoryQueueConfig};
