//! # taskboard-store
//!
//! In-memory task and category stores.
//!
//! Both stores own their records outright: reads hand back clones and
//! mutators clone their inputs, so nothing outside a store ever holds a
//! reference into its state. Every operation is `async` and waits out a
//! configurable [`Latency`] before touching state, which keeps callers honest
//! about the store being remote-shaped even when the delay is zero.
//!
//! Task order inside [`TaskStore`] is meaningful: new tasks go to the front
//! and [`TaskStore::reorder_tasks`] performs a stable partial reorder so a
//! filtered view can be rearranged without disturbing hidden tasks.

#![deny(unsafe_code)]

pub mod backend;
pub mod category_store;
pub mod errors;
pub mod latency;
pub mod seed;
pub mod task_store;
pub mod types;

pub use backend::{CategoryBackend, TaskBackend};
pub use category_store::CategoryStore;
pub use errors::{Result, StoreError};
pub use latency::{Latency, StoreOp};
pub use task_store::TaskStore;
pub use types::*;

pub use taskboard_core::{CategoryId, TaskId};
