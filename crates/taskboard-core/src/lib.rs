//! # taskboard-core
//!
//! Shared vocabulary for the taskboard crates:
//!
//! - **Branded IDs**: [`TaskId`] and [`CategoryId`] as newtypes so a category id
//!   can never be handed to a task lookup
//! - **Logging**: [`logging::init_subscriber`] for binaries and
//!   [`logging::capture_logs`] for asserting on tracing output in tests

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;

pub use ids::{CategoryId, TaskId};
