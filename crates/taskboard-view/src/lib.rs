//! # taskboard-view
//!
//! Everything between the stores and a presentation layer:
//!
//! - [`filter`]: the status/category/priority projection of the task list
//! - [`stats`], [`due`]: derived numbers and labels shown next to the list
//! - [`reorder`]: turning a drag gesture into the id order sent to the store
//! - [`controller`]: [`ViewController`], which loads both stores, keeps a
//!   local copy of the list, and answers each user action with a [`Notice`]

#![deny(unsafe_code)]

pub mod controller;
pub mod due;
pub mod filter;
pub mod notice;
pub mod reorder;
pub mod stats;

pub use controller::{TaskDraft, ViewController};
pub use due::{DueStatus, due_label, due_status};
pub use filter::{CategoryFilter, EmptyState, FilterSpec, PriorityFilter, StatusFilter};
pub use notice::{Notice, NoticeLevel};
pub use reorder::move_id;
pub use stats::ProgressStats;
