//! Async call interface of the stores.
//!
//! The view controller talks to these traits rather than the concrete
//! stores, so a remote-backed or fault-injecting implementation can stand in.

use async_trait::async_trait;

use taskboard_core::{CategoryId, TaskId};

use crate::errors::Result;
use crate::types::{
    Category, CategoryCreateParams, CategoryUpdateParams, Task, TaskCreateParams,
    TaskUpdateParams,
};

/// Ordered task collection.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// All tasks in current order.
    async fn get_all(&self) -> Result<Vec<Task>>;

    /// One task by id.
    async fn get_by_id(&self, id: &TaskId) -> Result<Task>;

    /// Insert a new task at the front.
    async fn create(&self, params: &TaskCreateParams) -> Result<Task>;

    /// Shallow-merge `updates` into the task.
    async fn update(&self, id: &TaskId, updates: &TaskUpdateParams) -> Result<Task>;

    /// Remove a task.
    async fn delete(&self, id: &TaskId) -> Result<bool>;

    /// Stable partial reorder; returns the full new sequence.
    async fn reorder_tasks(&self, ordered_ids: &[TaskId]) -> Result<Vec<Task>>;
}

/// Unordered category collection.
#[async_trait]
pub trait CategoryBackend: Send + Sync {
    /// All categories.
    async fn get_all(&self) -> Result<Vec<Category>>;

    /// One category by id.
    async fn get_by_id(&self, id: &CategoryId) -> Result<Category>;

    /// Add a category.
    async fn create(&self, params: &CategoryCreateParams) -> Result<Category>;

    /// Shallow-merge `updates` into the category.
    async fn update(&self, id: &CategoryId, updates: &CategoryUpdateParams) -> Result<Category>;

    /// Remove a category. Tasks naming it are left alone.
    async fn delete(&self, id: &CategoryId) -> Result<bool>;
}
