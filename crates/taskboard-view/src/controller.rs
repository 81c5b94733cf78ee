//! View controller: local list state on top of the two backends.
//!
//! The controller keeps its own copy of the task list and only replaces it
//! with what a backend returned after that call succeeded, so a failed
//! action never leaves the local view half-updated.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use taskboard_store::{
    Category, CategoryBackend, Task, TaskBackend, TaskCreateParams, TaskId, TaskPriority,
    TaskUpdateParams,
};

use crate::filter::{EmptyState, FilterSpec};
use crate::notice::Notice;
use crate::reorder::move_id;
use crate::stats::ProgressStats;

/// Contents of the new-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Required; rejected when blank after trimming.
    pub title: String,
    /// Free text.
    pub description: String,
    /// Category name. Empty means none.
    pub category: String,
    /// Priority.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// A draft with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    fn into_params(self) -> TaskCreateParams {
        TaskCreateParams {
            title: self.title.trim().to_string(),
            description: Some(self.description),
            category: Some(self.category),
            priority: Some(self.priority),
            due_date: self.due_date,
        }
    }
}

/// Drives the stores on behalf of a presentation layer.
pub struct ViewController {
    task_backend: Arc<dyn TaskBackend>,
    category_backend: Arc<dyn CategoryBackend>,
    tasks: Vec<Task>,
    categories: Vec<Category>,
    filter: FilterSpec,
    load_error: Option<String>,
}

impl ViewController {
    /// A controller with empty local state. Call [`load`](Self::load) first.
    pub fn new(task_backend: Arc<dyn TaskBackend>, category_backend: Arc<dyn CategoryBackend>) -> Self {
        Self {
            task_backend,
            category_backend,
            tasks: Vec::new(),
            categories: Vec::new(),
            filter: FilterSpec::default(),
            load_error: None,
        }
    }

    /// Fetch tasks and categories concurrently.
    ///
    /// Returns `None` on success. On failure the previous local state is kept
    /// and the error text is available from [`load_error`](Self::load_error).
    pub async fn load(&mut self) -> Option<Notice> {
        let result = tokio::try_join!(self.task_backend.get_all(), self.category_backend.get_all());
        match result {
            Ok((tasks, categories)) => {
                info!(tasks = tasks.len(), categories = categories.len(), "loaded");
                self.tasks = tasks;
                self.categories = categories;
                self.load_error = None;
                None
            }
            Err(err) => {
                warn!(error = %err, "load failed");
                self.load_error = Some(err.to_string());
                Some(Notice::error("Failed to load tasks"))
            }
        }
    }

    /// Validate and create a task. The new task goes to the front of the list.
    pub async fn create_task(&mut self, draft: TaskDraft) -> Notice {
        if draft.title.trim().is_empty() {
            return Notice::error("Please enter a task title");
        }
        match self.task_backend.create(&draft.into_params()).await {
            Ok(task) => {
                info!(task_id = %task.id, "task created");
                self.tasks.insert(0, task);
                Notice::success("Task created successfully!")
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                Notice::error("Failed to create task")
            }
        }
    }

    /// Flip completion of a task. `None` when the id is not in the local list.
    pub async fn toggle_task(&mut self, id: &TaskId) -> Option<Notice> {
        let index = self.tasks.iter().position(|t| t.id == *id)?;
        let completed = !self.tasks[index].completed;
        let updates = TaskUpdateParams::completion(completed, Utc::now());

        Some(match self.task_backend.update(id, &updates).await {
            Ok(task) => {
                info!(task_id = %id, completed, "task toggled");
                self.tasks[index] = task;
                if completed {
                    Notice::success("Task completed!")
                } else {
                    Notice::success("Task reactivated")
                }
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "toggle failed");
                Notice::error("Failed to update task")
            }
        })
    }

    /// Delete a task.
    pub async fn delete_task(&mut self, id: &TaskId) -> Notice {
        match self.task_backend.delete(id).await {
            Ok(_) => {
                info!(task_id = %id, "task deleted");
                self.tasks.retain(|t| t.id != *id);
                Notice::success("Task deleted")
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "delete failed");
                Notice::error("Failed to delete task")
            }
        }
    }

    /// Send an order to the store and adopt the sequence it returns.
    pub async fn reorder_tasks(&mut self, ordered_ids: &[TaskId]) -> Notice {
        match self.task_backend.reorder_tasks(ordered_ids).await {
            Ok(tasks) => {
                info!(count = ordered_ids.len(), "tasks reordered");
                self.tasks = tasks;
                Notice::success("Tasks reordered successfully!")
            }
            Err(err) => {
                warn!(error = %err, "reorder failed");
                Notice::error("Failed to reorder tasks")
            }
        }
    }

    /// Drop `active` onto `over` within the visible list.
    ///
    /// `None` when the move is a no-op; no store call is made then.
    pub async fn move_visible(&mut self, active: &TaskId, over: &TaskId) -> Option<Notice> {
        let visible: Vec<TaskId> = self.visible_tasks().into_iter().map(|t| t.id).collect();
        let ordered = move_id(&visible, active, over)?;
        Some(self.reorder_tasks(&ordered).await)
    }

    /// Replace the filter.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    /// Current filter.
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Mutable access to the filter for single-selector changes.
    pub fn filter_mut(&mut self) -> &mut FilterSpec {
        &mut self.filter
    }

    /// Local copy of the full task list, in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Local copy of the categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Text of the last failed load, cleared by a successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Tasks passing the current filter, in store order.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.filter.apply(&self.tasks)
    }

    /// Progress over every task, ignoring the filter.
    pub fn stats(&self) -> ProgressStats {
        ProgressStats::from_tasks(&self.tasks)
    }

    /// List heading for the current status filter.
    pub fn title(&self) -> &'static str {
        self.filter.status.heading()
    }

    /// Placeholder copy for an empty visible list.
    pub fn empty_state(&self) -> EmptyState {
        self.filter.status.empty_state()
    }

    /// The category whose name matches the task's category.
    pub fn category_of(&self, task: &Task) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == task.category)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
