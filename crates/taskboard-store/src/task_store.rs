//! The authoritative, ordered task sequence.
//!
//! Order is the only ranking signal: there is no rank field. New tasks are
//! inserted at the front, so untouched tasks read newest-first. Reordering
//! rewrites positions directly.
//!
//! State sits behind a mutex and each operation does its whole
//! read-modify-write inside one critical section after its simulated delay.
//! The lock is never held across an `.await`, and a future dropped during its
//! delay has not mutated anything.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, warn};

use taskboard_core::TaskId;

use crate::backend::TaskBackend;
use crate::errors::{Result, StoreError};
use crate::latency::{Latency, StoreOp};
use crate::seed;
use crate::types::{Task, TaskCreateParams, TaskUpdateParams};

struct TaskState {
    tasks: Vec<Task>,
    last_created_at: Option<DateTime<Utc>>,
}

impl TaskState {
    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == *id)
    }

    /// `now`, bumped up to the previous creation time if the clock went back.
    fn next_created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let at = self.last_created_at.map_or(now, |last| last.max(now));
        self.last_created_at = Some(at);
        at
    }
}

/// In-memory task store.
///
/// Cloning yields another handle to the same sequence.
#[derive(Clone)]
pub struct TaskStore {
    state: Arc<Mutex<TaskState>>,
    latency: Latency,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("len", &self.len())
            .field("latency", &self.latency)
            .finish()
    }
}

impl TaskStore {
    /// An empty store.
    pub fn new(latency: Latency) -> Self {
        Self {
            state: Arc::new(Mutex::new(TaskState {
                tasks: Vec::new(),
                last_created_at: None,
            })),
            latency,
        }
    }

    /// A store holding `tasks` in the given order. Ids must be unique.
    pub fn with_tasks(tasks: Vec<Task>, latency: Latency) -> Result<Self> {
        seed::ensure_unique(tasks.iter().map(|t| t.id.as_str()), "task")?;
        let store = Self::new(latency);
        store.state.lock().tasks = tasks;
        Ok(store)
    }

    /// A store holding the compiled-in mock tasks.
    pub fn seeded(latency: Latency) -> Result<Self> {
        Self::with_tasks(seed::default_tasks()?, latency)
    }

    /// Number of tasks right now.
    pub fn len(&self) -> usize {
        self.state.lock().tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.state.lock().tasks.is_empty()
    }

    /// Copy of the full sequence in current order.
    pub async fn get_all(&self) -> Vec<Task> {
        self.latency.wait(StoreOp::GetAll).await;
        let tasks = self.state.lock().tasks.clone();
        debug!(count = tasks.len(), "listed tasks");
        tasks
    }

    /// Copy of one task.
    pub async fn get_by_id(&self, id: &TaskId) -> Result<Task> {
        self.latency.wait(StoreOp::GetById).await;
        let state = self.state.lock();
        state
            .tasks
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::task_not_found(id.as_str()))
    }

    /// Insert a new task at the front of the sequence.
    ///
    /// Nothing is validated; unset fields take their defaults.
    pub async fn create(&self, params: &TaskCreateParams) -> Task {
        self.latency.wait(StoreOp::Create).await;
        let mut state = self.state.lock();
        let task = Task {
            id: TaskId::generate(),
            title: params.title.clone(),
            description: params.description.clone().unwrap_or_default(),
            category: params.category.clone().unwrap_or_default(),
            priority: params.priority.unwrap_or_default(),
            due_date: params.due_date,
            completed: false,
            created_at: state.next_created_at(Utc::now()),
            completed_at: None,
        };
        state.tasks.insert(0, task.clone());
        debug!(task_id = %task.id, "created task");
        task
    }

    /// Shallow-merge `updates` into a task and return the merged copy.
    ///
    /// `completed_at` is not derived from `completed`; callers keep them
    /// consistent.
    pub async fn update(&self, id: &TaskId, updates: &TaskUpdateParams) -> Result<Task> {
        self.latency.wait(StoreOp::Update).await;
        let mut state = self.state.lock();
        let index = state
            .position(id)
            .ok_or_else(|| StoreError::task_not_found(id.as_str()))?;
        let task = &mut state.tasks[index];
        updates.apply_to(task);
        debug!(task_id = %id, "updated task");
        Ok(task.clone())
    }

    /// Remove a task.
    pub async fn delete(&self, id: &TaskId) -> Result<bool> {
        self.latency.wait(StoreOp::Delete).await;
        let mut state = self.state.lock();
        let index = state
            .position(id)
            .ok_or_else(|| StoreError::task_not_found(id.as_str()))?;
        let _ = state.tasks.remove(index);
        debug!(task_id = %id, "deleted task");
        Ok(true)
    }

    /// Stable partial reorder.
    ///
    /// Tasks named in `ordered_ids` come first in that order; ids not in the
    /// store are skipped and a repeated id only counts at its first
    /// occurrence. All other tasks follow in their prior relative order.
    pub async fn reorder_tasks(&self, ordered_ids: &[TaskId]) -> Result<Vec<Task>> {
        self.latency.wait(StoreOp::Reorder).await;
        let mut state = self.state.lock();
        let rebuilt = partial_reorder(&state.tasks, ordered_ids);
        let committed = commit_reorder(&mut state.tasks, rebuilt)?;
        debug!(requested = ordered_ids.len(), count = committed.len(), "reordered tasks");
        Ok(committed)
    }
}

/// Replace `current` with `rebuilt` if it is a permutation of it.
///
/// `partial_reorder` always yields one; anything else means the rebuild lost
/// or duplicated tasks, and `current` is left as it was.
fn commit_reorder(current: &mut Vec<Task>, rebuilt: Vec<Task>) -> Result<Vec<Task>> {
    let before: HashSet<&str> = current.iter().map(|t| t.id.as_str()).collect();
    let is_permutation = rebuilt.len() == current.len()
        && rebuilt.iter().all(|t| before.contains(t.id.as_str()))
        && rebuilt.iter().map(|t| t.id.as_str()).collect::<HashSet<_>>().len() == rebuilt.len();
    if !is_permutation {
        warn!(
            before = current.len(),
            after = rebuilt.len(),
            "reorder rebuild is not a permutation, keeping previous order"
        );
        return Err(StoreError::OperationFailed(format!(
            "reorder produced {} tasks from {}",
            rebuilt.len(),
            current.len()
        )));
    }
    current.clone_from(&rebuilt);
    Ok(rebuilt)
}

/// Named tasks first (in `ordered_ids` order), then the rest in prior order.
fn partial_reorder(tasks: &[Task], ordered_ids: &[TaskId]) -> Vec<Task> {
    let index: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    let mut placed: HashSet<usize> = HashSet::with_capacity(ordered_ids.len());
    let mut rebuilt = Vec::with_capacity(tasks.len());
    for id in ordered_ids {
        if let Some(&i) = index.get(id.as_str()) {
            if placed.insert(i) {
                rebuilt.push(tasks[i].clone());
            }
        }
    }
    rebuilt.extend(
        tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| !placed.contains(i))
            .map(|(_, t)| t.clone()),
    );
    rebuilt
}

#[async_trait]
impl TaskBackend for TaskStore {
    async fn get_all(&self) -> Result<Vec<Task>> {
        Ok(TaskStore::get_all(self).await)
    }

    async fn get_by_id(&self, id: &TaskId) -> Result<Task> {
        TaskStore::get_by_id(self, id).await
    }

    async fn create(&self, params: &TaskCreateParams) -> Result<Task> {
        Ok(TaskStore::create(self, params).await)
    }

    async fn update(&self, id: &TaskId, updates: &TaskUpdateParams) -> Result<Task> {
        TaskStore::update(self, id, updates).await
    }

    async fn delete(&self, id: &TaskId) -> Result<bool> {
        TaskStore::delete(self, id).await
    }

    async fn reorder_tasks(&self, ordered_ids: &[TaskId]) -> Result<Vec<Task>> {
        TaskStore::reorder_tasks(self, ordered_ids).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
