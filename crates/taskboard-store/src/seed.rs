//! Initial store contents.
//!
//! The compiled-in seeds are the mock data the UI ships with. A seed
//! directory with `tasks.json` / `categories.json` can replace them.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::errors::{Result, StoreError};
use crate::types::{Category, Task};

const TASKS_SEED: &str = include_str!("../seed/tasks.json");
const CATEGORIES_SEED: &str = include_str!("../seed/categories.json");

/// File name of the task seed inside a seed directory.
pub const TASKS_FILE: &str = "tasks.json";
/// File name of the category seed inside a seed directory.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Parse the compiled-in task seed.
pub fn default_tasks() -> Result<Vec<Task>> {
    parse_tasks(TASKS_SEED)
}

/// Parse the compiled-in category seed.
pub fn default_categories() -> Result<Vec<Category>> {
    parse_categories(CATEGORIES_SEED)
}

/// Read a task seed file.
pub fn load_tasks_from_path(path: &Path) -> Result<Vec<Task>> {
    debug!(?path, "loading task seed");
    parse_tasks(&std::fs::read_to_string(path)?)
}

/// Read a category seed file.
pub fn load_categories_from_path(path: &Path) -> Result<Vec<Category>> {
    debug!(?path, "loading category seed");
    parse_categories(&std::fs::read_to_string(path)?)
}

/// Parse a JSON array of tasks, rejecting duplicate ids.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    ensure_unique(tasks.iter().map(|t| t.id.as_str()), "task")?;
    Ok(tasks)
}

/// Parse a JSON array of categories, rejecting duplicate ids.
pub fn parse_categories(json: &str) -> Result<Vec<Category>> {
    let categories: Vec<Category> = serde_json::from_str(json)?;
    ensure_unique(categories.iter().map(|c| c.id.as_str()), "category")?;
    Ok(categories)
}

pub(crate) fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>, kind: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::InvalidSeed(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}
