//! Settings to stores.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use taskboard_settings::{CategoryLatencySettings, TaskLatencySettings, TaskboardSettings};
use taskboard_store::{CategoryStore, Latency, TaskStore, seed};

pub(crate) fn task_latency(settings: &TaskLatencySettings) -> Latency {
    Latency {
        get_all: Duration::from_millis(settings.get_all_ms),
        get_by_id: Duration::from_millis(settings.get_by_id_ms),
        create: Duration::from_millis(settings.create_ms),
        update: Duration::from_millis(settings.update_ms),
        delete: Duration::from_millis(settings.delete_ms),
        reorder: Duration::from_millis(settings.reorder_ms),
    }
}

// Categories have no reorder.
pub(crate) fn category_latency(settings: &CategoryLatencySettings) -> Latency {
    Latency {
        get_all: Duration::from_millis(settings.get_all_ms),
        get_by_id: Duration::from_millis(settings.get_by_id_ms),
        create: Duration::from_millis(settings.create_ms),
        update: Duration::from_millis(settings.update_ms),
        delete: Duration::from_millis(settings.delete_ms),
        reorder: Duration::ZERO,
    }
}

/// Both stores, seeded from `settings.seed.dir` or the compiled-in data.
pub(crate) fn build_stores(settings: &TaskboardSettings) -> Result<(TaskStore, CategoryStore)> {
    let (tasks_latency, categories_latency) = if settings.store.simulate_latency {
        (
            task_latency(&settings.store.tasks),
            category_latency(&settings.store.categories),
        )
    } else {
        (Latency::none(), Latency::none())
    };

    match settings.seed.dir.as_deref() {
        Some(dir) => {
            let dir = Path::new(dir);
            debug!(dir = %dir.display(), "seeding from directory");
            let tasks_path = dir.join(seed::TASKS_FILE);
            let categories_path = dir.join(seed::CATEGORIES_FILE);
            let tasks = seed::load_tasks_from_path(&tasks_path)
                .with_context(|| format!("Failed to load {}", tasks_path.display()))?;
            let categories = seed::load_categories_from_path(&categories_path)
                .with_context(|| format!("Failed to load {}", categories_path.display()))?;
            Ok((
                TaskStore::with_tasks(tasks, tasks_latency)?,
                CategoryStore::with_categories(categories, categories_latency)?,
            ))
        }
        None => Ok((
            TaskStore::seeded(tasks_latency)?,
            CategoryStore::seeded(categories_latency)?,
        )),
    }
}
