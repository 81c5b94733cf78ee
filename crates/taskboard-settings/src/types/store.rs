//! Store latency settings.
//!
//! The stores model a remote backend by sleeping before each operation. The
//! defaults reproduce the delays of the mock services the UI was built
//! against; `simulateLatency: false` turns every delay into a bare yield.

use serde::{Deserialize, Serialize};

/// Latency configuration for both stores.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Master switch for simulated delays.
    pub simulate_latency: bool,
    /// Per-operation delays for the task store.
    pub tasks: TaskLatencySettings,
    /// Per-operation delays for the category store.
    pub categories: CategoryLatencySettings,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            tasks: TaskLatencySettings::default(),
            categories: CategoryLatencySettings::default(),
        }
    }
}

/// Task store delays in milliseconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskLatencySettings {
    /// `get_all` delay.
    pub get_all_ms: u64,
    /// `get_by_id` delay.
    pub get_by_id_ms: u64,
    /// `create` delay.
    pub create_ms: u64,
    /// `update` delay.
    pub update_ms: u64,
    /// `delete` delay.
    pub delete_ms: u64,
    /// `reorder_tasks` delay.
    pub reorder_ms: u64,
}

impl Default for TaskLatencySettings {
    fn default() -> Self {
        Self {
            get_all_ms: 300,
            get_by_id_ms: 200,
            create_ms: 400,
            update_ms: 300,
            delete_ms: 250,
            reorder_ms: 300,
        }
    }
}

/// Category store delays in milliseconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryLatencySettings {
    /// `get_all` delay.
    pub get_all_ms: u64,
    /// `get_by_id` delay.
    pub get_by_id_ms: u64,
    /// `create` delay.
    pub create_ms: u64,
    /// `update` delay.
    pub update_ms: u64,
    /// `delete` delay.
    pub delete_ms: u64,
}

impl Default for CategoryLatencySettings {
    fn default() -> Self {
        Self {
            get_all_ms: 200,
            get_by_id_ms: 150,
            create_ms: 300,
            update_ms: 250,
            delete_ms: 200,
        }
    }
}
