//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`TaskboardSettings::default()`]
//! 2. If `~/.taskboard/settings.json` exists, deep-merge user values over defaults
//! 3. Apply environment variable overrides (highest priority)
//! 4. Validate
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::TaskboardSettings;

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
/// Environment variable overriding `store.simulateLatency`.
pub const ENV_SIMULATE_LATENCY: &str = "TASKBOARD_SIMULATE_LATENCY";
/// Environment variable overriding `seed.dir`.
pub const ENV_SEED_DIR: &str = "TASKBOARD_SEED_DIR";

/// Resolve the path to the settings file (`~/.taskboard/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".taskboard").join("settings.json")
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<TaskboardSettings> {
    let mut settings = read_layered(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Defaults merged with the file at `path`, without env overrides.
fn read_layered(path: &Path) -> Result<TaskboardSettings> {
    let defaults = serde_json::to_value(TaskboardSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `TASKBOARD_*` overrides from the process environment.
pub fn apply_env_overrides(settings: &mut TaskboardSettings) {
    apply_overrides_with(settings, |name| std::env::var(name).ok());
}

/// Apply overrides using `lookup` as the variable source.
///
/// Invalid values are ignored with a warning (falling back to file/default).
pub fn apply_overrides_with(
    settings: &mut TaskboardSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
        settings.logging.level = v;
    }
    if let Some(raw) = lookup(ENV_SIMULATE_LATENCY) {
        match parse_bool(&raw) {
            Some(v) => settings.store.simulate_latency = v,
            None => warn!(key = ENV_SIMULATE_LATENCY, value = %raw, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(v) = lookup(ENV_SEED_DIR).filter(|v| !v.is_empty()) {
        settings.seed.dir = Some(v);
    }
}

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
