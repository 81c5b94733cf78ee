//! # taskboard-settings
//!
//! Configuration with layered sources for taskboard.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`TaskboardSettings::default()`]
//! 2. **User file**: `~/.taskboard/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `TASKBOARD_*` overrides (highest priority)
//!
//! There is no global instance. The binary loads settings once and hands the
//! relevant pieces to the stores and the logger it constructs.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings_from_path, settings_path};
pub use types::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = TaskboardSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_match_mock_service_delays() {
        let settings = TaskboardSettings::default();
        assert_eq!(settings.version, "0.1.0");
        assert_eq!(settings.logging.level, "warn");
        assert!(settings.store.simulate_latency);
        assert_eq!(settings.store.tasks.get_all_ms, 300);
        assert_eq!(settings.store.tasks.get_by_id_ms, 200);
        assert_eq!(settings.store.tasks.create_ms, 400);
        assert_eq!(settings.store.tasks.update_ms, 300);
        assert_eq!(settings.store.tasks.delete_ms, 250);
        assert_eq!(settings.store.tasks.reorder_ms, 300);
        assert_eq!(settings.store.categories.get_all_ms, 200);
        assert_eq!(settings.store.categories.get_by_id_ms, 150);
        assert!(settings.seed.dir.is_none());
    }
}
