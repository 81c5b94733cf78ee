//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`]. With `#[serde(default)]` a partial JSON file is enough;
//! missing fields get their default value during deserialization.

mod logging;
mod store;

pub use logging::*;
pub use store::*;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Root settings type.
///
/// ```json
/// {
///   "logging": { "level": "info" },
///   "store": { "simulateLatency": false },
///   "seed": { "dir": "/srv/taskboard/seed" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskboardSettings {
    /// Settings schema version.
    pub version: String,
    /// Tracing output configuration.
    pub logging: LoggingSettings,
    /// Simulated store latency.
    pub store: StoreSettings,
    /// Where initial data comes from.
    pub seed: SeedSettings,
}

impl Default for TaskboardSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            logging: LoggingSettings::default(),
            store: StoreSettings::default(),
            seed: SeedSettings::default(),
        }
    }
}

impl TaskboardSettings {
    /// Reject values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "logging.level must not be empty".to_string(),
            ));
        }
        if let Some(dir) = &self.seed.dir {
            if dir.trim().is_empty() {
                return Err(SettingsError::InvalidValue(
                    "seed.dir must not be empty when set".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Initial data source.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedSettings {
    /// Directory holding `tasks.json` and `categories.json`. When unset the
    /// compiled-in seeds are used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_validate() {
        assert!(TaskboardSettings::default().validate().is_ok());
    }

    #[test]
    fn blank_level_rejected() {
        let mut settings = TaskboardSettings::default();
        settings.logging.level = "  ".to_string();
        assert_matches!(settings.validate(), Err(SettingsError::InvalidValue(_)));
    }

    #[test]
    fn blank_seed_dir_rejected() {
        let mut settings = TaskboardSettings::default();
        settings.seed.dir = Some(String::new());
        assert_matches!(settings.validate(), Err(SettingsError::InvalidValue(_)));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(TaskboardSettings::default()).unwrap();
        assert_eq!(json["store"]["simulateLatency"], true);
        assert_eq!(json["store"]["tasks"]["getAllMs"], 300);
        assert!(json["seed"].get("dir").is_none());
    }
}
