//! Record and parameter types for the stores.
//!
//! All serializable types use `camelCase` on the wire, the shape of the seed
//! files and of the JSON the presentation layer exchanges.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use taskboard_core::{CategoryId, TaskId};

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Default priority.
    #[default]
    Medium,
    /// Elevated priority.
    High,
}

impl TaskPriority {
    /// All priorities, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Lowercase wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized priority token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority: {0}")]
pub struct UnknownPriority(pub String);

impl FromStr for TaskPriority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, immutable id.
    pub id: TaskId,
    /// Title shown in the list.
    pub title: String,
    /// Free-form details.
    #[serde(default)]
    pub description: String,
    /// Category name (by value, not a foreign key).
    #[serde(default)]
    pub category: String,
    /// Priority level.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Optional deadline.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// When the task was last marked complete. Maintained by callers.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A named, colored tag used to group tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id.
    pub id: CategoryId,
    /// Display name; tasks reference categories by this value.
    pub name: String,
    /// Display color token.
    pub color: String,
    /// Display icon token.
    #[serde(default = "default_icon")]
    pub icon: String,
}

/// Icon assigned when a category is created without one.
pub const DEFAULT_CATEGORY_ICON: &str = "Folder";

fn default_icon() -> String {
    DEFAULT_CATEGORY_ICON.to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter types
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a task. Unset fields take store defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateParams {
    /// Task title.
    pub title: String,
    /// Details (default: empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category name (default: empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Priority (default: medium).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Partial update for a task.
///
/// `None` leaves a field untouched. The nullable fields use a double option:
/// `Some(None)` clears the value. On the wire an absent key means untouched
/// and an explicit `null` means clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateParams {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// New deadline, or `Some(None)` to remove it.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<NaiveDate>>,
    /// New completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// New completion timestamp, or `Some(None)` to clear it.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskUpdateParams {
    /// The completion toggle the view issues: flag plus matching timestamp.
    #[must_use]
    pub fn completion(completed: bool, at: DateTime<Utc>) -> Self {
        Self {
            completed: Some(completed),
            completed_at: Some(completed.then_some(at)),
            ..Self::default()
        }
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the set fields over `task`. No derived fields are touched.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(category) = &self.category {
            task.category.clone_from(category);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(completed_at) = self.completed_at {
            task.completed_at = completed_at;
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateParams {
    /// Display name.
    pub name: String,
    /// Display color token.
    pub color: String,
    /// Icon token (default: `Folder`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Partial update for a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdateParams {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryUpdateParams {
    /// Shallow-merge the set fields over `category`.
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name.clone_from(name);
        }
        if let Some(color) = &self.color {
            category.color.clone_from(color);
        }
        if let Some(icon) = &self.icon {
            category.icon.clone_from(icon);
        }
    }
}

/// Deserialize a present key (including `null`) as `Some(..)`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: TaskId::from("1"),
            title: "Write tests".to_string(),
            description: "cover the merge".to_string(),
            category: "Work".to_string(),
            priority: TaskPriority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            completed: false,
            created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<TaskPriority>(), Ok(TaskPriority::High));
        assert_eq!(" low ".parse::<TaskPriority>(), Ok(TaskPriority::Low));
        assert_eq!(
            "urgent".parse::<TaskPriority>(),
            Err(UnknownPriority("urgent".to_string()))
        );
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn task_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(json["dueDate"], "2024-03-15");
        assert_eq!(json["priority"], "high");
        assert!(json["completedAt"].is_null());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn task_missing_optional_fields_take_defaults() {
        let task: Task = serde_json::from_str(
            r#"{"id": "9", "title": "Bare", "createdAt": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.description.is_empty());
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn update_absent_key_vs_null() {
        let untouched: TaskUpdateParams = serde_json::from_str(r#"{"completed": false}"#).unwrap();
        assert_eq!(untouched.completed_at, None);

        let cleared: TaskUpdateParams =
            serde_json::from_str(r#"{"completed": false, "completedAt": null}"#).unwrap();
        assert_eq!(cleared.completed_at, Some(None));
    }

    #[test]
    fn apply_preserves_unset_fields() {
        let mut task = sample_task();
        let updates = TaskUpdateParams {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        updates.apply_to(&mut task);
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.category, "Work");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn apply_can_clear_due_date() {
        let mut task = sample_task();
        let updates = TaskUpdateParams {
            due_date: Some(None),
            ..Default::default()
        };
        updates.apply_to(&mut task);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn apply_does_not_derive_completed_at() {
        let mut task = sample_task();
        let updates = TaskUpdateParams {
            completed: Some(true),
            ..Default::default()
        };
        updates.apply_to(&mut task);
        assert!(task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn completion_sets_and_clears_timestamp() {
        let at: DateTime<Utc> = "2024-03-02T10:00:00Z".parse().unwrap();
        let done = TaskUpdateParams::completion(true, at);
        assert_eq!(done.completed_at, Some(Some(at)));

        let reopened = TaskUpdateParams::completion(false, at);
        assert_eq!(reopened.completed, Some(false));
        assert_eq!(reopened.completed_at, Some(None));
    }

    #[test]
    fn empty_update_detected() {
        assert!(TaskUpdateParams::default().is_empty());
        assert!(!TaskUpdateParams::completion(true, Utc::now()).is_empty());
    }

    #[test]
    fn category_icon_defaults_to_folder() {
        let category: Category =
            serde_json::from_str(r##"{"id": "1", "name": "Work", "color": "#fff"}"##).unwrap();
        assert_eq!(category.icon, DEFAULT_CATEGORY_ICON);
    }
}
