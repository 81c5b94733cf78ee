//! Status / category / priority projection of the task list.
//!
//! A task is visible iff it passes all three selectors. Filtering never
//! reorders: the result keeps the store's sequence order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use taskboard_store::{Task, TaskPriority};

/// Token meaning "no restriction" for every selector.
pub const ALL: &str = "all";

/// Errors from parsing filter selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Not one of `active`, `completed`, `all`.
    #[error("unknown status filter: {0}")]
    UnknownStatus(String),
    /// Not a priority and not `all`.
    #[error("unknown priority filter: {0}")]
    UnknownPriority(String),
    /// Not one of `status`, `category`, `priority`.
    #[error("unknown filter field: {0}")]
    UnknownField(String),
}

/// Completion selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only incomplete tasks.
    #[default]
    Active,
    /// Only completed tasks.
    Completed,
    /// Everything.
    All,
}

impl StatusFilter {
    /// Whether `task` passes this selector.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::Active => !task.completed,
            Self::Completed => task.completed,
            Self::All => true,
        }
    }

    /// Heading for the list under this selector.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Completed => "Completed Tasks",
            Self::Active | Self::All => "My Tasks",
        }
    }

    /// Copy shown when nothing passes the filter.
    #[must_use]
    pub fn empty_state(self) -> EmptyState {
        match self {
            Self::Completed => EmptyState {
                title: "No completed tasks yet",
                description: "Complete some tasks to see them here",
            },
            Self::Active | Self::All => EmptyState {
                title: "No tasks found",
                description: "Create your first task to get started",
            },
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::All => ALL,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            ALL => Ok(Self::All),
            _ => Err(FilterError::UnknownStatus(s.to_string())),
        }
    }
}

/// Category selector. Matches the task's category name exactly.
///
/// Serializes as its token: `"all"` or the category name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Any category, including none.
    #[default]
    All,
    /// Only tasks whose category equals this name.
    Named(String),
}

impl CategoryFilter {
    /// Whether `task` passes this selector.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => task.category == *name,
        }
    }
}

impl From<&str> for CategoryFilter {
    /// `"all"` selects everything; anything else is a category name.
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Named(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Priority selector.
///
/// Serializes as its token: `"all"`, `"low"`, `"medium"` or `"high"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    /// Any priority.
    #[default]
    All,
    /// Only this priority.
    Only(TaskPriority),
}

impl PriorityFilter {
    /// Whether `task` passes this selector.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == priority,
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(priority) => write!(f, "{priority}"),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse::<TaskPriority>()
            .map(Self::Only)
            .map_err(|_| FilterError::UnknownPriority(s.to_string()))
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PriorityFilter> for String {
    fn from(filter: PriorityFilter) -> Self {
        filter.to_string()
    }
}

/// Title and description of the empty-list placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    /// Headline.
    pub title: &'static str,
    /// Supporting line.
    pub description: &'static str,
}

/// The three selectors together.
///
/// The default shows active tasks of every category and priority.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Completion selector.
    pub status: StatusFilter,
    /// Category selector.
    pub category: CategoryFilter,
    /// Priority selector.
    pub priority: PriorityFilter,
}

impl FilterSpec {
    /// Everything visible.
    #[must_use]
    pub fn all() -> Self {
        Self {
            status: StatusFilter::All,
            category: CategoryFilter::All,
            priority: PriorityFilter::All,
        }
    }

    /// Whether `task` passes every selector.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && self.category.matches(task) && self.priority.matches(task)
    }

    /// Tasks passing the filter, in input order.
    #[must_use]
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    /// Replace one selector from its text form.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), FilterError> {
        match field {
            "status" => self.status = value.parse()?,
            "category" => self.category = CategoryFilter::from(value),
            "priority" => self.priority = value.parse()?,
            other => return Err(FilterError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status={} category={} priority={}",
            self.status, self.category, self.priority
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use taskboard_store::TaskId;

    fn task(id: &str, completed: bool, category: &str, priority: TaskPriority) -> Task {
        Task {
            id: TaskId::from(id),
            title: id.to_string(),
            description: String::new(),
            category: category.to_string(),
            priority,
            due_date: None,
            completed,
            created_at: "2024-03-01T09:00:00Z".parse().unwrap(),
            completed_at: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task("a", false, "Work", TaskPriority::High),
            task("b", true, "Work", TaskPriority::Low),
            task("c", false, "Home", TaskPriority::High),
            task("d", true, "Home", TaskPriority::Medium),
            task("e", false, "", TaskPriority::Medium),
        ]
    }

    #[test]
    fn active_keeps_only_incomplete() {
        let tasks = vec![
            task("x", false, "", TaskPriority::Medium),
            task("y", true, "", TaskPriority::Medium),
        ];
        let spec = FilterSpec {
            status: StatusFilter::Active,
            ..FilterSpec::all()
        };
        assert_eq!(ids(&spec.apply(&tasks)), vec!["x"]);
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let tasks = sample();
        assert_eq!(ids(&FilterSpec::all().apply(&tasks)), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn completed_keeps_only_complete() {
        let spec = FilterSpec {
            status: StatusFilter::Completed,
            ..FilterSpec::all()
        };
        assert_eq!(ids(&spec.apply(&sample())), vec!["b", "d"]);
    }

    #[test]
    fn selectors_combine() {
        let spec = FilterSpec {
            status: StatusFilter::Active,
            category: CategoryFilter::Named("Home".to_string()),
            priority: PriorityFilter::Only(TaskPriority::High),
        };
        assert_eq!(ids(&spec.apply(&sample())), vec!["c"]);
    }

    #[test]
    fn category_match_is_exact() {
        let spec = FilterSpec {
            category: CategoryFilter::Named("work".to_string()),
            ..FilterSpec::all()
        };
        assert!(spec.apply(&sample()).is_empty());
    }

    #[test]
    fn default_is_active_everything() {
        let spec = FilterSpec::default();
        assert_eq!(spec.status, StatusFilter::Active);
        assert_eq!(spec.category, CategoryFilter::All);
        assert_eq!(spec.priority, PriorityFilter::All);
        assert_eq!(ids(&spec.apply(&sample())), vec!["a", "c", "e"]);
    }

    #[test]
    fn parse_tokens() {
        assert_eq!("Completed".parse::<StatusFilter>(), Ok(StatusFilter::Completed));
        assert_eq!("all".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
        assert_eq!(
            "high".parse::<PriorityFilter>(),
            Ok(PriorityFilter::Only(TaskPriority::High))
        );
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Shopping"),
            CategoryFilter::Named("Shopping".to_string())
        );
        assert_matches!(
            "done".parse::<StatusFilter>(),
            Err(FilterError::UnknownStatus(ref s)) if s == "done"
        );
        assert_matches!(
            "urgent".parse::<PriorityFilter>(),
            Err(FilterError::UnknownPriority(ref s)) if s == "urgent"
        );
    }

    #[test]
    fn set_by_field_name() {
        let mut spec = FilterSpec::default();
        spec.set("status", "all").unwrap();
        spec.set("category", "Work").unwrap();
        spec.set("priority", "low").unwrap();
        assert_eq!(spec.to_string(), "status=all category=Work priority=low");
        assert_matches!(spec.set("colour", "red"), Err(FilterError::UnknownField(_)));
    }

    #[test]
    fn failed_set_leaves_spec_unchanged() {
        let mut spec = FilterSpec::default();
        assert!(spec.set("status", "bogus").is_err());
        assert_eq!(spec, FilterSpec::default());
    }

    // ── serde ──

    #[test]
    fn serializes_as_plain_tokens() {
        let spec = FilterSpec {
            status: StatusFilter::Active,
            category: CategoryFilter::Named("Work".to_string()),
            priority: PriorityFilter::Only(TaskPriority::High),
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "status": "active", "category": "Work", "priority": "high" })
        );
        assert_eq!(
            serde_json::to_value(FilterSpec::default()).unwrap(),
            json!({ "status": "active", "category": "all", "priority": "all" })
        );
    }

    #[test]
    fn deserializes_from_tokens() {
        let spec: FilterSpec = serde_json::from_value(
            json!({ "status": "completed", "category": "Shopping", "priority": "low" }),
        )
        .unwrap();
        assert_eq!(spec.status, StatusFilter::Completed);
        assert_eq!(spec.category, CategoryFilter::Named("Shopping".to_string()));
        assert_eq!(spec.priority, PriorityFilter::Only(TaskPriority::Low));

        let all: FilterSpec =
            serde_json::from_value(json!({ "status": "all", "category": "all", "priority": "all" }))
                .unwrap();
        assert_eq!(all, FilterSpec::all());
    }

    #[test]
    fn unknown_priority_token_is_rejected() {
        let result = serde_json::from_value::<FilterSpec>(
            json!({ "status": "active", "category": "all", "priority": "urgent" }),
        );
        assert!(result.unwrap_err().to_string().contains("unknown priority filter"));
    }

    #[test]
    fn heading_and_empty_state_follow_status() {
        assert_eq!(StatusFilter::Completed.heading(), "Completed Tasks");
        assert_eq!(StatusFilter::Active.heading(), "My Tasks");
        assert_eq!(StatusFilter::All.heading(), "My Tasks");
        assert_eq!(StatusFilter::Completed.empty_state().title, "No completed tasks yet");
        assert_eq!(
            StatusFilter::Active.empty_state().description,
            "Create your first task to get started"
        );
    }
}
