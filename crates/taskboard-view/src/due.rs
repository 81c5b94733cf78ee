//! Due-date classification and labels.
//!
//! Everything here takes `today` explicitly so callers decide which clock
//! and timezone count as "now".

use chrono::NaiveDate;
use serde::Serialize;

use taskboard_store::Task;

/// Where a task's due date sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DueStatus {
    /// Past due and still open.
    Overdue,
    /// Due today.
    DueToday,
    /// Due later, or past due but already completed.
    Scheduled,
}

/// Classify `task` against `today`. `None` when the task has no due date.
///
/// A completed task is never overdue.
#[must_use]
pub fn due_status(task: &Task, today: NaiveDate) -> Option<DueStatus> {
    let due = task.due_date?;
    Some(if due == today {
        DueStatus::DueToday
    } else if due < today && !task.completed {
        DueStatus::Overdue
    } else {
        DueStatus::Scheduled
    })
}

/// Whether `task` is overdue as of `today`.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    due_status(task, today) == Some(DueStatus::Overdue)
}

/// `"Due Today"` for today, otherwise a short month and day such as `"Mar 5"`.
#[must_use]
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        "Due Today".to_string()
    } else {
        due.format("%b %-d").to_string()
    }
}
