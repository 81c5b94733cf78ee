//! Completion counters for the progress bar.

use serde::Serialize;

use taskboard_store::Task;

/// Counts over the full task list, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressStats {
    /// Every task.
    pub total: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// `completed / total` as a whole percentage, half rounded up. 0 when empty.
    pub percent: u8,
}

impl ProgressStats {
    /// Count `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            active: total - completed,
            completed,
            percent: percent(completed, total),
        }
    }
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    // part <= whole, so the quotient is at most 100.
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded).unwrap_or(100)
}
