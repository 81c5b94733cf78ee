//! Executes parsed commands against a [`ViewController`] and renders results.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

use taskboard_store::Task;
use taskboard_view::{DueStatus, Notice, ViewController, due_label, due_status};

use crate::command::{Command, HELP};

/// Whether the shell should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Interactive session state.
pub struct Shell {
    controller: ViewController,
    today: NaiveDate,
}

impl Shell {
    /// Wrap a loaded controller. Due dates are judged against the local date.
    pub fn new(controller: ViewController) -> Self {
        Self::with_today(controller, Local::now().date_naive())
    }

    /// Wrap a controller with a fixed "today".
    pub fn with_today(controller: ViewController, today: NaiveDate) -> Self {
        Self { controller, today }
    }

    /// The controller this shell drives.
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Run one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::List => self.render_list(out)?,
            Command::Add(draft) => {
                let notice = self.controller.create_task(draft).await;
                write_notice(out, &notice)?;
            }
            Command::Toggle(id) => match self.controller.toggle_task(&id).await {
                Some(notice) => write_notice(out, &notice)?,
                None => writeln!(out, "no task with id {id}")?,
            },
            Command::Delete(id) => {
                let notice = self.controller.delete_task(&id).await;
                write_notice(out, &notice)?;
            }
            Command::Filter { field, value } => {
                match self.controller.filter_mut().set(&field, &value) {
                    Ok(()) => writeln!(out, "filter: {}", self.controller.filter())?,
                    Err(err) => writeln!(out, "✗ {err}")?,
                }
            }
            Command::Move { active, over } => {
                match self.controller.move_visible(&active, &over).await {
                    Some(notice) => write_notice(out, &notice)?,
                    None => writeln!(out, "nothing to move")?,
                }
            }
            Command::Reorder(ids) => {
                let notice = self.controller.reorder_tasks(&ids).await;
                write_notice(out, &notice)?;
            }
            Command::Categories => {
                for category in self.controller.categories() {
                    writeln!(
                        out,
                        "{:>6}  {:<12} {}  {}",
                        category.id, category.name, category.color, category.icon
                    )?;
                }
            }
            Command::Stats => {
                let stats = self.controller.stats();
                writeln!(
                    out,
                    "{} total, {} active, {} completed ({}%)",
                    stats.total, stats.active, stats.completed, stats.percent
                )?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render_list<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.controller.title())?;
        let visible = self.controller.visible_tasks();
        if visible.is_empty() {
            let empty = self.controller.empty_state();
            writeln!(out, "  {}", empty.title)?;
            writeln!(out, "  {}", empty.description)?;
            return Ok(());
        }
        for task in &visible {
            writeln!(out, "{}", self.render_task(task))?;
        }
        Ok(())
    }

    fn render_task(&self, task: &Task) -> String {
        let mark = if task.completed { "x" } else { " " };
        let mut line = format!("[{mark}] {:>6}  {}  ({})", task.id, task.title, task.priority);
        if let Some(category) = self.controller.category_of(task) {
            line.push_str(&format!(" [{}]", category.name));
        } else if !task.category.is_empty() {
            line.push_str(&format!(" [{}?]", task.category));
        }
        if let (Some(due), Some(status)) = (task.due_date, due_status(task, self.today)) {
            let label = due_label(due, self.today);
            match status {
                DueStatus::Overdue => line.push_str(&format!(" {label} OVERDUE")),
                DueStatus::DueToday | DueStatus::Scheduled => line.push_str(&format!(" {label}")),
            }
        }
        line
    }
}

fn write_notice<W: Write>(out: &mut W, notice: &Notice) -> Result<()> {
    writeln!(out, "{notice}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use taskboard_store::{CategoryStore, Latency, TaskStore};

    use crate::command::parse;

    async fn shell() -> Shell {
        let tasks = TaskStore::seeded(Latency::none()).unwrap();
        let categories = CategoryStore::seeded(Latency::none()).unwrap();
        let mut controller = ViewController::new(Arc::new(tasks), Arc::new(categories));
        assert!(controller.load().await.is_none());
        Shell::with_today(controller, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    async fn run(shell: &mut Shell, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let command = parse(line).unwrap().unwrap();
        let flow = shell.execute(command, &mut out).await.unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn list_marks_due_and_overdue() {
        let mut shell = shell().await;
        let (flow, out) = run(&mut shell, "list").await;
        assert_eq!(flow, Flow::Continue);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "My Tasks");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Due Today"), "{}", lines[1]);
        assert!(lines[2].contains("Mar 10 OVERDUE"), "{}", lines[2]);
        assert!(lines[4].contains("Apr 1"), "{}", lines[4]);
    }

    #[tokio::test]
    async fn add_then_stats() {
        let mut shell = shell().await;
        let (_, out) = run(&mut shell, "add Water plants | category=Personal").await;
        assert_eq!(out.trim(), "✓ Task created successfully!");
        let (_, out) = run(&mut shell, "stats").await;
        assert_eq!(out.trim(), "7 total, 5 active, 2 completed (29%)");
    }

    #[tokio::test]
    async fn blank_add_reports_error() {
        let mut shell = shell().await;
        let (_, out) = run(&mut shell, "add   ").await;
        assert_eq!(out.trim(), "✗ Please enter a task title");
    }

    #[tokio::test]
    async fn filter_errors_are_printed() {
        let mut shell = shell().await;
        let (_, out) = run(&mut shell, "filter status done").await;
        assert!(out.contains("unknown status filter"));
        let (_, out) = run(&mut shell, "filter status completed").await;
        assert_eq!(out.trim(), "filter: status=completed category=all priority=all");
        let (_, out) = run(&mut shell, "list").await;
        assert!(out.starts_with("Completed Tasks"));
    }

    #[tokio::test]
    async fn empty_list_shows_placeholder() {
        let mut shell = shell().await;
        let _ = run(&mut shell, "filter category Travel").await;
        let (_, out) = run(&mut shell, "list").await;
        assert!(out.contains("No tasks found"));
    }

    #[tokio::test]
    async fn toggle_unknown_and_quit() {
        let mut shell = shell().await;
        let (_, out) = run(&mut shell, "toggle 42").await;
        assert_eq!(out.trim(), "no task with id 42");
        let (flow, _) = run(&mut shell, "quit").await;
        assert_eq!(flow, Flow::Quit);
    }

    #[tokio::test]
    async fn move_reorders_visible() {
        let mut shell = shell().await;
        let (_, out) = run(&mut shell, "move 6 1").await;
        assert_eq!(out.trim(), "✓ Tasks reordered successfully!");
        let first = shell.controller().visible_tasks()[0].id.to_string();
        assert_eq!(first, "6");
    }
}
