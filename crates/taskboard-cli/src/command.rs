//! Shell command grammar.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use taskboard_store::TaskId;
use taskboard_view::TaskDraft;

/// Text printed by `help`.
pub const HELP: &str = "\
commands:
  list                                   show the visible tasks
  add <title> [| key=value]...           create a task (keys: description, category, priority, due)
  toggle <id>                            complete or reactivate a task
  delete <id>                            delete a task
  filter <status|category|priority> <v>  change one filter selector
  move <id> <over-id>                    drag a visible task onto another
  reorder <id>...                        put these ids first, keep the rest in order
  categories                             list categories
  stats                                  show progress
  help                                   this text
  quit                                   leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the visible list.
    List,
    /// Create a task.
    Add(TaskDraft),
    /// Flip completion.
    Toggle(TaskId),
    /// Remove a task.
    Delete(TaskId),
    /// Change one filter selector.
    Filter {
        /// `status`, `category`, or `priority`.
        field: String,
        /// Selector token.
        value: String,
    },
    /// Drag `active` onto `over`.
    Move {
        /// Dragged task.
        active: TaskId,
        /// Drop target.
        over: TaskId,
    },
    /// Explicit partial order.
    Reorder(Vec<TaskId>),
    /// List categories.
    Categories,
    /// Show progress.
    Stats,
    /// Show help.
    Help,
    /// Exit the shell.
    Quit,
}

/// Parse one line. `Ok(None)` for blank input.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match verb {
        "list" | "ls" => Command::List,
        "add" => Command::Add(parse_draft(rest)?),
        "toggle" => Command::Toggle(single_id(&args, "toggle <id>")?),
        "delete" | "rm" => Command::Delete(single_id(&args, "delete <id>")?),
        "filter" => match args.as_slice() {
            [field, value @ ..] if !value.is_empty() => Command::Filter {
                field: (*field).to_string(),
                value: value.join(" "),
            },
            _ => bail!("usage: filter <status|category|priority> <value>"),
        },
        "move" => match args.as_slice() {
            [active, over] => Command::Move {
                active: TaskId::from(*active),
                over: TaskId::from(*over),
            },
            _ => bail!("usage: move <id> <over-id>"),
        },
        "reorder" => {
            if args.is_empty() {
                bail!("usage: reorder <id>...");
            }
            Command::Reorder(args.iter().map(|s| TaskId::from(*s)).collect())
        }
        "categories" => Command::Categories,
        "stats" => Command::Stats,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command: {other} (try `help`)"),
    };
    Ok(Some(command))
}

fn single_id(args: &[&str], usage: &str) -> Result<TaskId> {
    match args {
        [id] => Ok(TaskId::from(*id)),
        _ => bail!("usage: {usage}"),
    }
}

/// `<title> [| key=value]...`
fn parse_draft(rest: &str) -> Result<TaskDraft> {
    let mut segments = rest.split('|');
    let mut draft = TaskDraft::titled(segments.next().unwrap_or_default().trim());

    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment
            .split_once('=')
            .with_context(|| format!("expected key=value, got `{segment}`"))?;
        let value = value.trim();
        match key.trim() {
            "description" | "desc" => draft.description = value.to_string(),
            "category" | "cat" => draft.category = value.to_string(),
            "priority" => draft.priority = value.parse()?,
            "due" => {
                draft.due_date = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse::<NaiveDate>()
                            .with_context(|| format!("invalid due date `{value}`, expected YYYY-MM-DD"))?,
                    )
                };
            }
            other => bail!("unknown task field: {other}"),
        }
    }
    Ok(draft)
}
