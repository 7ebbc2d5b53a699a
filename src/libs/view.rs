use super::messages::Message;
use super::task::Task;
use crate::msg_print;

/// Creation date format used in task lines, e.g. `Oct 16`.
pub const CREATED_AT_FORMAT: &str = "%b %-d";

pub struct View {}

impl View {
    /// One task as `1. [❌] buy milk (Oct 16)`.
    pub fn task_line(task: &Task) -> String {
        let status = if task.completed { "✅" } else { "❌" };
        format!("{}. [{}] {} ({})", task.id, status, task.description, task.created_at.format(CREATED_AT_FORMAT))
    }

    /// Lines printed by `list`: a header and one line per task, or the empty state.
    pub fn render<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<String> {
        let mut lines: Vec<String> = tasks.into_iter().map(Self::task_line).collect();
        if lines.is_empty() {
            return vec![Message::TodosEmpty.to_string()];
        }

        lines.insert(0, Message::TodosHeader.to_string());
        lines
    }

    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        for line in Self::render(tasks) {
            msg_print!(line);
        }
    }
}
