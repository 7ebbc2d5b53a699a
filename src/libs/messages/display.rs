//! Display implementation for genz-todo messages.
//!
//! All user-facing text lives here, so the wording of every confirmation,
//! empty state and usage line can be read (and changed) in one place.

use super::types::Message;
use crate::libs::data_storage::APP_NAME;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TodosStartingFresh => "No existing todos found. Starting fresh! 🌟".to_string(),
            Message::TodosLoadFailed(err) => format!("Error loading todos: {}", err),
            Message::TodosSaveFailed(err) => format!("Error saving todos: {}", err),
            Message::TodosLoaded(count, path) => format!("Loaded {} todos from {}", count, path),
            Message::TodosHeader => "📋 Your Todos:".to_string(),
            Message::TodosEmpty => "🎉 No todos yet! You're all caught up!".to_string(),
            Message::TaskAdded(description) => format!("Added: {}", description),
            Message::TaskCompleted(description) => format!("🌟 Completed: {}", description),
            Message::TaskDeleted(description) => format!("🗑️ Deleted: {}", description),
            Message::TaskNotFound => "🤔 Todo not found!".to_string(),

            // === STREAK MESSAGES ===
            Message::StreakStartingNew => "Starting new streak! 🔥".to_string(),
            Message::StreakLoadFailed(err) => format!("Error loading streak: {}", err),
            Message::StreakSaveFailed(err) => format!("Error saving streak: {}", err),
            Message::StreakLoaded(count, path) => format!("Loaded streak of {} from {}", count, path),
            Message::StreakSameDay(count) => format!("Already completed something today, streak stays at {}", count),
            Message::CurrentStreak(count) => format!("🔥 Current Streak: {} days", count),

            // === USAGE MESSAGES ===
            Message::Usage => format!("Usage: {} [add|list|complete|delete] [args]", APP_NAME),
            Message::CommandUsage(command) => format!("Usage: {} {}", APP_NAME, command),
            Message::UnknownCommand => "Unknown command. Use 'add', 'list', 'complete', or 'delete'.".to_string(),
        };
        write!(f, "{}", s)
    }
}
