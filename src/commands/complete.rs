use super::parse_id;
use crate::libs::messages::Message;
use crate::libs::streak::StreakTracker;
use crate::libs::task::TaskStore;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Id of the task to complete
    #[arg(allow_hyphen_values = true)]
    id: Option<String>,

    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

pub fn cmd(complete_args: CompleteArgs, tasks: &mut TaskStore, streak: &mut StreakTracker) -> Result<()> {
    let Some(raw_id) = complete_args.id else {
        msg_print!(Message::CommandUsage("complete <id>".to_string()));
        return Ok(());
    };
    let id = parse_id(&raw_id)?;

    match id.and_then(|id| tasks.complete(id)) {
        Some(task) => {
            msg_print!(Message::TaskCompleted(task.description));
            streak.update(Local::now());
        }
        None => msg_print!(Message::TaskNotFound),
    }

    Ok(())
}
