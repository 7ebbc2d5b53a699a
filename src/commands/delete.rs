use super::parse_id;
use crate::libs::messages::Message;
use crate::libs::task::TaskStore;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(allow_hyphen_values = true)]
    id: Option<String>,

    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

pub fn cmd(delete_args: DeleteArgs, tasks: &mut TaskStore) -> Result<()> {
    let Some(raw_id) = delete_args.id else {
        msg_print!(Message::CommandUsage("delete <id>".to_string()));
        return Ok(());
    };
    let id = parse_id(&raw_id)?;

    match id.and_then(|id| tasks.delete(id)) {
        Some(task) => msg_print!(Message::TaskDeleted(task.description)),
        None => msg_print!(Message::TaskNotFound),
    }

    Ok(())
}
