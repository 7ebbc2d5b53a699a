use crate::libs::messages::Message;
use crate::libs::task::TaskStore;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; several words are joined with spaces
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    description: Vec<String>,
}

pub fn cmd(add_args: AddArgs, tasks: &mut TaskStore) -> Result<()> {
    if add_args.description.is_empty() {
        msg_print!(Message::CommandUsage("add <description>".to_string()));
        return Ok(());
    }

    let description = add_args.description.join(" ");
    let task = tasks.add(&description, Local::now());
    msg_success!(Message::TaskAdded(task.description.clone()));

    Ok(())
}
