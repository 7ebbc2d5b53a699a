use crate::libs::task::TaskStore;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

pub fn cmd(tasks: &TaskStore) -> Result<()> {
    View::tasks(tasks.tasks());

    Ok(())
}
