pub mod add;
pub mod complete;
pub mod delete;
pub mod list;

use crate::libs::data_storage::DataStorage;
use crate::libs::error::TodoError;
use crate::libs::messages::Message;
use crate::libs::streak::StreakTracker;
use crate::libs::task::TaskStore;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as completed and update the streak")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(name = "genz-todo", author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding todos.json and streak.json (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::menu_from(std::env::args_os())
    }

    /// Parses `args` (program name first) and runs exactly one command.
    ///
    /// Usage mistakes are answered with a usage line and `Ok`. The only error
    /// that comes back is [`TodoError::InvalidId`].
    pub fn menu_from<I, T>(args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => cli.run(),
            Err(e) => Self::parse_failed(e),
        }
    }

    fn parse_failed(e: clap::Error) -> Result<()> {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.print()?,
            _ => {
                msg_debug!(e.to_string());
                msg_print!(Message::UnknownCommand);
            }
        }
        Ok(())
    }

    fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            msg_print!(Message::Usage);
            return Ok(());
        };

        let storage = self.data_dir.map(DataStorage::at).unwrap_or_default();
        msg_debug!(format!("Using data directory {}", storage.base_path().display()));
        let mut tasks = TaskStore::load(&storage);
        let mut streak = StreakTracker::load(&storage);

        match command {
            Commands::Add(args) => add::cmd(args, &mut tasks),
            Commands::List(_) => list::cmd(&tasks),
            Commands::Complete(args) => complete::cmd(args, &mut tasks, &mut streak),
            Commands::Delete(args) => delete::cmd(args, &mut tasks),
        }
    }
}

/// Parses a task id argument. Text that is not an integer is fatal for the
/// invocation; an integer no task can carry (negative, too large) is `None`
/// and ends up as "not found".
pub fn parse_id(raw: &str) -> Result<Option<u32>> {
    let id = raw.trim().parse::<i64>().map_err(|_| TodoError::InvalidId(raw.to_string()))?;
    Ok(u32::try_from(id).ok())
}
