//! # genz-todo
//!
//! A small command-line task list that keeps a daily completion streak.
//!
//! ## Features
//!
//! - **Task List**: add, list, complete and delete short tasks, stored in `todos.json`
//! - **Streak**: a counter of consecutive days with at least one completion, stored in `streak.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use genz_todo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
