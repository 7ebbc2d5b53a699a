//! Core library modules for genz-todo.
//!
//! - **Storage**: where the data files live ([`data_storage`]) and the error type ([`error`])
//! - **Task list**: the persisted, ordered list of tasks ([`task`])
//! - **Streak**: the daily completion counter ([`streak`])
//! - **Output**: typed messages, printing macros and the task list view
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use genz_todo::libs::data_storage::DataStorage;
//! use genz_todo::libs::streak::StreakTracker;
//! use genz_todo::libs::task::TaskStore;
//!
//! let storage = DataStorage::new();
//! let mut tasks = TaskStore::load(&storage);
//! let id = tasks.add("buy milk", Local::now()).id;
//! if tasks.complete(id).is_some() {
//!     StreakTracker::load(&storage).update(Local::now());
//! }
//! ```

pub mod data_storage;
pub mod error;
pub mod messages;
pub mod streak;
pub mod task;
pub mod view;
