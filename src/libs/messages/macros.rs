//! Convenient macros for application messaging and logging.
//!
//! Every macro takes a [`Message`](crate::libs::messages::Message) (or anything
//! implementing `Display`) and routes it according to the debug mode:
//!
//! - **Normal mode**: plain `println!`, or `eprintln!` for errors
//! - **Debug mode**: `tracing` events, picked up by the subscriber `main` installs
//!
//! ```text
//! msg_info!(..) ──▶ GENZ_TODO_DEBUG or RUST_LOG set? ──▶ tracing::info! | println!
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use genz_todo::{msg_error, msg_print, msg_success};
//! use genz_todo::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded("buy milk".to_string()));
//! msg_print!(Message::TodosEmpty);
//! msg_error!(Message::TodosSaveFailed("disk full".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching.
///
/// Debug mode is on when either `GENZ_TODO_DEBUG` or `RUST_LOG` is set. The
/// environment is read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("GENZ_TODO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
///
/// ```rust
/// # use genz_todo::{msg_print, libs::messages::Message};
/// msg_print!(Message::TodosHeader);
/// // Output: "📋 Your Todos:"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```text
/// ✅ Added: buy milk
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// Errors go to stderr in normal mode and to `tracing::error!` in debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Suppressed entirely in normal mode.
///
/// ```rust
/// # use genz_todo::msg_debug;
/// let task_id = 42;
/// msg_debug!(format!("Completing task {}", task_id));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
