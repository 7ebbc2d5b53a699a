//! Daily completion streak.
//!
//! The streak moves at most once per calendar day, on the first completion of
//! that day. Whether it grows or starts over is decided by the wall-clock time
//! since the previous counted completion, not by how many calendar days lie in
//! between:
//!
//! - same local date as `last_check` → unchanged
//! - new date, less than 48 hours elapsed → `count + 1`
//! - new date, 48 hours or more elapsed → back to `1`
//!
//! So 23:00 on Monday followed by 01:00 on Wednesday (26 hours) still extends
//! the streak even though Tuesday was skipped.

use super::data_storage::{DataStorage, STREAK_FILE_NAME};
use super::error::Result;
use super::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_print};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

/// Elapsed time from the last counted completion that breaks the streak.
pub const STREAK_BREAK_HOURS: i64 = 48;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub count: u32,
    /// Defaults to the Unix epoch, far enough back that the first completion
    /// always starts a streak of 1.
    pub last_check: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already counted today.
    Unchanged,
    Extended(u32),
    Restarted,
}

impl Streak {
    /// Applies a completion at `now`. Leaves `self` untouched on `Unchanged`.
    pub fn advance(&mut self, now: DateTime<Local>) -> StreakChange {
        if now.date_naive() == self.last_check.date_naive() {
            return StreakChange::Unchanged;
        }

        let change = if now.signed_duration_since(self.last_check) < Duration::hours(STREAK_BREAK_HOURS) {
            self.count = self.count.saturating_add(1);
            StreakChange::Extended(self.count)
        } else {
            self.count = 1;
            StreakChange::Restarted
        };
        self.last_check = now;

        change
    }
}

/// The streak singleton backed by `streak.json`.
#[derive(Debug)]
pub struct StreakTracker {
    streak: Streak,
    storage: DataStorage,
}

impl StreakTracker {
    /// Loads the streak, starting from zero when the file is missing or unreadable.
    pub fn load(storage: &DataStorage) -> Self {
        let file_path = storage.path(STREAK_FILE_NAME);
        let streak = match Self::read(&file_path) {
            Ok(Some(streak)) => {
                msg_debug!(Message::StreakLoaded(streak.count, file_path.display().to_string()));
                streak
            }
            Ok(None) => {
                msg_info!(Message::StreakStartingNew);
                Streak::default()
            }
            Err(e) => {
                msg_error!(Message::StreakLoadFailed(e.to_string()));
                Streak::default()
            }
        };

        Self::with_streak(storage, streak)
    }

    pub fn with_streak(storage: &DataStorage, streak: Streak) -> Self {
        Self {
            streak,
            storage: storage.clone(),
        }
    }

    fn read(file_path: &Path) -> Result<Option<Streak>> {
        let data = match fs::read_to_string(file_path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    pub fn save(&self) -> Result<()> {
        let file_path = self.storage.get_path(STREAK_FILE_NAME)?;
        let file = File::create(file_path)?;
        serde_json::to_writer_pretty(&file, &self.streak)?;
        Ok(())
    }

    pub fn streak(&self) -> &Streak {
        &self.streak
    }

    /// Counts a completion at `now`, persisting and announcing the streak
    /// whenever it moved. A failed write is reported and otherwise ignored.
    pub fn update(&mut self, now: DateTime<Local>) -> StreakChange {
        let change = self.streak.advance(now);
        if change == StreakChange::Unchanged {
            msg_debug!(Message::StreakSameDay(self.streak.count));
            return change;
        }

        if let Err(e) = self.save() {
            msg_error!(Message::StreakSaveFailed(e.to_string()));
        }
        msg_print!(Message::CurrentStreak(self.streak.count));

        change
    }
}
