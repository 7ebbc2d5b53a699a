#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use genz_todo::libs::data_storage::{DataStorage, STREAK_FILE_NAME};
    use genz_todo::libs::streak::{Streak, StreakChange, StreakTracker};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Mid-June dates stay clear of daylight saving switches in any zone the
    // tests might run in, so wall-clock hours equal elapsed hours.
    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, day, hour, minute, 0).unwrap()
    }

    struct StreakTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for StreakTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path());
            StreakTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_default_streak() {
        let streak = Streak::default();
        assert_eq!(streak.count, 0);
        assert_eq!(streak.last_check.timestamp(), 0);
    }

    #[test]
    fn test_first_completion_starts_streak_at_one() {
        let mut streak = Streak::default();
        assert_eq!(streak.advance(at(10, 12, 0)), StreakChange::Restarted);
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_check, at(10, 12, 0));
    }

    #[test]
    fn test_same_day_completions_count_once() {
        let mut streak = Streak::default();
        streak.advance(at(10, 8, 0));

        assert_eq!(streak.advance(at(10, 13, 0)), StreakChange::Unchanged);
        assert_eq!(streak.advance(at(10, 23, 59)), StreakChange::Unchanged);
        assert_eq!(streak.count, 1);
        // last_check keeps the first completion of the day
        assert_eq!(streak.last_check, at(10, 8, 0));
    }

    #[test]
    fn test_next_day_within_48_hours_extends() {
        let mut streak = Streak {
            count: 4,
            last_check: at(10, 20, 0),
        };

        assert_eq!(streak.advance(at(11, 9, 0)), StreakChange::Extended(5));
        assert_eq!(streak.count, 5);
        assert_eq!(streak.last_check, at(11, 9, 0));
    }

    #[test]
    fn test_gap_of_48_hours_or_more_restarts() {
        let mut streak = Streak {
            count: 9,
            last_check: at(10, 12, 0),
        };

        assert_eq!(streak.advance(at(12, 12, 0)), StreakChange::Restarted);
        assert_eq!(streak.count, 1);
    }

    #[test]
    fn test_just_under_48_hours_extends() {
        let mut streak = Streak {
            count: 2,
            last_check: at(10, 12, 0),
        };

        assert_eq!(streak.advance(at(12, 11, 59)), StreakChange::Extended(3));
    }

    /// A skipped calendar day does not break the streak while less than 48
    /// hours have elapsed: 23:00 -> 01:00 two days later is 26 hours.
    #[test]
    fn test_skipped_day_under_48_hours_still_extends() {
        let mut streak = Streak {
            count: 3,
            last_check: at(10, 23, 0),
        };

        assert_eq!(streak.advance(at(12, 1, 0)), StreakChange::Extended(4));
    }

    #[test_context(StreakTestContext)]
    #[test]
    fn test_load_without_file_is_default(ctx: &mut StreakTestContext) {
        let tracker = StreakTracker::load(&ctx.storage);
        assert_eq!(tracker.streak(), &Streak::default());
        assert!(!ctx.storage.path(STREAK_FILE_NAME).exists());
    }

    #[test_context(StreakTestContext)]
    #[test]
    fn test_update_persists_new_count(ctx: &mut StreakTestContext) {
        let mut tracker = StreakTracker::load(&ctx.storage);
        assert_eq!(tracker.update(at(10, 12, 0)), StreakChange::Restarted);
        assert_eq!(tracker.update(at(11, 12, 0)), StreakChange::Extended(2));

        let reloaded = StreakTracker::load(&ctx.storage);
        assert_eq!(reloaded.streak().count, 2);
        assert_eq!(reloaded.streak().last_check, at(11, 12, 0));
    }

    #[test_context(StreakTestContext)]
    #[test]
    fn test_same_day_update_does_not_write(ctx: &mut StreakTestContext) {
        let mut tracker = StreakTracker::load(&ctx.storage);
        tracker.update(at(10, 12, 0));
        let file_path = ctx.storage.path(STREAK_FILE_NAME);
        let before = fs::read_to_string(&file_path).unwrap();

        assert_eq!(tracker.update(at(10, 18, 0)), StreakChange::Unchanged);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), before);
    }

    #[test_context(StreakTestContext)]
    #[test]
    fn test_corrupt_file_loads_default(ctx: &mut StreakTestContext) {
        fs::write(ctx.storage.path(STREAK_FILE_NAME), "[]").unwrap();

        let tracker = StreakTracker::load(&ctx.storage);
        assert_eq!(tracker.streak(), &Streak::default());
    }

    #[test_context(StreakTestContext)]
    #[test]
    fn test_loads_file_with_zero_time(ctx: &mut StreakTestContext) {
        let json = r#"{"count":0,"last_check":"0001-01-01T00:00:00Z"}"#;
        fs::write(ctx.storage.path(STREAK_FILE_NAME), json).unwrap();

        let mut tracker = StreakTracker::load(&ctx.storage);
        assert_eq!(tracker.streak().count, 0);
        assert_eq!(tracker.update(at(10, 12, 0)), StreakChange::Restarted);
        assert_eq!(tracker.streak().count, 1);
    }

    #[test]
    fn test_count_saturates_at_max() {
        let mut streak = Streak {
            count: u32::MAX,
            last_check: at(10, 20, 0),
        };

        assert_eq!(streak.advance(at(11, 9, 0)), StreakChange::Extended(u32::MAX));
    }

    #[test]
    fn test_update_survives_write_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let storage = DataStorage::at(blocker.join("data"));

        let mut tracker = StreakTracker::load(&storage);
        assert_eq!(tracker.update(at(10, 12, 0)), StreakChange::Restarted);
        assert_eq!(tracker.update(at(11, 12, 0)), StreakChange::Extended(2));
        assert_eq!(tracker.streak().count, 2);
        assert_eq!(tracker.streak().last_check, at(11, 12, 0));
        assert!(!storage.path(STREAK_FILE_NAME).exists());
    }
}
