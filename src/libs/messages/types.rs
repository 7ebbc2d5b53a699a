#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TodosStartingFresh,
    TodosLoadFailed(String), // error
    TodosSaveFailed(String), // error
    TodosLoaded(usize, String), // count, path
    TodosHeader,
    TodosEmpty,
    TaskAdded(String),     // description
    TaskCompleted(String), // description
    TaskDeleted(String),   // description
    TaskNotFound,

    // === STREAK MESSAGES ===
    StreakStartingNew,
    StreakLoadFailed(String), // error
    StreakSaveFailed(String), // error
    StreakLoaded(u32, String), // count, path
    StreakSameDay(u32),        // count
    CurrentStreak(u32),

    // === USAGE MESSAGES ===
    Usage,
    CommandUsage(String), // "add <description>", "complete <id>", ...
    UnknownCommand,
}
