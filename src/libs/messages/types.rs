#[derive(Debug, Clone)]
pub enum Message {
    // === CONVERSATION: MAIN MENU ===
    Greeting,
    Farewell(usize), // open tasks
    SessionExpired,
    ReturningToMainMenu,
    ChooseFromMenu,
    ComingSoon(String), // feature name

    // === CONVERSATION: PLAN ===
    PlanMenu,
    AddTaskInstructions,
    TasksAdded(Vec<String>),
    TasksNotAdded(String), // reason
    NoTasksYet,
    WhatNext,
    ScheduleInstructions(String), // numbered list
    AllTasksAlreadyScheduled,
    NoUnscheduledTasks,
    InvalidSelection,
    SchedulingTask(String),
    PromptCustomDate(String), // format hint
    InvalidCustomDate(String, String), // input, format hint
    TaskScheduled(String, String),     // title, date
    SchedulingStopped,
    SchedulingSkipped,
    SchedulingFinished,

    // === CONVERSATION: CONTROL ===
    ControlMenu,
    ReviewOverdueInstructions(String), // numbered list
    ReviewTodayInstructions(String),   // numbered list
    NoOverdueTasks,
    NoTodayTasks,
    ReviewingTask(String),
    TaskMarkedComplete(String),
    TaskMarkedCanceled(String),
    TaskRescheduledTomorrow(String),
    TaskRescheduledNextWeek(String),
    TaskDeletedNamed(String),
    TaskSkipped,
    ReviewStopped,
    AllTasksReviewed,
    ActionFailed(String), // reason
    TaskVanished,

    // === PRESENTER ===
    NoTasksInBucket,
    TasksSummaryHeader,
    UnscheduledHeader,
    TodayHeader,
    ThisWeekHeader,
    OverdueHeader,

    // === CLI TASK MESSAGES ===
    TasksCreated(usize),
    TaskCompleted(String),
    TaskCanceled(String),
    TaskDeleted(String),
    TaskNotFound(String),
    TaskRescheduled(String, String), // title, date
    TasksHeader,
    NoTasksFound,
    TaskOperationFailed(String),

    // === CHAT MESSAGES ===
    ChatStarted(i64),
    ChatEnded,
    ChatInputHint,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleAssistant,
    ConfigParseError,
    PromptUserId,
    PromptSessionTimeout,
    PromptDateFormat,
    InvalidDateFormat(String),
    InvalidSessionTimeout(u64),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String),

    // === STORE MESSAGES ===
    TaskRecordSkipped(String, String), // id, reason
    TasksSaved(usize),
}
