//! Display implementation for lupin messages.
//!
//! Every user-facing string lives here, in one `match`, so that the
//! conversation engine and the CLI only ever pass structured [`Message`]
//! values around. Parameters are interpolated with `format!`.
//!
//! ```rust
//! use lupin::libs::messages::Message;
//!
//! let text = Message::TaskMarkedComplete("Buy milk".to_string()).to_string();
//! assert_eq!(text, "✅ Task 'Buy milk' marked as complete.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const PLAN_MENU: &str = "📝 Lupin Assistant - Plan Menu

🚀 Add Task: Type a task name or list multiple tasks, each on a new line.

🔍 List Tasks: View all your tasks, with details on their schedule and status.

📅 Schedule Tasks: Assign specific dates to your unscheduled tasks.

💡 Brainstorm Ideas: Jot down and organize your thoughts or ideas related to tasks.

Select an option from the menu to proceed!";

const CONTROL_MENU: &str = "🛠️ Lupin Assistant - Control Menu

🔎 Review Overdue Tasks: Manage and update your overdue tasks.

📆 Review Today's Tasks: Look at tasks scheduled for today and update them as needed.

✏️ Edit Tasks: Modify details of your existing tasks.

🧠 Analyze & Control: Get insights and control your tasks.

Select an option from the menu to proceed!";

const ADD_TASK_INSTRUCTIONS: &str = "🚀 Add Your Task(s)
You can add tasks in different formats:

1️⃣ Single Task: Just type the task name
Example: Buy groceries

2️⃣ Multiple Tasks: Start each task on a new line. Optionally start with [-, *, .]
Example:
Buy groceries
Call the electrician
Schedule a meeting

🔍 Choose your format and send your task(s)!";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONVERSATION: MAIN MENU ===
            Message::Greeting => "Hi! My name is Lupin Assistant. I will help you completing your goals!".to_string(),
            Message::Farewell(open) => format!(
                "Thanks for using Lupin Assistant! You have {} open task(s), we have a lot of things to do 🚀 Until next time!",
                open
            ),
            Message::SessionExpired => "⌛ Your previous session timed out, starting over.".to_string(),
            Message::ReturningToMainMenu => "⏎ Returning to the main menu...".to_string(),
            Message::ChooseFromMenu => "🤔 Please choose an option from the menu.".to_string(),
            Message::ComingSoon(feature) => format!("🚧 {} is coming soon.", feature),

            // === CONVERSATION: PLAN ===
            Message::PlanMenu => PLAN_MENU.to_string(),
            Message::AddTaskInstructions => ADD_TASK_INSTRUCTIONS.to_string(),
            Message::TasksAdded(titles) => {
                let list = titles.iter().map(|title| format!("✅ {}", title)).collect::<Vec<_>>().join("\n");
                format!("📝 You have successfully added the following task(s):\n{}", list)
            }
            Message::TasksNotAdded(reason) => format!("‼️ No tasks were added: {}. Please send your task(s) again.", reason),
            Message::NoTasksYet => "You haven't added any tasks yet. 🤔 What would you like to do next?".to_string(),
            Message::WhatNext => "🤔 What would you like to do next?".to_string(),
            Message::ScheduleInstructions(list) => format!(
                "📅 Schedule Your Tasks\n\nSelect a task number to schedule, or type 'all' to schedule each task sequentially.\nExample: 1 to schedule the first task, all to schedule all tasks.\n\nUnscheduled Tasks:\n{}",
                list
            ),
            Message::AllTasksAlreadyScheduled => "👍 All tasks are currently scheduled. 📅".to_string(),
            Message::NoUnscheduledTasks => "No unscheduled tasks to schedule.".to_string(),
            Message::InvalidSelection => "‼️ Invalid input. Please select a valid task number or type 'all'.".to_string(),
            Message::SchedulingTask(title) => format!("Scheduling task: {}", title),
            Message::PromptCustomDate(hint) => format!("📆 Please enter a date in {} format.", hint),
            Message::InvalidCustomDate(input, hint) => format!("Invalid date '{}'. Please use {} format.", input, hint),
            Message::TaskScheduled(title, date) => format!("📅 Task '{}' scheduled for {}.", title, date),
            Message::SchedulingStopped => "⏎ Scheduling stopped. Returning to the plan menu.".to_string(),
            Message::SchedulingSkipped => "⏩ Task scheduling skipped.".to_string(),
            Message::SchedulingFinished => "🙏 Thanks for scheduling your tasks! Now it's time to work! 🤓".to_string(),

            // === CONVERSATION: CONTROL ===
            Message::ControlMenu => CONTROL_MENU.to_string(),
            Message::ReviewOverdueInstructions(list) => format!(
                "🔔 Review Overdue Tasks\n\nSelect a task number to review, or type 'all' to review each task sequentially.\nExample: 1 to review the first task, all to review all tasks.\n\nOverdue Tasks:\n{}",
                list
            ),
            Message::ReviewTodayInstructions(list) => format!(
                "🔔 Review Today's Tasks\n\nSelect a task number to review, or type 'all' to review each task sequentially.\nExample: 1 to review the first task, all to review all tasks.\n\nToday's Tasks:\n{}",
                list
            ),
            Message::NoOverdueTasks => "✅ No overdue tasks.".to_string(),
            Message::NoTodayTasks => "✅ No tasks scheduled for today.".to_string(),
            Message::ReviewingTask(title) => format!("🗓️ Reviewing task: {}", title),
            Message::TaskMarkedComplete(title) => format!("✅ Task '{}' marked as complete.", title),
            Message::TaskMarkedCanceled(title) => format!("❌ Task '{}' canceled.", title),
            Message::TaskRescheduledTomorrow(title) => format!("🗓️ Task '{}' rescheduled for tomorrow.", title),
            Message::TaskRescheduledNextWeek(title) => format!("📅 Task '{}' rescheduled for next week.", title),
            Message::TaskDeletedNamed(title) => format!("🗑️ Task '{}' deleted.", title),
            Message::TaskSkipped => "⏭️ Task skipped.".to_string(),
            Message::ReviewStopped => "✋ Review stopped. Returning to the control menu.".to_string(),
            Message::AllTasksReviewed => "🍾 All tasks have been reviewed.".to_string(),
            Message::ActionFailed(reason) => format!("‼️ That didn't work: {}.", reason),
            Message::TaskVanished => "This task no longer exists, moving on.".to_string(),

            // === PRESENTER ===
            Message::NoTasksInBucket => "No tasks".to_string(),
            Message::TasksSummaryHeader => "📋 Current Tasks Summary:".to_string(),
            Message::UnscheduledHeader => "📌 Not Scheduled:".to_string(),
            Message::TodayHeader => "📅 Scheduled for Today:".to_string(),
            Message::ThisWeekHeader => "🗓️ Scheduled This Week:".to_string(),
            Message::OverdueHeader => "⏰ Overdue Tasks:".to_string(),

            // === CLI TASK MESSAGES ===
            Message::TasksCreated(count) => format!("Created {} task(s)", count),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskCanceled(title) => format!("Task '{}' canceled", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(reference) => format!("Task '{}' not found", reference),
            Message::TaskRescheduled(title, date) => format!("Task '{}' scheduled for {}", title, date),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TaskOperationFailed(reason) => format!("Task operation failed: {}", reason),

            // === CHAT MESSAGES ===
            Message::ChatStarted(user_id) => format!("Chat session started for user {}. Type /start to begin.", user_id),
            Message::ChatEnded => "Chat session ended.".to_string(),
            Message::ChatInputHint => "Type one of the options above, or any text the assistant asks for.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleAssistant => "Assistant settings".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptUserId => "User id for local conversations".to_string(),
            Message::PromptSessionTimeout => "Session idle timeout (minutes)".to_string(),
            Message::PromptDateFormat => "Custom date format (chrono syntax)".to_string(),
            Message::InvalidDateFormat(format) => format!("'{}' is not a usable date format", format),
            Message::InvalidSessionTimeout(minutes) => format!(
                "Session timeout must be between 1 and {} minutes, got {}",
                crate::libs::config::MAX_SESSION_TIMEOUT,
                minutes
            ),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database schema needs migration, it will be applied on next use".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => format!("  v{}: {} (applied: {})", version, name, applied_at),

            // === STORE MESSAGES ===
            Message::TaskRecordSkipped(id, reason) => format!("Skipping stored task {}: {}", id, reason),
            Message::TasksSaved(count) => format!("Saved {} task(s)", count),
        };

        write!(f, "{}", text)
    }
}
