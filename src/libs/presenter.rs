//! Text rendering of tasks and buckets for chat replies.

use super::categorizer::Buckets;
use super::messages::Message;
use super::task::{Task, TaskStatus};

pub fn status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✅",
        TaskStatus::Canceled => "❌",
        TaskStatus::Incomplete => "🔸",
    }
}

pub fn render_task(task: &Task) -> String {
    format!("{} {}", status_glyph(task.status()), task.title())
}

pub fn render_bucket(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return Message::NoTasksInBucket.to_string();
    }
    tasks.iter().map(|task| render_task(task)).collect::<Vec<_>>().join("\n")
}

/// `"{marker} 1. title"` lines for a selection prompt.
pub fn render_numbered(tasks: &[&Task], marker: &str) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| format!("{} {}. {}", marker, idx + 1, task.title()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_summary(buckets: &Buckets) -> String {
    [
        Message::TasksSummaryHeader.to_string(),
        String::new(),
        Message::UnscheduledHeader.to_string(),
        render_bucket(&buckets.unscheduled),
        String::new(),
        Message::TodayHeader.to_string(),
        render_bucket(&buckets.today),
        String::new(),
        Message::ThisWeekHeader.to_string(),
        render_bucket(&buckets.this_week),
        String::new(),
        Message::OverdueHeader.to_string(),
        render_bucket(&buckets.overdue),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_task_glyphs() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut task = Task::new("Ship it", now).unwrap();
        assert_eq!(render_task(&task), "🔸 Ship it");
        task.mark_completed(now).unwrap();
        assert_eq!(render_task(&task), "✅ Ship it");
    }

    #[test]
    fn test_render_empty_bucket() {
        assert_eq!(render_bucket(&[]), "No tasks");
    }
}
