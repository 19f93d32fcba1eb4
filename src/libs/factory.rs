//! Builds tasks from free text typed by the user.
//!
//! Three shapes are understood: a single title, a multi-line batch of
//! titles (optionally bulleted), and a detailed form with one field per line.

use super::error::TaskError;
use super::schedule::{parse_date, ISO_DATE_FORMAT};
use super::task::Task;
use chrono::NaiveDateTime;

/// Characters that may lead a line in a batch of tasks.
const BULLET_CHARS: [char; 3] = ['-', '*', '.'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Single,
    Batch,
}

impl InputFormat {
    /// Any bullet character or newline makes the input a batch.
    pub fn detect(input: &str) -> Self {
        if input.contains(|c: char| BULLET_CHARS.contains(&c) || c == '\n') {
            InputFormat::Batch
        } else {
            InputFormat::Single
        }
    }
}

pub fn create_simple_task(name: &str, now: NaiveDateTime) -> Result<Task, TaskError> {
    Task::new(name, now)
}

pub fn create_multiple_tasks(text: &str, now: NaiveDateTime) -> Result<Vec<Task>, TaskError> {
    let tasks = text
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(|line| create_simple_task(line, now))
        .collect::<Result<Vec<_>, _>>()?;

    if tasks.is_empty() {
        return Err(TaskError::EmptyBatch);
    }
    Ok(tasks)
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| BULLET_CHARS.contains(&c) || c.is_whitespace()).trim_end()
}

/// Line 0 title, 1 description, 2 comma separated tags, 3 date as
/// `YYYY-MM-DD`, 4 priority. Trailing lines may be omitted.
pub fn create_full_task(text: &str, now: NaiveDateTime) -> Result<Task, TaskError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let field = |index: usize| lines.get(index).copied().unwrap_or("");

    let scheduled = match field(3) {
        "" => None,
        date => Some(parse_date(date, ISO_DATE_FORMAT)?),
    };

    let mut task = Task::new(field(0), now)?.with_schedule(scheduled);
    task.description = field(1).to_string();
    task.tags = field(2)
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    task.priority = Some(field(4)).filter(|priority| !priority.is_empty()).map(str::to_string);

    Ok(task)
}

/// Picks single or batch creation for text typed in the add-task step.
pub fn create_from_input(text: &str, now: NaiveDateTime) -> Result<Vec<Task>, TaskError> {
    let text = text.trim();
    match InputFormat::detect(text) {
        InputFormat::Single => Ok(vec![create_simple_task(text, now)?]),
        InputFormat::Batch => create_multiple_tasks(text, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::ErrorKind;
    use crate::libs::task::TaskStatus;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(Task::title).collect()
    }

    #[test]
    fn test_simple_task() {
        let task = create_simple_task("\t Call the electrician  ", now()).unwrap();
        assert_eq!(task.title(), "Call the electrician");
        assert_eq!(task.status(), TaskStatus::Incomplete);
        assert_eq!(task.date_created(), now());
        assert!(create_simple_task(" ", now()).is_err());
    }

    #[test]
    fn test_multiple_tasks_strip_bullets_and_blanks() {
        let tasks = create_multiple_tasks("- A\n- B\n\nC", now()).unwrap();
        assert_eq!(titles(&tasks), vec!["A", "B", "C"]);

        let tasks = create_multiple_tasks("* Buy groceries\n. Call mom\n  -- Send e-mail  ", now()).unwrap();
        assert_eq!(titles(&tasks), vec!["Buy groceries", "Call mom", "Send e-mail"]);
    }

    #[test]
    fn test_multiple_tasks_have_distinct_ids() {
        let tasks = create_multiple_tasks("A\nB", now()).unwrap();
        assert_ne!(tasks[0].id(), tasks[1].id());
    }

    #[test]
    fn test_empty_batch_is_reported() {
        let err = create_multiple_tasks("-\n * \n\n", now()).unwrap_err();
        assert_eq!(err, TaskError::EmptyBatch);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_full_task_all_fields() {
        let task = create_full_task("Write report\nQ2 numbers\nwork, urgent ,\n2024-06-14\nhigh", now()).unwrap();
        assert_eq!(task.title(), "Write report");
        assert_eq!(task.description, "Q2 numbers");
        assert_eq!(task.tags.iter().map(String::as_str).collect::<Vec<_>>(), vec!["urgent", "work"]);
        assert_eq!(task.date_scheduled().unwrap().date(), NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
        assert!(task.date_history().is_empty());
        assert_eq!(task.priority.as_deref(), Some("high"));
    }

    #[test]
    fn test_full_task_missing_lines_default() {
        let task = create_full_task("Just a title", now()).unwrap();
        assert_eq!(task.description, "");
        assert!(task.tags.is_empty());
        assert!(task.date_scheduled().is_none());
        assert!(task.priority.is_none());
    }

    #[test]
    fn test_full_task_bad_date() {
        let err = create_full_task("Title\n\n\n14/06/2024", now()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_full_task_requires_title() {
        let err = create_full_task("\nDescription only", now()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(InputFormat::detect("Buy milk"), InputFormat::Single);
        assert_eq!(InputFormat::detect("a\nb"), InputFormat::Batch);
        assert_eq!(InputFormat::detect("- a"), InputFormat::Batch);

        let tasks = create_from_input("  Buy milk  ", now()).unwrap();
        assert_eq!(titles(&tasks), vec!["Buy milk"]);
        let tasks = create_from_input("Buy milk.\nCall mom", now()).unwrap();
        assert_eq!(titles(&tasks), vec!["Buy milk.", "Call mom"]);
    }
}
