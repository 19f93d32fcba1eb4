//! The task entity and the per-user task collection.
//!
//! A [`Task`] is a fixed-shape record. Its identity, creation time, status,
//! completion time and schedule history are private so that the invariants
//! below can only be changed through the mutation methods on `Task`:
//!
//! - `date_completed` is set if and only if the status is `Completed`
//! - `date_history` only grows, recording every previous `date_scheduled`
//! - `Completed` and `Canceled` are terminal
//!
//! [`TaskRecord`] is the flat persisted form. Serialization of a `Task` goes
//! through it, and deserialization validates it.

use super::error::TaskError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the abbreviated id shown to users.
pub const SHORT_ID_LEN: usize = 8;

/// Opaque unique task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }

    /// First characters of the id, enough to pick a task out of a short list.
    pub fn short(&self) -> String {
        let mut simple = self.0.simple().to_string();
        simple.truncate(SHORT_ID_LEN);
        simple
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TaskId {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(TaskId)
            .map_err(|_| TaskError::InvalidRecord(format!("malformed task id '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Completed,
    Canceled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "Incomplete",
            TaskStatus::Completed => "Completed",
            TaskStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Incomplete" => Ok(TaskStatus::Incomplete),
            "Completed" => Ok(TaskStatus::Completed),
            "Canceled" => Ok(TaskStatus::Canceled),
            other => Err(TaskError::InvalidRecord(format!("unknown status '{}'", other))),
        }
    }
}

/// The persisted field set of a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub date_created: NaiveDateTime,
    #[serde(default)]
    pub date_scheduled: Option<NaiveDateTime>,
    #[serde(default)]
    pub date_history: Vec<Option<NaiveDateTime>>,
    #[serde(default)]
    pub date_completed: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TaskRecord", try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    pub description: String,
    pub priority: Option<String>,
    status: TaskStatus,
    date_created: NaiveDateTime,
    date_scheduled: Option<NaiveDateTime>,
    date_history: Vec<Option<NaiveDateTime>>,
    date_completed: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
}

impl Task {
    /// Creates an incomplete, unscheduled task with a trimmed title.
    pub fn new(title: &str, now: NaiveDateTime) -> Result<Self, TaskError> {
        Ok(Task {
            id: TaskId::new(),
            title: Self::validate_title(title)?,
            description: String::new(),
            priority: None,
            status: TaskStatus::Incomplete,
            date_created: now,
            date_scheduled: None,
            date_history: Vec::new(),
            date_completed: None,
            tags: BTreeSet::new(),
        })
    }

    fn validate_title(title: &str) -> Result<String, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::InvalidInput("task title must not be empty".to_string()));
        }
        Ok(title.to_string())
    }

    /// Sets the initial schedule of a task that is still being built.
    /// Not a reschedule, so nothing is recorded in the history.
    pub(crate) fn with_schedule(mut self, date: Option<NaiveDateTime>) -> Self {
        self.date_scheduled = date;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn date_created(&self) -> NaiveDateTime {
        self.date_created
    }

    pub fn date_scheduled(&self) -> Option<NaiveDateTime> {
        self.date_scheduled
    }

    pub fn date_completed(&self) -> Option<NaiveDateTime> {
        self.date_completed
    }

    pub fn date_history(&self) -> &[Option<NaiveDateTime>] {
        &self.date_history
    }

    /// Moves the task to a new date, recording the previous one first.
    ///
    /// An unscheduled task records `None`. Repeating the same date records
    /// another entry.
    pub fn reschedule(&mut self, new_date: NaiveDateTime) {
        self.date_history.push(self.date_scheduled);
        self.date_scheduled = Some(new_date);
        tracing::debug!(task = %self.id, date = %new_date, history = self.date_history.len(), "task rescheduled");
    }

    /// Parses `input` with `format` and reschedules. On a bad date the task
    /// is left untouched.
    pub fn reschedule_from_str(&mut self, input: &str, format: &str) -> Result<(), TaskError> {
        let date = super::schedule::parse_date(input, format)?;
        self.reschedule(date);
        Ok(())
    }

    pub fn mark_completed(&mut self, completion_time: NaiveDateTime) -> Result<(), TaskError> {
        match self.status {
            TaskStatus::Completed => Ok(()),
            TaskStatus::Canceled => Err(TaskError::InvalidTransition {
                from: self.status,
                to: TaskStatus::Completed,
            }),
            TaskStatus::Incomplete => {
                self.status = TaskStatus::Completed;
                self.date_completed = Some(completion_time);
                tracing::debug!(task = %self.id, "task completed");
                Ok(())
            }
        }
    }

    pub fn mark_canceled(&mut self) -> Result<(), TaskError> {
        match self.status {
            TaskStatus::Canceled => Ok(()),
            TaskStatus::Completed => Err(TaskError::InvalidTransition {
                from: self.status,
                to: TaskStatus::Canceled,
            }),
            TaskStatus::Incomplete => {
                self.status = TaskStatus::Canceled;
                tracing::debug!(task = %self.id, "task canceled");
                Ok(())
            }
        }
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        TaskRecord {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            status: task.status,
            date_created: task.date_created,
            date_scheduled: task.date_scheduled,
            date_history: task.date_history,
            date_completed: task.date_completed,
            tags: task.tags,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(TaskError::InvalidRecord(format!("task {} has an empty title", record.id)));
        }
        if (record.status == TaskStatus::Completed) != record.date_completed.is_some() {
            return Err(TaskError::InvalidRecord(format!(
                "task {} is {} but its completion date is {}",
                record.id,
                record.status,
                if record.date_completed.is_some() { "set" } else { "missing" }
            )));
        }

        Ok(Task {
            id: record.id,
            title: record.title,
            description: record.description,
            priority: record.priority,
            status: record.status,
            date_created: record.date_created,
            date_scheduled: record.date_scheduled,
            date_history: record.date_history,
            date_completed: record.date_completed,
            tags: record.tags,
        })
    }
}

/// A user's tasks in insertion order. Ids are unique within the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskError> {
        let mut list = TaskList::new();
        list.extend(tasks)?;
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn push(&mut self, task: Task) -> Result<(), TaskError> {
        if self.get(&task.id).is_some() {
            return Err(TaskError::InvalidRecord(format!("duplicate task id {}", task.id)));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn extend(&mut self, tasks: impl IntoIterator<Item = Task>) -> Result<(), TaskError> {
        for task in tasks {
            self.push(task)?;
        }
        Ok(())
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| &task.id == id)
    }

    /// Like [`TaskList::get_mut`], but a missing id is an error.
    pub fn require_mut(&mut self, id: &TaskId) -> Result<&mut Task, TaskError> {
        self.get_mut(id).ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &TaskId) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|task| &task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        tracing::debug!(task = %id, "task removed");
        Ok(self.tasks.remove(index))
    }

    /// Resolves a full id or a unique id prefix typed by the user.
    pub fn resolve(&self, reference: &str) -> Result<TaskId, TaskError> {
        let reference = reference.trim().to_lowercase();
        if reference.is_empty() {
            return Err(TaskError::NotFound(reference));
        }
        if let Ok(id) = reference.parse::<TaskId>() {
            return self.get(&id).map(|task| task.id).ok_or_else(|| TaskError::NotFound(reference));
        }

        let mut matches = self
            .tasks
            .iter()
            .filter(|task| task.id.0.simple().to_string().starts_with(&reference) || task.id.to_string().starts_with(&reference));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task.id),
            _ => Err(TaskError::NotFound(reference)),
        }
    }

    pub fn unscheduled(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.date_scheduled.is_none()).collect()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::ErrorKind;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_trims_title() {
        let task = Task::new("  Buy milk \n", at(2024, 6, 10)).unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.status(), TaskStatus::Incomplete);
        assert!(task.date_completed().is_none());
        assert!(task.date_history().is_empty());
    }

    #[test]
    fn test_new_rejects_blank_title() {
        let err = Task::new("   ", at(2024, 6, 10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_reschedule_records_previous_dates() {
        let mut task = Task::new("Report", at(2024, 6, 10)).unwrap();
        task.reschedule(at(2024, 6, 11));
        task.reschedule(at(2024, 6, 11));
        task.reschedule(at(2024, 6, 17));

        assert_eq!(task.date_scheduled(), Some(at(2024, 6, 17)));
        assert_eq!(task.date_history(), &[None, Some(at(2024, 6, 11)), Some(at(2024, 6, 11))]);
    }

    #[test]
    fn test_reschedule_from_bad_string_is_atomic() {
        let mut task = Task::new("Report", at(2024, 6, 10)).unwrap();
        task.reschedule(at(2024, 6, 11));
        let before = task.clone();

        let err = task.reschedule_from_str("31-02-2024", "%d-%m-%Y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(task, before);
    }

    #[test]
    fn test_complete_twice_is_noop() {
        let mut task = Task::new("Report", at(2024, 6, 10)).unwrap();
        task.mark_completed(at(2024, 6, 10)).unwrap();
        task.mark_completed(at(2024, 6, 12)).unwrap();
        assert_eq!(task.status(), TaskStatus::Completed);
        assert_eq!(task.date_completed(), Some(at(2024, 6, 10)));
    }

    #[test]
    fn test_cancel_after_complete_fails() {
        let mut task = Task::new("Report", at(2024, 6, 10)).unwrap();
        task.mark_completed(at(2024, 6, 10)).unwrap();
        let err = task.mark_canceled().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);
        assert_eq!(task.status(), TaskStatus::Completed);
    }

    #[test]
    fn test_complete_after_cancel_fails() {
        let mut task = Task::new("Report", at(2024, 6, 10)).unwrap();
        task.mark_canceled().unwrap();
        task.mark_canceled().unwrap();
        assert!(task.mark_completed(at(2024, 6, 10)).is_err());
        assert_eq!(task.status(), TaskStatus::Canceled);
        assert!(task.date_completed().is_none());
    }

    #[test]
    fn test_record_rejects_inconsistent_completion() {
        let task = Task::new("Report", at(2024, 6, 10)).unwrap();
        let mut record = TaskRecord::from(task);
        record.status = TaskStatus::Completed;
        assert!(Task::try_from(record.clone()).is_err());

        record.date_completed = Some(at(2024, 6, 10));
        assert!(Task::try_from(record).is_ok());
    }

    #[test]
    fn test_list_remove_and_not_found() {
        let mut list = TaskList::new();
        let task = Task::new("One", at(2024, 6, 10)).unwrap();
        let id = task.id();
        list.push(task.clone()).unwrap();
        assert!(list.push(task).is_err());

        assert_eq!(list.remove(&id).unwrap().title(), "One");
        assert_eq!(list.remove(&id).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_list_resolve_prefix() {
        let mut list = TaskList::new();
        let task = Task::new("One", at(2024, 6, 10)).unwrap();
        let id = task.id();
        list.push(task).unwrap();

        assert_eq!(list.resolve(&id.short()).unwrap(), id);
        assert_eq!(list.resolve(&id.to_string()).unwrap(), id);
        assert!(list.resolve("zzzz").is_err());
    }
}
