//! Structured failures returned by the task core.
//!
//! The core never talks to the user. Every operation that can fail returns a
//! [`TaskError`], and the conversation layer (or the CLI) decides how to word
//! it and whether to ask again.

use super::task::TaskStatus;
use thiserror::Error;

/// Coarse classification of a [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidDate,
    InvalidTransition,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task title was empty or whitespace-only.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A batch of tasks contained no usable lines.
    #[error("no tasks found in the input")]
    EmptyBatch,

    /// A date string did not match the expected format or calendar.
    #[error("invalid date: '{0}'")]
    InvalidDate(String),

    /// A status change was attempted out of a terminal state.
    #[error("cannot change task status from {from} to {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    /// No task in the collection matches the given id.
    #[error("task not found: {0}")]
    NotFound(String),

    /// A persisted record breaks a task invariant.
    #[error("invalid task record: {0}")]
    InvalidRecord(String),
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::InvalidInput(_) | TaskError::EmptyBatch | TaskError::InvalidRecord(_) => ErrorKind::InvalidInput,
            TaskError::InvalidDate(_) => ErrorKind::InvalidDate,
            TaskError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            TaskError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_errors_share_input_kind() {
        assert_eq!(TaskError::EmptyBatch.kind(), ErrorKind::InvalidInput);
        assert_eq!(TaskError::InvalidRecord("x".into()).kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_transition_message() {
        let err = TaskError::InvalidTransition {
            from: TaskStatus::Completed,
            to: TaskStatus::Canceled,
        };
        assert_eq!(err.to_string(), "cannot change task status from Completed to Canceled");
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);
    }
}
