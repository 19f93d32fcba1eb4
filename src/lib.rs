//! # Lupin - a chat-based to-do assistant
//!
//! Lupin keeps a per-user list of tasks and walks the user through planning
//! and reviewing them with a small menu-driven conversation.
//!
//! ## Features
//!
//! - **Task Capture**: Single tasks, bullet lists or detailed multi-line entries
//! - **Scheduling**: Relative dates (today, tomorrow, later this week, next week) or custom dates, with full reschedule history
//! - **Review**: Step through overdue tasks and today's tasks to complete, cancel, delete or push them
//! - **Overview**: Tasks grouped into unscheduled, today, this week and overdue
//! - **Persistence**: SQLite storage with versioned migrations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lupin::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
