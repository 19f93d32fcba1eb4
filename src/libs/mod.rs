//! Core library modules for lupin.
//!
//! ## Features
//!
//! - **Task Model**: Tasks, status transitions and schedule history
//! - **Planning Helpers**: Task creation from free text, relative dates, bucket categorization
//! - **Conversation**: Per-user sessions and the menu-driven dialogue
//! - **Infrastructure**: Configuration, data storage, messaging, console tables
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Local;
//! use lupin::libs::categorizer::categorize;
//! use lupin::libs::factory::create_from_input;
//! use lupin::libs::task::TaskList;
//!
//! let now = Local::now().naive_local();
//! let mut tasks = TaskList::new();
//! tasks.extend(create_from_input("- Buy milk\n- Call mom", now)?)?;
//! assert_eq!(categorize(&tasks, now.date()).unscheduled.len(), 2);
//! # Ok::<(), lupin::libs::error::TaskError>(())
//! ```

pub mod categorizer;
pub mod config;
pub mod conversation;
pub mod data_storage;
pub mod error;
pub mod factory;
pub mod messages;
pub mod presenter;
pub mod schedule;
pub mod session;
pub mod task;
pub mod view;
