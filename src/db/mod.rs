//! Database layer for lupin.
//!
//! Tasks are persisted in a single SQLite file in the data directory. The
//! schema is managed by [`migrations::MigrationManager`] and brought up to
//! date whenever a [`db::Db`] is opened.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lupin::db::tasks::Tasks;
//!
//! let mut store = Tasks::new()?;
//! let tasks = store.load(1)?;
//! store.save(1, &tasks)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Loading and saving a user's task list.
pub mod tasks;
