use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::session::UserId;
use crate::libs::task::{Task, TaskList, TaskRecord};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const SELECT_TASKS: &str = "SELECT id, title, description, priority, status, date_created, date_scheduled, date_completed, date_history, tags
    FROM tasks WHERE user_id = ?1 ORDER BY position";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE user_id = ?1 AND id = ?2";
const UPSERT_TASK: &str = "INSERT OR REPLACE INTO tasks
    (id, user_id, position, title, description, priority, status, date_created, date_scheduled, date_completed, date_history, tags)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

/// A task row as stored, before validation.
struct StoredTask {
    id: String,
    title: String,
    description: String,
    priority: Option<String>,
    status: String,
    date_created: NaiveDateTime,
    date_scheduled: Option<NaiveDateTime>,
    date_completed: Option<NaiveDateTime>,
    date_history: String,
    tags: String,
}

impl StoredTask {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(StoredTask {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: row.get(3)?,
            status: row.get(4)?,
            date_created: row.get(5)?,
            date_scheduled: row.get(6)?,
            date_completed: row.get(7)?,
            date_history: row.get(8)?,
            tags: row.get(9)?,
        })
    }

    fn into_task(self) -> Result<Task, TaskError> {
        let invalid_json = |e: serde_json::Error| TaskError::InvalidRecord(e.to_string());
        let record = TaskRecord {
            id: self.id.parse()?,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status.parse()?,
            date_created: self.date_created,
            date_scheduled: self.date_scheduled,
            date_history: serde_json::from_str(&self.date_history).map_err(invalid_json)?,
            date_completed: self.date_completed,
            tags: serde_json::from_str(&self.tags).map_err(invalid_json)?,
        };
        Task::try_from(record)
    }
}

/// Per-user task storage.
///
/// `save` only deletes rows this store has loaded or written itself, so rows
/// skipped by `load` stay in the database untouched.
pub struct Tasks {
    pub conn: Connection,
    known: HashMap<UserId, HashSet<String>>,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: &Path) -> Result<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks {
            conn: db.conn,
            known: HashMap::new(),
        }
    }

    /// Loads a user's tasks in their saved order. Rows that fail validation
    /// are reported and left out.
    pub fn load(&mut self, user_id: UserId) -> Result<TaskList> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let rows = stmt
            .query_map(params![user_id], StoredTask::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut tasks = TaskList::new();
        for row in rows {
            let id = row.id.clone();
            if let Err(e) = row.into_task().and_then(|task| tasks.push(task)) {
                msg_warning!(Message::TaskRecordSkipped(id, e.to_string()));
            }
        }

        self.known.insert(user_id, ids_of(&tasks));
        Ok(tasks)
    }

    /// Writes `tasks` for `user_id`. Previously loaded or saved tasks that
    /// are no longer in the list are deleted.
    pub fn save(&mut self, user_id: UserId, tasks: &TaskList) -> Result<()> {
        let current = ids_of(tasks);
        let tx = self.conn.transaction()?;

        {
            if let Some(known) = self.known.get(&user_id) {
                let mut stmt = tx.prepare(DELETE_TASK)?;
                for id in known.difference(&current) {
                    stmt.execute(params![user_id, id])?;
                }
            }

            let mut stmt = tx.prepare(UPSERT_TASK)?;
            for (position, task) in tasks.iter().enumerate() {
                stmt.execute(params![
                    task.id().to_string(),
                    user_id,
                    position as i64,
                    task.title(),
                    task.description,
                    task.priority,
                    task.status().as_str(),
                    task.date_created(),
                    task.date_scheduled(),
                    task.date_completed(),
                    serde_json::to_string(task.date_history())?,
                    serde_json::to_string(&task.tags)?,
                ])?;
            }
        }

        tx.commit()?;
        self.known.insert(user_id, current);
        msg_debug!(Message::TasksSaved(tasks.len()));

        Ok(())
    }
}

fn ids_of(tasks: &TaskList) -> HashSet<String> {
    tasks.iter().map(|task| task.id().to_string()).collect()
}
