//! Per-user conversational state.
//!
//! A [`Session`] owns the user's [`TaskList`] and the current conversation
//! [`Stage`]. Sessions live in a [`SessionStore`] keyed by user id. A session
//! is created on a user's first message and torn down either explicitly
//! (`Done`) or when it has been idle longer than the store's timeout.
//! Handing out `&mut Session` keeps one writer per user at a time.

use super::conversation::Stage;
use super::task::TaskList;
use chrono::{Duration, NaiveDateTime};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub type UserId = i64;

#[derive(Debug)]
pub struct Session {
    pub user_id: UserId,
    pub tasks: TaskList,
    pub stage: Stage,
    started_at: NaiveDateTime,
    last_activity: NaiveDateTime,
}

impl Session {
    pub fn new(user_id: UserId, tasks: TaskList, now: NaiveDateTime) -> Self {
        Session {
            user_id,
            tasks,
            stage: Stage::default(),
            started_at: now,
            last_activity: now,
        }
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// Time between the first and the latest message of the session.
    pub fn active_for(&self) -> Duration {
        self.last_activity - self.started_at()
    }

    pub fn touch(&mut self, now: NaiveDateTime) {
        if now > self.last_activity {
            self.last_activity = now;
        }
    }

    pub fn is_idle(&self, now: NaiveDateTime, timeout: Duration) -> bool {
        now - self.last_activity > timeout
    }
}

pub struct SessionStore {
    sessions: HashMap<UserId, Session>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        SessionStore {
            sessions: HashMap::new(),
            idle_timeout,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.sessions.contains_key(&user_id)
    }

    pub fn get_mut(&mut self, user_id: UserId) -> Option<&mut Session> {
        self.sessions.get_mut(&user_id)
    }

    /// Starts a session with the user's stored tasks, replacing any old one.
    pub fn begin(&mut self, user_id: UserId, tasks: TaskList, now: NaiveDateTime) -> &mut Session {
        tracing::debug!(user_id, tasks = tasks.len(), "session started");
        let session = Session::new(user_id, tasks, now);
        match self.sessions.entry(user_id) {
            Entry::Occupied(mut slot) => {
                slot.insert(session);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(session),
        }
    }

    /// The user's live session, or a new one seeded by `load`.
    pub fn get_or_begin<F, E>(&mut self, user_id: UserId, now: NaiveDateTime, load: F) -> Result<&mut Session, E>
    where
        F: FnOnce() -> Result<TaskList, E>,
    {
        match self.sessions.entry(user_id) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let tasks = load()?;
                tracing::debug!(user_id, tasks = tasks.len(), "session started");
                Ok(slot.insert(Session::new(user_id, tasks, now)))
            }
        }
    }

    /// Tears a session down, handing it back so its tasks can be saved.
    pub fn end(&mut self, user_id: UserId) -> Option<Session> {
        let session = self.sessions.remove(&user_id);
        if let Some(session) = &session {
            tracing::debug!(user_id, active_minutes = session.active_for().num_minutes(), "session ended");
        }
        session
    }

    /// Removes every session idle for longer than the timeout.
    pub fn expire_idle(&mut self, now: NaiveDateTime) -> Vec<Session> {
        let expired: Vec<UserId> = self
            .sessions
            .values()
            .filter(|session| session.is_idle(now, self.idle_timeout))
            .map(|session| session.user_id)
            .collect();

        expired
            .into_iter()
            .filter_map(|user_id| self.sessions.remove(&user_id))
            .inspect(|session| {
                tracing::debug!(
                    user_id = session.user_id,
                    active_minutes = session.active_for().num_minutes(),
                    "session expired"
                );
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_begin_and_end() {
        let mut store = SessionStore::new(Duration::minutes(30));
        store.begin(7, TaskList::new(), at(9, 0));
        assert!(store.contains(7));
        assert_eq!(store.end(7).map(|session| session.user_id), Some(7));
        assert!(store.end(7).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_or_begin_loads_once() {
        let mut store = SessionStore::new(Duration::minutes(30));
        let mut loads = 0;
        for minute in [0, 5] {
            let session = store
                .get_or_begin(3, at(9, minute), || -> Result<TaskList, ()> {
                    loads += 1;
                    Ok(TaskList::new())
                })
                .unwrap();
            assert_eq!(session.started_at(), at(9, 0));
        }
        assert_eq!(loads, 1);

        let failed = SessionStore::new(Duration::minutes(30)).get_or_begin(4, at(9, 0), || Err("db down")).map(|_| ());
        assert_eq!(failed, Err("db down"));
    }

    #[test]
    fn test_expire_idle_keeps_active_sessions() {
        let mut store = SessionStore::new(Duration::minutes(30));
        store.begin(1, TaskList::new(), at(9, 0));
        store.begin(2, TaskList::new(), at(9, 0));
        store.get_mut(2).unwrap().touch(at(9, 20));

        let expired = store.expire_idle(at(9, 45));
        assert_eq!(expired.iter().map(|session| session.user_id).collect::<Vec<_>>(), vec![1]);
        assert!(store.contains(2));
        assert_eq!(store.len(), 1);
        assert_eq!(expired[0].active_for(), Duration::zero());
        assert_eq!(store.end(2).map(|session| session.active_for()), Some(Duration::minutes(20)));
    }
}
