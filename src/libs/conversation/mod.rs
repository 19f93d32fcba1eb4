//! The menu-driven conversation engine.
//!
//! Each incoming text message is handled by [`Conversation::handle`], which
//! looks at the session's current [`Stage`], applies at most one transition
//! and returns a [`Reply`] for the chat front end to deliver. Stages are a
//! closed set of variants, each carrying only the selection state it needs,
//! and every dispatch is an exhaustive `match`.
//!
//! ```text
//! Start ──▶ MainMenu ──▶ Plan(Menu) ──▶ AwaitingTasks
//!              │              ├──────▶ SelectTask ──▶ ChooseDate ◀──▶ CustomDate
//!              │
//!              └──────▶ Control(Menu) ──▶ SelectTask ──▶ Reviewing
//! ```
//!
//! `Done` ends the session from any stage and `/start` returns to the main
//! menu.

pub mod control;
pub mod keyboards;
pub mod plan;

use super::messages::Message;
use super::schedule::DEFAULT_CUSTOM_DATE_FORMAT;
use super::session::Session;
use super::task::{TaskId, TaskStatus};
use chrono::NaiveDateTime;
use keyboards::{Keyboard, CONTROL, DO, DONE, MAIN_MENU_KEYBOARD, PLAN, SETTINGS, START};
use std::collections::VecDeque;

pub use control::{ControlStage, Review};
pub use plan::PlanStage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Stage {
    /// No message handled yet.
    #[default]
    Start,
    MainMenu,
    Plan(PlanStage),
    Control(ControlStage),
}

/// Task ids still waiting to be scheduled or reviewed.
pub type TaskQueue = VecDeque<TaskId>;

/// What the front end sends back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
    /// Set when the session should be torn down after delivery.
    pub end_session: bool,
}

impl Reply {
    pub fn new(message: Message) -> Self {
        Reply {
            text: message.to_string(),
            keyboard: None,
            end_session: false,
        }
    }

    pub fn from_text(text: String) -> Self {
        Reply {
            text,
            ..Reply::default()
        }
    }

    pub fn push(&mut self, message: Message) {
        if !self.text.is_empty() {
            self.text.push_str("\n\n");
        }
        self.text.push_str(&message.to_string());
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

pub(crate) type Transition = (Stage, Reply);

pub struct Conversation {
    date_format: String,
}

impl Default for Conversation {
    fn default() -> Self {
        Conversation::new(DEFAULT_CUSTOM_DATE_FORMAT)
    }
}

impl Conversation {
    /// `date_format` is the chrono format for custom dates typed by the user.
    pub fn new(date_format: &str) -> Self {
        Conversation {
            date_format: date_format.to_string(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn handle(&self, session: &mut Session, input: &str, now: NaiveDateTime) -> Reply {
        session.touch(now);
        let stage = std::mem::take(&mut session.stage);
        tracing::debug!(user_id = session.user_id, ?stage, input, "handling message");

        let (next, reply) = if keyboards::is(input, DONE) {
            (Stage::Start, farewell(session))
        } else if keyboards::is(input, START) {
            (Stage::MainMenu, greeting())
        } else {
            match stage {
                Stage::Start => (Stage::MainMenu, greeting()),
                Stage::MainMenu => main_menu(input),
                Stage::Plan(stage) => plan::handle(self, session, stage, input, now),
                Stage::Control(stage) => control::handle(session, stage, input, now),
            }
        };

        session.stage = next;
        reply
    }
}

fn greeting() -> Reply {
    Reply::new(Message::Greeting).with_keyboard(MAIN_MENU_KEYBOARD)
}

fn farewell(session: &Session) -> Reply {
    let open = session.tasks.iter().filter(|task| task.status() == TaskStatus::Incomplete).count();
    let mut reply = Reply::new(Message::Farewell(open));
    reply.end_session = true;
    reply
}

pub(crate) fn back_to_main_menu() -> Transition {
    (Stage::MainMenu, Reply::new(Message::ReturningToMainMenu).with_keyboard(MAIN_MENU_KEYBOARD))
}

fn main_menu(input: &str) -> Transition {
    if keyboards::is(input, PLAN) {
        (Stage::Plan(PlanStage::Menu), plan::menu())
    } else if keyboards::is(input, CONTROL) {
        (Stage::Control(ControlStage::Menu), control::menu())
    } else if keyboards::is(input, DO) || keyboards::is(input, SETTINGS) {
        (
            Stage::MainMenu,
            Reply::new(Message::ComingSoon(input.trim().to_string())).with_keyboard(MAIN_MENU_KEYBOARD),
        )
    } else {
        (Stage::MainMenu, Reply::new(Message::ChooseFromMenu).with_keyboard(MAIN_MENU_KEYBOARD))
    }
}

/// Parses `n` (1-based) or `all` against a list of candidates.
pub(crate) fn select_from(candidates: &[TaskId], input: &str) -> Option<TaskQueue> {
    let input = input.trim();
    if keyboards::is(input, keyboards::ALL) {
        return Some(candidates.iter().copied().collect());
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=candidates.len()).contains(&n) => Some(VecDeque::from([candidates[n - 1]])),
        _ => None,
    }
}
