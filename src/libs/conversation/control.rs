//! Control menu: reviewing overdue tasks and today's tasks one by one.

use super::keyboards::{self, CONTROL_KEYBOARD, REVIEW_KEYBOARD};
use super::{back_to_main_menu, select_from, Reply, Stage, TaskQueue, Transition};
use crate::libs::categorizer::{categorize, Bucket};
use crate::libs::error::{ErrorKind, TaskError};
use crate::libs::messages::Message;
use crate::libs::presenter::render_numbered;
use crate::libs::schedule::{next_week, tomorrow};
use crate::libs::session::Session;
use crate::libs::task::{Task, TaskId};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Overdue,
    Today,
}

impl Review {
    fn bucket(&self) -> Bucket {
        match self {
            Review::Overdue => Bucket::Overdue,
            Review::Today => Bucket::Today,
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Review::Overdue => "🚩",
            Review::Today => "🏁",
        }
    }

    fn instructions(&self, list: String) -> Message {
        match self {
            Review::Overdue => Message::ReviewOverdueInstructions(list),
            Review::Today => Message::ReviewTodayInstructions(list),
        }
    }

    fn nothing_to_review(&self) -> Message {
        match self {
            Review::Overdue => Message::NoOverdueTasks,
            Review::Today => Message::NoTodayTasks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControlStage {
    #[default]
    Menu,
    SelectTask { review: Review, candidates: Vec<TaskId> },
    Reviewing { review: Review, task: TaskId, queue: TaskQueue },
}

/// Buttons of the review keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewAction {
    Complete,
    Cancel,
    Delete,
    RescheduleTomorrow,
    RescheduleNextWeek,
    Skip,
    Stop,
}

impl ReviewAction {
    fn from_label(input: &str) -> Option<Self> {
        let actions = [
            (keyboards::COMPLETE, ReviewAction::Complete),
            (keyboards::CANCEL_TASK, ReviewAction::Cancel),
            (keyboards::DELETE_TASK, ReviewAction::Delete),
            (keyboards::RESCHEDULE_TOMORROW, ReviewAction::RescheduleTomorrow),
            (keyboards::RESCHEDULE_NEXT_WEEK, ReviewAction::RescheduleNextWeek),
            (keyboards::SKIP, ReviewAction::Skip),
            (keyboards::STOP_REVIEW, ReviewAction::Stop),
        ];
        actions.into_iter().find(|(label, _)| keyboards::is(input, label)).map(|(_, action)| action)
    }
}

pub(crate) fn menu() -> Reply {
    Reply::new(Message::ControlMenu).with_keyboard(CONTROL_KEYBOARD)
}

fn stay(stage: ControlStage, reply: Reply) -> Transition {
    (Stage::Control(stage), reply)
}

fn to_menu(mut reply: Reply, message: Message) -> Transition {
    reply.push(message);
    stay(ControlStage::Menu, reply.with_keyboard(CONTROL_KEYBOARD))
}

pub(crate) fn handle(session: &mut Session, stage: ControlStage, input: &str, now: NaiveDateTime) -> Transition {
    match stage {
        ControlStage::Menu => control_menu(session, input, now),
        ControlStage::SelectTask { review, candidates } => match select_from(&candidates, input) {
            Some(queue) => next_review(session, review, queue, Reply::default()),
            None => stay(ControlStage::SelectTask { review, candidates }, Reply::new(Message::InvalidSelection)),
        },
        ControlStage::Reviewing { review, task, queue } => review_task(session, review, task, queue, input, now),
    }
}

fn control_menu(session: &Session, input: &str, now: NaiveDateTime) -> Transition {
    if keyboards::is(input, keyboards::REVIEW_OVERDUE) {
        start_review(session, Review::Overdue, now)
    } else if keyboards::is(input, keyboards::REVIEW_TODAY) {
        start_review(session, Review::Today, now)
    } else if keyboards::is(input, keyboards::EDIT_TASKS) || keyboards::is(input, keyboards::ANALYZE) {
        to_menu(Reply::default(), Message::ComingSoon(input.trim().to_string()))
    } else if keyboards::is(input, keyboards::BACK) {
        back_to_main_menu()
    } else {
        to_menu(Reply::default(), Message::ChooseFromMenu)
    }
}

fn start_review(session: &Session, review: Review, now: NaiveDateTime) -> Transition {
    let buckets = categorize(&session.tasks, now.date());
    let tasks = buckets.get(review.bucket());
    if tasks.is_empty() {
        return to_menu(Reply::default(), review.nothing_to_review());
    }

    let candidates = tasks.iter().map(|task| task.id()).collect();
    let list = render_numbered(tasks, review.marker());
    stay(ControlStage::SelectTask { review, candidates }, Reply::new(review.instructions(list)))
}

/// Presents the next queued task that still exists.
fn next_review(session: &Session, review: Review, mut queue: TaskQueue, mut reply: Reply) -> Transition {
    while let Some(id) = queue.pop_front() {
        if let Some(task) = session.tasks.get(&id) {
            reply.push(Message::ReviewingTask(task.title().to_string()));
            return stay(
                ControlStage::Reviewing { review, task: id, queue },
                reply.with_keyboard(REVIEW_KEYBOARD),
            );
        }
    }
    to_menu(reply, Message::AllTasksReviewed)
}

fn update<F>(session: &mut Session, id: TaskId, change: F) -> Result<Message, TaskError>
where
    F: FnOnce(&mut Task) -> Result<Message, TaskError>,
{
    change(session.tasks.require_mut(&id)?)
}

fn review_task(
    session: &mut Session,
    review: Review,
    task: TaskId,
    queue: TaskQueue,
    input: &str,
    now: NaiveDateTime,
) -> Transition {
    let Some(action) = ReviewAction::from_label(input) else {
        return stay(
            ControlStage::Reviewing { review, task, queue },
            Reply::new(Message::ChooseFromMenu).with_keyboard(REVIEW_KEYBOARD),
        );
    };

    let outcome = match action {
        ReviewAction::Stop => return to_menu(Reply::default(), Message::ReviewStopped),
        ReviewAction::Skip => Ok(Message::TaskSkipped),
        ReviewAction::Delete => session
            .tasks
            .remove(&task)
            .map(|removed| Message::TaskDeletedNamed(removed.title().to_string())),
        ReviewAction::Complete => update(session, task, |target| {
            target.mark_completed(now)?;
            Ok(Message::TaskMarkedComplete(target.title().to_string()))
        }),
        ReviewAction::Cancel => update(session, task, |target| {
            target.mark_canceled()?;
            Ok(Message::TaskMarkedCanceled(target.title().to_string()))
        }),
        ReviewAction::RescheduleTomorrow => update(session, task, |target| {
            target.reschedule(tomorrow(now));
            Ok(Message::TaskRescheduledTomorrow(target.title().to_string()))
        }),
        ReviewAction::RescheduleNextWeek => update(session, task, |target| {
            target.reschedule(next_week(now));
            Ok(Message::TaskRescheduledNextWeek(target.title().to_string()))
        }),
    };

    match outcome {
        Ok(message) => next_review(session, review, queue, Reply::new(message)),
        Err(e) if e.kind() == ErrorKind::NotFound => next_review(session, review, queue, Reply::new(Message::TaskVanished)),
        Err(e) => stay(
            ControlStage::Reviewing { review, task, queue },
            Reply::new(Message::ActionFailed(e.to_string())).with_keyboard(REVIEW_KEYBOARD),
        ),
    }
}
