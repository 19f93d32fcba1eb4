//! Plan menu: adding, listing and scheduling tasks.

use super::keyboards::{self, PLAN_KEYBOARD, SCHEDULE_KEYBOARD};
use super::{back_to_main_menu, select_from, Conversation, Reply, Stage, TaskQueue, Transition};
use crate::libs::categorizer::categorize;
use crate::libs::factory::create_from_input;
use crate::libs::messages::Message;
use crate::libs::presenter::{render_numbered, render_summary};
use crate::libs::schedule::{format_hint, ScheduleOption, ISO_DATE_FORMAT};
use crate::libs::session::Session;
use crate::libs::task::TaskId;
use chrono::NaiveDateTime;

const UNSCHEDULED_MARKER: &str = "🔸";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlanStage {
    #[default]
    Menu,
    /// Waiting for the text of one or more tasks.
    AwaitingTasks,
    /// Unscheduled tasks were listed; waiting for `n` or `all`.
    SelectTask { candidates: Vec<TaskId> },
    ChooseDate { task: TaskId, queue: TaskQueue },
    CustomDate { task: TaskId, queue: TaskQueue },
}

pub(crate) fn menu() -> Reply {
    Reply::new(Message::PlanMenu).with_keyboard(PLAN_KEYBOARD)
}

fn stay(stage: PlanStage, reply: Reply) -> Transition {
    (Stage::Plan(stage), reply)
}

fn to_menu(mut reply: Reply, message: Message) -> Transition {
    reply.push(message);
    stay(PlanStage::Menu, reply.with_keyboard(PLAN_KEYBOARD))
}

pub(crate) fn handle(
    conversation: &Conversation,
    session: &mut Session,
    stage: PlanStage,
    input: &str,
    now: NaiveDateTime,
) -> Transition {
    match stage {
        PlanStage::Menu => plan_menu(session, input, now),
        PlanStage::AwaitingTasks => add_tasks(session, input, now),
        PlanStage::SelectTask { candidates } => select_task(session, candidates, input),
        PlanStage::ChooseDate { task, queue } => choose_date(conversation, session, task, queue, input, now),
        PlanStage::CustomDate { task, queue } => custom_date(conversation, session, task, queue, input),
    }
}

fn plan_menu(session: &Session, input: &str, now: NaiveDateTime) -> Transition {
    if keyboards::is(input, keyboards::ADD_TASK) {
        stay(PlanStage::AwaitingTasks, Reply::new(Message::AddTaskInstructions))
    } else if keyboards::is(input, keyboards::LIST_TASKS) {
        if session.tasks.is_empty() {
            return to_menu(Reply::default(), Message::NoTasksYet);
        }
        let summary = render_summary(&categorize(&session.tasks, now.date()));
        to_menu(Reply::from_text(summary), Message::WhatNext)
    } else if keyboards::is(input, keyboards::SCHEDULE_TASKS) {
        let unscheduled = session.tasks.unscheduled();
        if unscheduled.is_empty() {
            return to_menu(Reply::default(), Message::AllTasksAlreadyScheduled);
        }
        let candidates = unscheduled.iter().map(|task| task.id()).collect();
        let list = render_numbered(&unscheduled, UNSCHEDULED_MARKER);
        stay(PlanStage::SelectTask { candidates }, Reply::new(Message::ScheduleInstructions(list)))
    } else if keyboards::is(input, keyboards::BRAINSTORM) {
        to_menu(Reply::default(), Message::ComingSoon(keyboards::BRAINSTORM.to_string()))
    } else if keyboards::is(input, keyboards::BACK) {
        back_to_main_menu()
    } else {
        to_menu(Reply::default(), Message::ChooseFromMenu)
    }
}

fn add_tasks(session: &mut Session, input: &str, now: NaiveDateTime) -> Transition {
    let added = create_from_input(input, now).and_then(|tasks| {
        let titles: Vec<String> = tasks.iter().map(|task| task.title().to_string()).collect();
        session.tasks.extend(tasks)?;
        Ok(titles)
    });

    match added {
        Ok(titles) => {
            tracing::debug!(user_id = session.user_id, count = titles.len(), "tasks added");
            to_menu(Reply::default(), Message::TasksAdded(titles))
        }
        Err(e) => stay(PlanStage::AwaitingTasks, Reply::new(Message::TasksNotAdded(e.to_string()))),
    }
}

fn select_task(session: &Session, candidates: Vec<TaskId>, input: &str) -> Transition {
    match select_from(&candidates, input) {
        Some(queue) if queue.is_empty() => to_menu(Reply::default(), Message::NoUnscheduledTasks),
        Some(queue) => next_task(session, queue, Reply::default(), Message::SchedulingFinished),
        None => stay(PlanStage::SelectTask { candidates }, Reply::new(Message::InvalidSelection)),
    }
}

/// Moves to the next queued task, or back to the plan menu with `finished`.
fn next_task(session: &Session, mut queue: TaskQueue, mut reply: Reply, finished: Message) -> Transition {
    while let Some(id) = queue.pop_front() {
        if let Some(task) = session.tasks.get(&id) {
            reply.push(Message::SchedulingTask(task.title().to_string()));
            return stay(PlanStage::ChooseDate { task: id, queue }, reply.with_keyboard(SCHEDULE_KEYBOARD));
        }
    }
    to_menu(reply, finished)
}

/// Reschedules `task` and reports the new date. A task that disappeared is
/// reported as such.
fn apply_date(session: &mut Session, task: TaskId, date: NaiveDateTime) -> Message {
    match session.tasks.get_mut(&task) {
        Some(task) => {
            task.reschedule(date);
            Message::TaskScheduled(task.title().to_string(), date.format(ISO_DATE_FORMAT).to_string())
        }
        None => Message::TaskVanished,
    }
}

fn choose_date(
    conversation: &Conversation,
    session: &mut Session,
    task: TaskId,
    queue: TaskQueue,
    input: &str,
    now: NaiveDateTime,
) -> Transition {
    if keyboards::is(input, keyboards::STOP_SCHEDULING) {
        return to_menu(Reply::default(), Message::SchedulingStopped);
    }
    if keyboards::is(input, keyboards::SKIP) {
        let reply = Reply::new(Message::SchedulingSkipped);
        return next_task(session, queue, reply, Message::WhatNext);
    }
    if keyboards::is(input, keyboards::CUSTOM_DATE) {
        let hint = format_hint(conversation.date_format());
        return stay(PlanStage::CustomDate { task, queue }, Reply::new(Message::PromptCustomDate(hint)));
    }

    match ScheduleOption::from_label(input) {
        Some(option) => {
            let reply = Reply::new(apply_date(session, task, option.resolve(now)));
            next_task(session, queue, reply, Message::SchedulingFinished)
        }
        None => stay(
            PlanStage::ChooseDate { task, queue },
            Reply::new(Message::ChooseFromMenu).with_keyboard(SCHEDULE_KEYBOARD),
        ),
    }
}

fn custom_date(
    conversation: &Conversation,
    session: &mut Session,
    task: TaskId,
    queue: TaskQueue,
    input: &str,
) -> Transition {
    let Some(target) = session.tasks.get_mut(&task) else {
        return next_task(session, queue, Reply::new(Message::TaskVanished), Message::SchedulingFinished);
    };

    match target.reschedule_from_str(input, conversation.date_format()) {
        Ok(()) => {
            let date = target
                .date_scheduled()
                .map(|date| date.format(ISO_DATE_FORMAT).to_string())
                .unwrap_or_default();
            let reply = Reply::new(Message::TaskScheduled(target.title().to_string(), date));
            next_task(session, queue, reply, Message::SchedulingFinished)
        }
        Err(_) => {
            let hint = format_hint(conversation.date_format());
            stay(
                PlanStage::CustomDate { task, queue },
                Reply::new(Message::InvalidCustomDate(input.trim().to_string(), hint)),
            )
        }
    }
}
