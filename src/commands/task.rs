use crate::{
    db::tasks::Tasks,
    libs::{
        categorizer::categorize,
        config::Config,
        error::TaskError,
        factory::{create_from_input, create_full_task},
        messages::Message,
        presenter::render_summary,
        schedule::{parse_date, ISO_DATE_FORMAT},
        session::UserId,
        task::{TaskId, TaskList},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Act on this user's tasks instead of the configured one
    #[arg(short, long, global = true)]
    user: Option<UserId>,

    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task, or several tasks given one per line
    Add {
        text: String,
        /// Read TEXT as title, description, comma-separated tags, date (YYYY-MM-DD) and priority, one per line
        #[arg(long)]
        full: bool,
    },
    /// Show tasks grouped by schedule
    List {
        /// Show a flat table instead
        #[arg(short, long)]
        table: bool,
    },
    /// Mark a task as completed
    Complete { id: String },
    /// Cancel a task
    Cancel { id: String },
    /// Delete a task
    Delete { id: String },
    /// Schedule a task for a date (YYYY-MM-DD)
    Schedule { id: String, date: String },
}

pub async fn cmd(task_args: TaskArgs) -> Result<()> {
    let user_id = match task_args.user {
        Some(user_id) => user_id,
        None => Config::read()?.assistant().user_id,
    };
    let mut store = Tasks::new()?;
    let mut tasks = store.load(user_id)?;
    let now = Local::now().naive_local();

    let changed = match task_args.command {
        TaskCommand::Add { text, full } => {
            let created = if full {
                vec![create_full_task(&text, now).map_err(failed)?]
            } else {
                create_from_input(&text, now).map_err(failed)?
            };
            let count = created.len();
            tasks.extend(created).map_err(failed)?;
            msg_success!(Message::TasksCreated(count));
            true
        }
        TaskCommand::List { table } => {
            list(&tasks, table, now.date())?;
            false
        }
        TaskCommand::Complete { id } => {
            let id = resolve(&tasks, &id)?;
            let task = tasks.require_mut(&id).map_err(failed)?;
            task.mark_completed(now).map_err(failed)?;
            msg_success!(Message::TaskCompleted(task.title().to_string()));
            true
        }
        TaskCommand::Cancel { id } => {
            let id = resolve(&tasks, &id)?;
            let task = tasks.require_mut(&id).map_err(failed)?;
            task.mark_canceled().map_err(failed)?;
            msg_success!(Message::TaskCanceled(task.title().to_string()));
            true
        }
        TaskCommand::Delete { id } => {
            let id = resolve(&tasks, &id)?;
            let task = tasks.remove(&id).map_err(failed)?;
            msg_success!(Message::TaskDeleted(task.title().to_string()));
            true
        }
        TaskCommand::Schedule { id, date } => {
            let date = parse_date(&date, ISO_DATE_FORMAT).map_err(failed)?;
            let id = resolve(&tasks, &id)?;
            let task = tasks.require_mut(&id).map_err(failed)?;
            task.reschedule(date);
            msg_success!(Message::TaskRescheduled(
                task.title().to_string(),
                date.format(ISO_DATE_FORMAT).to_string()
            ));
            true
        }
    };

    if changed {
        store.save(user_id, &tasks)?;
    }

    Ok(())
}

fn failed(e: TaskError) -> anyhow::Error {
    msg_error_anyhow!(Message::TaskOperationFailed(e.to_string()))
}

fn resolve(tasks: &TaskList, reference: &str) -> Result<TaskId> {
    tasks
        .resolve(reference)
        .map_err(|_| msg_error_anyhow!(Message::TaskNotFound(reference.to_string())))
}

fn list(tasks: &TaskList, table: bool, today: NaiveDate) -> Result<()> {
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if table {
        msg_print!(Message::TasksHeader, true);
        View::tasks(&tasks.iter().collect::<Vec<_>>())
    } else {
        msg_print!(render_summary(&categorize(tasks, today)));
        Ok(())
    }
}
