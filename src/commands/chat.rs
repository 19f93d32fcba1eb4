//! Terminal front end for the assistant.
//!
//! Reads one message per line from stdin, routes it through the user's
//! session and prints the reply followed by the keyboard options. Tasks are
//! saved after every message, and again when a session expires.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        conversation::{keyboards::Keyboard, Conversation},
        messages::Message,
        session::{SessionStore, UserId},
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Args)]
pub struct ChatArgs {
    /// Chat as this user instead of the configured one
    #[arg(short, long)]
    user: Option<UserId>,
}

pub async fn cmd(args: ChatArgs) -> Result<()> {
    let assistant = Config::read()?.assistant();
    let user_id = args.user.unwrap_or(assistant.user_id);
    let conversation = Conversation::new(&assistant.date_format);
    let mut sessions = SessionStore::new(assistant.idle_timeout()?);
    let mut store = Tasks::new()?;

    msg_info!(Message::ChatStarted(user_id));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let now = Local::now().naive_local();

        for expired in sessions.expire_idle(now) {
            store.save(expired.user_id, &expired.tasks)?;
            if expired.user_id == user_id {
                msg_info!(Message::SessionExpired);
            }
        }

        let session = sessions.get_or_begin(user_id, now, || store.load(user_id))?;
        let reply = conversation.handle(session, &line, now);
        store.save(user_id, &session.tasks)?;

        msg_print!(reply.text, true);
        if let Some(keyboard) = reply.keyboard {
            msg_print!(render_keyboard(&keyboard));
            msg_print!(Message::ChatInputHint);
        }

        if reply.end_session {
            sessions.end(user_id);
            break;
        }
    }

    msg_info!(Message::ChatEnded);
    Ok(())
}

/// One line per keyboard row, e.g. `[ Plan ]  [ Do ]`.
fn render_keyboard(keyboard: &Keyboard) -> String {
    keyboard
        .rows()
        .iter()
        .map(|row| row.iter().map(|label| format!("[ {} ]", label)).collect::<Vec<_>>().join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}
