//! What the bot answers to each kind of request, independent of how the
//! request reached it.
use chrono::NaiveDate;
use serde_json::Value;

use super::{
    command::{self, CommandRequest, DayOffset, INVALID_DATE_MESSAGE},
    reply::{self, Reply},
};
use crate::{format::format_menu_message, resolve::MenuSource};

/// The formatted menu of `date`, or the error reply when it can't be had.
pub async fn menu_reply<S: MenuSource + ?Sized>(source: &S, date: NaiveDate) -> Reply {
    match source.menu_for(date).await {
        Ok(snapshot) => Reply::text(format_menu_message(&snapshot)),
        Err(e) => {
            log::error!("menu for {date} failed: {e}");
            Reply::error(e)
        }
    }
}

/// `/menu [text]`
pub async fn command_reply<S: MenuSource + ?Sized>(
    source: &S,
    text: &str,
    today: NaiveDate,
) -> Reply {
    match command::parse_command(text, today) {
        Ok(CommandRequest::Prompt) => Reply::prompt(),
        Ok(CommandRequest::Menu(date)) => menu_reply(source, date).await,
        Err(command::InvalidDate(text)) => {
            log::debug!("rejected command date {text:?}");
            Reply::text(INVALID_DATE_MESSAGE)
        }
    }
}

/// A day button press. Unknown action ids get no answer.
pub async fn action_reply<S: MenuSource + ?Sized>(
    source: &S,
    action_id: &str,
    today: NaiveDate,
) -> Option<Reply> {
    let day = DayOffset::from_action_id(action_id)?;
    Some(menu_reply(source, day.from_today(today)).await)
}

/// A channel message, answered only when it asks for today's menu.
pub async fn message_reply<S: MenuSource + ?Sized>(
    source: &S,
    text: &str,
    today: NaiveDate,
) -> Option<Reply> {
    if !command::asks_for_today(text) {
        return None;
    }
    Some(menu_reply(source, today).await)
}

/// A mention: the day picker when it is about the menu, a greeting
/// otherwise.
pub fn mention_reply(text: &str) -> Reply {
    if command::mentions_menu(text) {
        Reply::prompt()
    } else {
        Reply::greeting()
    }
}

/// The home tab with today's menu, or the error text in its place.
pub async fn home_view<S: MenuSource + ?Sized>(source: &S, today: NaiveDate) -> Value {
    let menu = menu_reply(source, today).await;
    reply::home_view(&menu.text)
}
