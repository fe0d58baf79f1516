//! Slack delivery: slash commands, Events API callbacks and button presses.
//!
//! Slack wants an answer within three seconds, so every route acknowledges
//! at once and does the menu work in a spawned task that replies through
//! the `response_url` or the Web API.
mod client;
pub mod command;
pub mod handlers;
pub mod reply;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use crate::resolve::MenuSource;

pub use client::{SlackClient, SLACK_API, SLACK_TIMEOUT};
pub use reply::Reply;

pub struct AppState {
    pub source: Arc<dyn MenuSource>,
    pub slack: SlackClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/slack/commands", post(slash_command))
        .route("/slack/events", post(event))
        .route("/slack/interactions", post(interaction))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Deserialize)]
pub struct SlashCommand {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub text: String,
    pub response_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    UrlVerification { challenge: String },
    EventCallback { event: Event },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Message(MessageEvent),
    AppMention(MessageEvent),
    AppHomeOpened { user: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct MessageEvent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
}

impl MessageEvent {
    /// Bot posts (our own included) and edits/joins carry one of these.
    const fn from_person(&self) -> bool {
        self.bot_id.is_none() && self.subtype.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct InteractionForm {
    payload: String,
}

#[derive(Debug, Deserialize)]
pub struct BlockActions {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub response_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Action {
    pub action_id: String,
}

async fn slash_command(
    State(state): State<Arc<AppState>>,
    Form(command): Form<SlashCommand>,
) -> StatusCode {
    log::info!("{} {:?}", command.command, command.text);
    tokio::spawn(async move {
        let reply = handlers::command_reply(&*state.source, &command.text, today()).await;
        if let Err(e) = state.slack.respond(&command.response_url, &reply, false).await {
            log::error!("could not answer {}: {e}", command.command);
        }
    });
    StatusCode::OK
}

async fn event(State(state): State<Arc<AppState>>, Json(request): Json<EventRequest>) -> Response {
    match request {
        EventRequest::UrlVerification { challenge } => {
            Json(json!({ "challenge": challenge })).into_response()
        }
        EventRequest::EventCallback { event } => {
            tokio::spawn(handle_event(state, event));
            StatusCode::OK.into_response()
        }
        EventRequest::Other => StatusCode::OK.into_response(),
    }
}

async fn handle_event(state: Arc<AppState>, event: Event) {
    let result = match event {
        Event::Message(message) if message.from_person() => {
            match handlers::message_reply(&*state.source, &message.text, today()).await {
                Some(reply) => state.slack.post_message(&message.channel, &reply).await,
                None => Ok(()),
            }
        }
        Event::AppMention(mention) => {
            let reply = handlers::mention_reply(&mention.text);
            state.slack.post_message(&mention.channel, &reply).await
        }
        Event::AppHomeOpened { user } => {
            let view = handlers::home_view(&*state.source, today()).await;
            state.slack.publish_home(&user, view).await
        }
        Event::Message(_) | Event::Other => Ok(()),
    };
    if let Err(e) = result {
        log::error!("could not answer event: {e}");
    }
}

async fn interaction(
    State(state): State<Arc<AppState>>,
    Form(form): Form<InteractionForm>,
) -> StatusCode {
    let payload: BlockActions = match serde_json::from_str(&form.payload) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("unreadable interaction payload: {e}");
            return StatusCode::BAD_REQUEST;
        }
    };
    let Some(response_url) = payload.response_url else {
        log::warn!("interaction without a response_url");
        return StatusCode::OK;
    };
    tokio::spawn(async move {
        for action in payload.actions {
            let Some(reply) =
                handlers::action_reply(&*state.source, &action.action_id, today()).await
            else {
                log::debug!("ignoring action {}", action.action_id);
                continue;
            };
            if let Err(e) = state.slack.respond(&response_url, &reply, true).await {
                log::error!("could not answer {}: {e}", action.action_id);
            }
        }
    });
    StatusCode::OK
}
