//! The few Slack Web API calls the bot makes, plus replies through a
//! `response_url`.
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{instrument, Level};

use super::reply::Reply;
use crate::{error::Error, fetch::make_client, Result};

pub const SLACK_API: &str = "https://slack.com/api/";

/// Upper bound for one call, replies run in detached tasks.
pub const SLACK_TIMEOUT: Duration = Duration::from_secs(10);

/// Envelope every Web API method answers with, even on failure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    token: Option<String>,
    api_base: String,
    timeout: Duration,
}

impl SlackClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_api_base(token, SLACK_API)
    }

    pub fn with_api_base(token: Option<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: make_client(),
            token,
            api_base: api_base.into(),
            timeout: SLACK_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self, body), level = Level::DEBUG)]
    async fn call(&self, method: &str, body: &Value) -> Result<()> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::Slack("SLACK_BOT_TOKEN is not set".to_string()))?;
        let response: ApiResponse = self
            .http
            .post(format!("{}{method}", self.api_base))
            .bearer_auth(token)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if response.ok {
            Ok(())
        } else {
            Err(Error::Slack(format!(
                "{method}: {}",
                response.error.unwrap_or_else(|| "unknown error".to_string())
            )))
        }
    }

    pub async fn post_message(&self, channel: &str, reply: &Reply) -> Result<()> {
        let mut body = serde_json::to_value(reply)?;
        body["channel"] = json!(channel);
        self.call("chat.postMessage", &body).await
    }

    pub async fn publish_home(&self, user_id: &str, view: Value) -> Result<()> {
        self.call("views.publish", &json!({ "user_id": user_id, "view": view }))
            .await
    }

    /// Answers through the url Slack handed out with a command or an action.
    /// With `replace_original` the message holding the buttons is replaced.
    #[instrument(skip(self, response_url, reply), level = Level::DEBUG)]
    pub async fn respond(
        &self,
        response_url: &str,
        reply: &Reply,
        replace_original: bool,
    ) -> Result<()> {
        let mut body = serde_json::to_value(reply)?;
        if replace_original {
            body["replace_original"] = json!(true);
        }
        self.http
            .post(response_url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
