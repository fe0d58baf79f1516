//! Scheduled push of the menu text to an incoming webhook.
use std::time::Duration;

use serde_json::json;
use tracing::{instrument, Level};
use url::Url;

use crate::{fetch::make_client, Result};

pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: reqwest::Client,
    url: Url,
}

impl WebhookSender {
    pub fn new(url: Url) -> Self {
        Self {
            client: make_client(),
            url,
        }
    }

    /// Posts `{"text": text}`. Anything but a 2xx answer is an error.
    #[instrument(skip(self, text), fields(host = self.url.host_str()), level = Level::DEBUG)]
    pub async fn send(&self, text: &str) -> Result<()> {
        self.client
            .post(self.url.clone())
            .timeout(WEBHOOK_TIMEOUT)
            .json(&json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;
        log::info!("menu sent to the webhook");
        Ok(())
    }
}
