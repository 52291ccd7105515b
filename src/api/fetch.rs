use crate::EmoteError;

use super::models::{GlobalResult, SubscriberResult};
use super::{EmotesClient, wire};

impl EmotesClient {
    /// Fetch all global emoticons.
    pub async fn global_emotes(&self) -> Result<GlobalResult, EmoteError> {
        let url = format!("{}/global.json", self.base_url);
        let body = self.fetch(&url).await?;
        let raw: wire::RawGlobal = serde_json::from_str(&body)?;
        let result = raw.into_result();
        tracing::debug!(count = result.emotes.len(), "Fetched global emotes");
        Ok(result)
    }

    /// Fetch all subscriber channels with their emoticons.
    pub async fn subscriber_emotes(&self) -> Result<SubscriberResult, EmoteError> {
        let url = format!("{}/subscriber.json", self.base_url);
        let body = self.fetch(&url).await?;
        let raw: wire::RawSubscriber = serde_json::from_str(&body)?;
        let result = raw.into_result();
        tracing::debug!(count = result.channels.len(), "Fetched subscriber channels");
        Ok(result)
    }

    /// Send a GET request and return the body on success.
    async fn fetch(&self, url: &str) -> Result<String, EmoteError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(EmoteError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
