use reqwest::Client;

use crate::line::events::OutgoingMessage;

const REPLY_URL: &str = "https://api.line.me/v2/bot/message/reply";

/// Client for the LINE Messaging API reply endpoint.
#[derive(Clone)]
pub struct LineClient {
    client: Client,
    channel_token: String,
}

impl LineClient {
    pub fn new(channel_token: &str) -> Self {
        let client = Client::builder()
            .user_agent("ChessQuizBot/1.0")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();
        Self {
            client,
            channel_token: channel_token.to_string(),
        }
    }

    /// Send reply messages for a webhook event. A reply token is single-use
    /// and expires quickly, so failures are reported but not retried.
    pub async fn reply(
        &self,
        reply_token: &str,
        messages: &[OutgoingMessage],
    ) -> Result<(), String> {
        let resp = self
            .client
            .post(REPLY_URL)
            .bearer_auth(&self.channel_token)
            .json(&serde_json::json!({
                "replyToken": reply_token,
                "messages": messages,
            }))
            .send()
            .await
            .map_err(|e| format!("Reply request error: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("Reply HTTP {}", resp.status()));
        }

        Ok(())
    }
}
