use serde::{Deserialize, Serialize};

/// Top-level webhook request body.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub reply_token: Option<String>,
    pub source: Option<Source>,
    pub message: Option<Message>,
}

/// Where the event came from: a user chat, a group, or a room.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub room_id: Option<String>,
}

impl Source {
    /// Stable key for the conversation this event belongs to.
    pub fn chat_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or(self.room_id.as_deref())
            .or(self.user_id.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<String>,
}

/// Outgoing reply message, serialized in the Messaging API's shape.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum OutgoingMessage {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image")]
    #[serde(rename_all = "camelCase")]
    Image {
        original_content_url: String,
        preview_image_url: String,
    },
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutgoingMessage::Text { text: text.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        let url = url.into();
        OutgoingMessage::Image {
            preview_image_url: url.clone(),
            original_content_url: url,
        }
    }
}
