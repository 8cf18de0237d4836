use std::collections::HashMap;

use tokio::sync::RwLock;

/// In-memory map from chat id to the PGN of that chat's active puzzle.
/// The notation engine itself is stateless; the current-puzzle bookkeeping
/// lives here, in the webhook collaborator.
#[derive(Default)]
pub struct Sessions {
    active: RwLock<HashMap<String, String>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or replace) the active puzzle for a chat.
    pub async fn set_puzzle(&self, chat_id: &str, pgn: String) {
        self.active.write().await.insert(chat_id.to_string(), pgn);
    }

    /// PGN of the chat's active puzzle, if any.
    pub async fn active_pgn(&self, chat_id: &str) -> Option<String> {
        self.active.read().await.get(chat_id).cloned()
    }

    /// Clear the active puzzle once it has been solved.
    pub async fn clear(&self, chat_id: &str) {
        self.active.write().await.remove(chat_id);
    }
}
