use crate::storage::KeyValueStore;
use crate::types::Message;

pub const DEFAULT_STORAGE_KEY: &str = "chatMessages";

/// Mirrors the message list into a [`KeyValueStore`] under a single key.
pub struct ChatHistory {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl ChatHistory {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot. Missing, unreadable or corrupt data all mean "no history".
    pub fn load(&self) -> Vec<Message> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, "failed to read chat history: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(key = %self.key, "ignoring corrupt chat history: {err}");
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with the full list. An empty list is never written.
    pub fn save(&self, messages: &[Message]) {
        if messages.is_empty() {
            return;
        }
        let serialized = match serde_json::to_string(messages) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::error!("failed to serialize chat history: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &serialized) {
            tracing::warn!(key = %self.key, "failed to persist chat history: {err}");
        }
    }

    /// Delete the snapshot key outright.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, "failed to delete chat history: {err}");
        }
    }
}
