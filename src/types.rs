use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// Label used for this author in the transcript sent to the endpoint.
    pub fn transcript_label(self) -> &'static str {
        match self {
            Author::User => "User",
            Author::Assistant => "Bot",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        }
    }
}

/// One entry in the chat history.
///
/// The serialized shape (`id`, `text`, `isUser`) is the snapshot format kept in
/// local storage, so it must stay stable across releases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub is_user: bool,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_user: true,
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_user: false,
        }
    }

    pub fn author(&self) -> Author {
        if self.is_user {
            Author::User
        } else {
            Author::Assistant
        }
    }
}
