use serde::{Deserialize, Serialize};
use std::fmt;

/// Role label sent by the parent renderer that selects the user badge.
pub const USER_ROLE: &str = "user";

/// Which badge a chat message gets next to it.
///
/// The switch is binary: only the exact, case-sensitive label `"user"`
/// selects [`AvatarKind::User`]. Every other label, including empty and
/// unrecognized ones, renders the assistant logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarKind {
    User,
    #[default]
    Assistant,
}

impl AvatarKind {
    /// Resolve the badge for a raw role label. Never fails.
    pub fn from_role(role: &str) -> Self {
        if role == USER_ROLE {
            AvatarKind::User
        } else {
            AvatarKind::Assistant
        }
    }

    /// Lowercase key used as the badge's `data-style` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarKind::User => USER_ROLE,
            AvatarKind::Assistant => "assistant",
        }
    }
}

/// Author of a chat message, as labelled on the wire by the chat backend.
///
/// Parsing is exact-match. Labels outside the known set are kept verbatim
/// in [`MessageRole::Other`] so they serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageRole {
    User,
    Assistant,
    System,
    Function,
    Tool,
    Chatbot,
    Model,
    Other(String),
}

impl MessageRole {
    pub fn parse(s: &str) -> Self {
        match s {
            USER_ROLE => MessageRole::User,
            "assistant" => MessageRole::Assistant,
            "system" => MessageRole::System,
            "function" => MessageRole::Function,
            "tool" => MessageRole::Tool,
            "chatbot" => MessageRole::Chatbot,
            "model" => MessageRole::Model,
            other => MessageRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageRole::User => USER_ROLE,
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
            MessageRole::Function => "function",
            MessageRole::Tool => "tool",
            MessageRole::Chatbot => "chatbot",
            MessageRole::Model => "model",
            MessageRole::Other(label) => label,
        }
    }

    /// Badge shown for this role. Only [`MessageRole::User`] gets the person icon.
    pub fn avatar_kind(&self) -> AvatarKind {
        AvatarKind::from_role(self.as_str())
    }
}

impl From<String> for MessageRole {
    fn from(s: String) -> Self {
        MessageRole::parse(&s)
    }
}

impl From<MessageRole> for String {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
