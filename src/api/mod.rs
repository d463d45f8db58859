use serde::{Deserialize, Serialize};

pub mod chat;

/// Path of the coach completion endpoint, relative to the configured base URL.
pub const CHAT_ENDPOINT_PATH: &str = "api/chat";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}
