//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::ChatEntry;

#[derive(Deserialize)]
pub struct AskRequest {
    pub session_id: String,
    pub question: String,
    // Per-session key entered by the user. Never stored or logged;
    // required when the server runs with `require_session_key`
    pub api_key: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub transcript: Vec<ChatEntry>,
}

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: Vec<ChatEntry>,
}
