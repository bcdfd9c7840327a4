//! Router for the chat API

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use super::public;
use crate::api::state::AppState;
use crate::chat::{ChatSession, Responder, Speaker};

type SharedState = Arc<RwLock<AppState>>;

/// Create a fresh, empty chat session and hand back its id. This is
/// the explicit init step: callers hold the id and pass it with every
/// question instead of relying on ambient server-side state.
async fn create_session(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let session_id = Uuid::new_v4().to_string();

    state
        .write()
        .map_err(|_| anyhow!("State lock poisoned"))?
        .sessions
        .insert(session_id.clone(), ChatSession::new());

    tracing::debug!("Created chat session {}", session_id);

    Ok(axum::Json(public::SessionCreatedResponse { session_id }))
}

/// Run one question/answer round against a session
async fn ask(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::AskRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let config = {
        let shared_state = state.read().map_err(|_| anyhow!("State lock poisoned"))?;
        shared_state.config.clone()
    };

    // A missing credential rejects the round before dispatch: the
    // responder is never called and the session gains no entries
    if config.require_session_key && payload.api_key.is_none() {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Missing API key: this server requires a per-session key",
        )
            .into_response());
    }

    // Empty questions never reach the responder
    if payload.question.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, "Question must not be empty").into_response());
    }

    let api_key = payload
        .api_key
        .unwrap_or_else(|| config.openai_api_key.clone());
    let responder = Responder::new(
        &config.openai_api_hostname,
        &config.openai_model,
        &config.system_message,
    );

    // The state lock is not held across the upstream call. A failed
    // call still produces an answer string, so the round below always
    // appends exactly two entries.
    let answer = responder.answer(&payload.question, &api_key).await;

    let transcript = {
        let mut shared_state = state.write().map_err(|_| anyhow!("State lock poisoned"))?;
        let session = shared_state
            .sessions
            .entry(payload.session_id.clone())
            .or_default();
        session.append(Speaker::User, &payload.question);
        session.append(Speaker::Assistant, &answer);
        session.entries().to_vec()
    };

    Ok(axum::Json(public::AskResponse { answer, transcript }).into_response())
}

/// Get a session's transcript for display
async fn transcript(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let shared_state = state.read().map_err(|_| anyhow!("State lock poisoned"))?;

    let Some(session) = shared_state.sessions.get(&id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    Ok(axum::Json(public::TranscriptResponse {
        transcript: session.entries().to_vec(),
    })
    .into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(ask))
        .route("/session", post(create_session))
        .route("/{id}", get(transcript))
}
