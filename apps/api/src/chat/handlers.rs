//! Axum route handlers for the career counselor chat.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::context::chat_reply;
use crate::chat::models::ChatTurn;
use crate::errors::AppError;
use crate::session::progress::Badge;
use crate::session::{Session, SessionQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatPageQuery {
    pub initial_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub career: String,
    pub chat_history: Vec<ChatTurn>,
}

/// GET /api/v1/chat/:career
///
/// Returns the history. An `initial_message` starts the conversation, but only
/// while the history is still empty.
pub async fn handle_chat_page(
    State(state): State<AppState>,
    Path(career): Path<String>,
    Query(session_query): Query<SessionQuery>,
    Query(query): Query<ChatPageQuery>,
) -> Result<Json<ChatResponse>, AppError> {
    let mut session = Session::load(state.sessions.as_ref(), session_query.session_id).await?;

    let initial = query
        .initial_message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    if let Some(message) = initial {
        if session.state.chat_history.is_empty() {
            session.state.chat_history.push(ChatTurn::user(message));
            let reply = chat_reply(state.llm.as_ref(), message, &career, &[]).await;
            session.state.chat_history.push(ChatTurn::assistant(reply));
        }
    }

    respond(&state, session, career).await
}

/// POST /api/v1/chat/:career
///
/// Appends the user's message and the counselor's reply. The reply is built
/// from the history as it stood before this message. A blank message is a no-op.
pub async fn handle_chat_message(
    State(state): State<AppState>,
    Path(career): Path<String>,
    Query(session_query): Query<SessionQuery>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let mut session = Session::load(state.sessions.as_ref(), session_query.session_id).await?;
    let message = request.message.trim();

    if !message.is_empty() {
        session.state.progress.award_badge(Badge::ChatEngaged);
        session.state.progress.complete_step("chat");

        let prior_turns = session.state.chat_history.clone();
        session.state.chat_history.push(ChatTurn::user(message));

        let reply = chat_reply(state.llm.as_ref(), message, &career, &prior_turns).await;
        session.state.chat_history.push(ChatTurn::assistant(reply));
    }

    respond(&state, session, career).await
}

/// POST /api/v1/chat/:career/reset
pub async fn handle_chat_reset(
    State(state): State<AppState>,
    Path(career): Path<String>,
    Query(session_query): Query<SessionQuery>,
) -> Result<Json<ChatResponse>, AppError> {
    let mut session = Session::load(state.sessions.as_ref(), session_query.session_id).await?;
    session.state.chat_history.clear();
    respond(&state, session, career).await
}

async fn respond(
    state: &AppState,
    session: Session,
    career: String,
) -> Result<Json<ChatResponse>, AppError> {
    let chat_history = session.state.chat_history.clone();
    let session_id = session.save(state.sessions.as_ref()).await?;
    Ok(Json(ChatResponse {
        session_id,
        career,
        chat_history,
    }))
}
