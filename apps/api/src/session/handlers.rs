use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::progress::{Badge, BadgeInfo, ProgressState};
use crate::session::{Session, SessionQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub session_id: Uuid,
    pub progress: ProgressState,
    pub earned_badges: Vec<BadgeInfo>,
    pub all_badges: Vec<BadgeInfo>,
}

/// GET /api/v1/progress
///
/// Landing view: creates the session on first visit.
pub async fn handle_progress(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ProgressResponse>, AppError> {
    let session = Session::load(state.sessions.as_ref(), query.session_id).await?;
    let progress = session.state.progress.clone();
    let session_id = session.save(state.sessions.as_ref()).await?;

    Ok(Json(ProgressResponse {
        session_id,
        earned_badges: progress.earned_badges(),
        all_badges: Badge::ALL.into_iter().map(Badge::info).collect(),
        progress,
    }))
}
