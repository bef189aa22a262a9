use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::occupation::service::get_career_view;
use crate::occupation::view::CareerView;
use crate::recommendation::filter::{recommend_careers, QuizAnswers};
use crate::session::progress::Badge;
use crate::session::{Session, SessionQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendedCareer {
    pub title: String,
    /// `None` when the occupation source has no record for the title.
    pub view: Option<CareerView>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub session_id: Uuid,
    pub careers: Vec<String>,
    pub career_data: Vec<RecommendedCareer>,
}

/// POST /api/v1/quiz
///
/// Ranks careers for the submitted answers and looks each one up at the
/// default location. At least one answer must be filled in.
pub async fn handle_quiz(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    Json(answers): Json<QuizAnswers>,
) -> Result<Json<QuizResponse>, AppError> {
    if answers.is_blank() {
        return Err(AppError::Validation(
            "answer at least one quiz question".to_string(),
        ));
    }

    let mut session = Session::load(state.sessions.as_ref(), query.session_id).await?;
    session.state.programming_interest = Some(answers.interests.clone());

    let careers = recommend_careers(state.occupations.as_ref(), &answers).await;
    info!("Quiz produced {} recommendations", careers.len());

    let location = state.config.default_location.as_str();
    let mut career_data = Vec::with_capacity(careers.len());
    for title in &careers {
        let view = get_career_view(state.occupations.as_ref(), title, location).await;
        career_data.push(RecommendedCareer {
            title: title.clone(),
            view,
        });
    }

    session.state.progress.award_badge(Badge::QuizCompleted);
    session.state.progress.complete_step("quiz");
    let session_id = session.save(state.sessions.as_ref()).await?;

    Ok(Json(QuizResponse {
        session_id,
        careers,
        career_data,
    }))
}
