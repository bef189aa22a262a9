pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::occupation::handlers as occupation;
use crate::recommendation::handlers as recommendation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/progress", get(session::handle_progress))
        .route("/api/v1/quiz", post(recommendation::handle_quiz))
        // Occupation lookups
        .route("/api/v1/careers/:name", get(occupation::handle_career_details))
        .route(
            "/api/v1/careers/:name/certifications",
            get(occupation::handle_certifications),
        )
        .route("/api/v1/volunteer", get(occupation::handle_volunteer))
        .route("/api/v1/explorer", get(occupation::handle_explorer))
        // Counselor chat
        .route(
            "/api/v1/chat/:career",
            get(chat::handle_chat_page).post(chat::handle_chat_message),
        )
        .route("/api/v1/chat/:career/reset", post(chat::handle_chat_reset))
        .with_state(state)
}
