use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::occupation::catalog::{by_category, CatalogCategory};
use crate::occupation::service::{
    get_career_view, get_certifications, get_volunteer_opportunities,
};
use crate::occupation::view::{CareerView, Certification, VolunteerOpportunity};
use crate::session::progress::Badge;
use crate::session::{Session, SessionQuery};
use crate::state::AppState;

pub const DEFAULT_RADIUS_MILES: u32 = 25;

#[derive(Debug, Default, Deserialize)]
pub struct CareerQuery {
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub session_id: Uuid,
    pub career: String,
    pub career_data: CareerView,
}

/// GET /api/v1/careers/:name
///
/// `name` is URL-friendly: dashes stand in for spaces.
pub async fn handle_career_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(session_query): Query<SessionQuery>,
    Query(query): Query<CareerQuery>,
) -> Result<Json<CareerResponse>, AppError> {
    let mut session = Session::load(state.sessions.as_ref(), session_query.session_id).await?;
    session.state.progress.award_badge(Badge::CareerResearched);
    session.state.progress.complete_step("career");

    let career = name.replace('-', " ");
    let location = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(state.config.default_location.as_str());

    let view = get_career_view(state.occupations.as_ref(), &career, location).await;
    let session_id = session.save(state.sessions.as_ref()).await?;

    let career_data = view.ok_or_else(|| AppError::NotFound(format!("Career '{career}'")))?;
    Ok(Json(CareerResponse {
        session_id,
        career,
        career_data,
    }))
}

#[derive(Debug, Serialize)]
pub struct CertificationsResponse {
    pub career: String,
    pub certifications: Vec<Certification>,
}

/// GET /api/v1/careers/:name/certifications
pub async fn handle_certifications(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<CertificationsResponse> {
    let career = name.replace('-', " ");
    let certifications = get_certifications(state.occupations.as_ref(), &career).await;
    Json(CertificationsResponse {
        career,
        certifications,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct VolunteerQuery {
    pub career: Option<String>,
    pub zip_code: Option<String>,
    pub radius: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct VolunteerResponse {
    pub session_id: Uuid,
    pub career: String,
    pub zip_code: String,
    pub radius: u32,
    pub opportunities: Vec<VolunteerOpportunity>,
}

/// GET /api/v1/volunteer
///
/// Without a career, sends the user back to their progress. Without a ZIP
/// code, back to the career page.
pub async fn handle_volunteer(
    State(state): State<AppState>,
    Query(session_query): Query<SessionQuery>,
    Query(query): Query<VolunteerQuery>,
) -> Result<Response, AppError> {
    let session_id = session_query.session_id;
    let Some(career) = present(query.career) else {
        return Ok(Redirect::to(&app_path(&["progress"], session_id)?).into_response());
    };
    let Some(zip_code) = present(query.zip_code) else {
        let slug = career.replace(' ', "-");
        return Ok(Redirect::to(&app_path(&["careers", &slug], session_id)?).into_response());
    };
    let radius = query.radius.unwrap_or(DEFAULT_RADIUS_MILES);

    let mut session = Session::load(state.sessions.as_ref(), session_id).await?;
    session.state.progress.award_badge(Badge::OpportunityFound);
    session.state.progress.complete_step("volunteer");

    let opportunities =
        get_volunteer_opportunities(state.occupations.as_ref(), &career, &zip_code, radius).await;
    let session_id = session.save(state.sessions.as_ref()).await?;

    Ok(Json(VolunteerResponse {
        session_id,
        career,
        zip_code,
        radius,
        opportunities,
    })
    .into_response())
}

/// GET /api/v1/explorer
pub async fn handle_explorer() -> Json<Vec<CatalogCategory>> {
    Json(by_category())
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Path (plus `session_id` query) under `/api/v1` with each segment escaped.
fn app_path(segments: &[&str], session_id: Option<Uuid>) -> anyhow::Result<String> {
    let mut url = Url::parse("http://localhost/api/v1")?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("redirect base cannot hold a path"))?
        .extend(segments);
    if let Some(id) = session_id {
        url.query_pairs_mut()
            .append_pair("session_id", &id.to_string());
    }

    Ok(match url.query() {
        Some(q) => format!("{}?{q}", url.path()),
        None => url.path().to_string(),
    })
}
