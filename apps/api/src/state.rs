use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::occupation::client::OccupationApi;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Occupation search/detail client. Default: CareerOneStopClient.
    pub occupations: Arc<dyn OccupationApi>,
    /// Text generation backend for the career counselor chat.
    pub llm: Arc<dyn TextGenerator>,
    /// Per-user session state. Redis when REDIS_URL is set, in-memory otherwise.
    pub sessions: Arc<dyn SessionStore>,
    pub config: Config,
}
