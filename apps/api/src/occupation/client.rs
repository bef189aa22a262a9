//! Occupation API client. The only module that talks to CareerOneStop.
//!
//! Each method issues exactly one request and never retries. A non-success
//! status is logged and reported as "no data"; only transport and decoding
//! failures surface as `UpstreamError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::occupation::models::{
    CertificationResponse, DetailResponse, OccupationSummary, SearchResponse, VideoResponse,
};
use crate::occupation::view::{Certification, OccupationMatch};

/// Search results requested per keyword query.
const SEARCH_PAGE_SIZE: &str = "10";
/// Certifications requested per title.
const CERTIFICATION_LIMIT: &str = "5";

/// Sections requested from the occupation detail endpoint.
const DETAIL_FLAGS: &[(&str, bool)] = &[
    ("training", true),
    ("interest", false),
    ("videos", true),
    ("tasks", false),
    ("dwas", true),
    ("wages", true),
    ("alternateOnetTitles", false),
    ("projectedEmployment", true),
    ("ooh", true),
    ("stateLMILinks", false),
    ("relatedOnetTitles", true),
    ("skills", false),
    ("knowledge", false),
    ("ability", false),
    ("trainingPrograms", true),
    ("industryEmpPattern", false),
    ("toolsAndTechnology", false),
    ("workValues", false),
    ("enableMetaData", true),
];

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid occupation API URL: {0}")]
    InvalidUrl(String),
}

/// Occupation data source. Implement this to swap the upstream without
/// touching the normalizer, recommendation filter or handlers.
///
/// Carried in `AppState` as `Arc<dyn OccupationApi>`.
#[async_trait]
pub trait OccupationApi: Send + Sync {
    /// Keyword search. A non-success status yields an empty list.
    async fn search(&self, keyword: &str) -> Result<Vec<OccupationMatch>, UpstreamError>;

    /// Raw detail record for one occupation code at a location.
    async fn fetch_detail(
        &self,
        code: &str,
        location: &str,
    ) -> Result<Option<DetailResponse>, UpstreamError>;

    /// URL of the first video the dedicated video endpoint lists for a code.
    async fn fetch_video_url(&self, code: &str) -> Result<Option<String>, UpstreamError>;

    /// Certifications related to an occupation title.
    async fn certifications(&self, title: &str) -> Result<Vec<Certification>, UpstreamError>;
}

/// CareerOneStop web API client.
#[derive(Clone)]
pub struct CareerOneStopClient {
    client: Client,
    base_url: String,
    user_id: String,
    token: String,
}

impl CareerOneStopClient {
    pub fn new(
        base_url: String,
        user_id: String,
        token: String,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            user_id,
            token,
        })
    }

    /// Builds `{base_url}/{segments...}` with every segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
    }

    /// Sends the request; `Ok(None)` for any non-success status.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<Option<T>, UpstreamError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Occupation API {operation} returned {status}: {body}");
            return Ok(None);
        }

        debug!("Occupation API {operation} returned {status}");
        Ok(Some(response.json::<T>().await?))
    }
}

#[async_trait]
impl OccupationApi for CareerOneStopClient {
    async fn search(&self, keyword: &str) -> Result<Vec<OccupationMatch>, UpstreamError> {
        let url = self.endpoint(&[
            "occupation",
            self.user_id.as_str(),
            keyword,
            "N",
            "0",
            SEARCH_PAGE_SIZE,
        ])?;

        let response: Option<SearchResponse> = self.fetch_json(self.get(url), "search").await?;

        Ok(response
            .and_then(|r| r.occupation_list)
            .unwrap_or_default()
            .into_iter()
            .filter_map(into_match)
            .collect())
    }

    async fn fetch_detail(
        &self,
        code: &str,
        location: &str,
    ) -> Result<Option<DetailResponse>, UpstreamError> {
        let url = self.endpoint(&["occupation", self.user_id.as_str(), code, location])?;
        let request = self.get(url).query(DETAIL_FLAGS);
        self.fetch_json(request, "detail").await
    }

    async fn fetch_video_url(&self, code: &str) -> Result<Option<String>, UpstreamError> {
        let url = self.endpoint(&["video", self.user_id.as_str(), code])?;
        let response: Option<VideoResponse> = self.fetch_json(self.get(url), "video").await?;

        Ok(response
            .and_then(|r| r.videos)
            .and_then(|videos| videos.into_iter().next())
            .and_then(|video| video.url)
            .filter(|url| !url.trim().is_empty()))
    }

    async fn certifications(&self, title: &str) -> Result<Vec<Certification>, UpstreamError> {
        let mut segments = vec!["certificationfinder", self.user_id.as_str(), title];
        segments.extend(["0"; 9]);
        segments.push(CERTIFICATION_LIMIT);
        let url = self.endpoint(&segments)?;

        let response: Option<CertificationResponse> =
            self.fetch_json(self.get(url), "certifications").await?;

        Ok(response
            .and_then(|r| r.cert_list)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|record| {
                let name = record.name.filter(|n| !n.trim().is_empty())?;
                Some(Certification {
                    name,
                    organization: record.organization.unwrap_or_default(),
                    url: record.url.filter(|u| !u.trim().is_empty()),
                })
            })
            .collect())
    }
}

/// Search hits without a title or code cannot be followed up, so they are dropped.
fn into_match(summary: OccupationSummary) -> Option<OccupationMatch> {
    Some(OccupationMatch {
        title: summary.onet_title.filter(|t| !t.trim().is_empty())?,
        code: summary.onet_code.filter(|c| !c.trim().is_empty())?,
        description: summary.occupation_description.unwrap_or_default(),
    })
}
