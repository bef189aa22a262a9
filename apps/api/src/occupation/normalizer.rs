//! Occupation Data Normalizer: flattens one upstream detail record into a `CareerView`.
//!
//! Pure and synchronous: all network calls (including the dedicated video
//! lookup) happen before this runs. Every missing upstream section maps to a
//! fixed sentinel so the view is never partially populated.

use reqwest::Url;
use serde_json::{Map, Value};

use crate::occupation::models::{DetailResponse, Dwa, MediaLink, OccupationDetail, Projection, WageEntry};
use crate::occupation::view::{CareerView, RelatedCareer};

pub const ANNUAL_SALARY_NOT_AVAILABLE: &str =
    "(Annual Salary Data Not Available for this Occupation)";
pub const HOURLY_SALARY_NOT_AVAILABLE: &str =
    "(Hourly Salary Data Not Available for this Occupation)";
pub const MEDIAN_NOT_AVAILABLE: &str = "Data Not Available";
pub const PROJECTION_NOT_AVAILABLE: &str = "Projection Data Not Available for this Occupation";
pub const OUTLOOK_NOT_AVAILABLE: &str = "Growth Outlook Data Not Available for this Occupation";
pub const DESCRIPTION_NOT_AVAILABLE: &str = "Description Not Available for this Occupation";
pub const TITLE_NOT_AVAILABLE: &str = "Untitled Occupation";
pub const EDUCATION_NOT_AVAILABLE: &str = "N/A";

pub const MAX_DAILY_TASKS: usize = 10;
pub const MAX_RELATED_CAREERS: usize = 8;
pub const MAX_TRAINING_PROGRAMS: usize = 10;
/// State-level projection first, then national.
const MAX_PROJECTIONS: usize = 2;

const VOLUNTEER_SEARCH_URL: &str = "https://www.volunteermatch.org/search/";

/// Builds the view for the first record of a detail response.
///
/// Returns `None` when the response holds no records: the occupation does not
/// exist at that location, which is not an error.
pub fn normalize(
    response: &DetailResponse,
    location: &str,
    dedicated_video: Option<String>,
) -> Option<CareerView> {
    if response.record_count.unwrap_or(0) == 0 {
        return None;
    }
    let detail = response.occupation_detail.as_deref()?.first()?;
    Some(normalize_detail(detail, location, dedicated_video))
}

pub fn normalize_detail(
    detail: &OccupationDetail,
    location: &str,
    dedicated_video: Option<String>,
) -> CareerView {
    let title = non_empty(detail.onet_title.as_deref())
        .unwrap_or(TITLE_NOT_AVAILABLE)
        .to_string();

    let wages = detail
        .wages
        .as_ref()
        .and_then(|w| w.state_wages_list.as_deref())
        .unwrap_or_default();
    let projections = detail
        .projections
        .as_ref()
        .and_then(|p| p.projections.as_deref())
        .unwrap_or_default();

    CareerView {
        description: non_empty(detail.onet_description.as_deref())
            .unwrap_or(DESCRIPTION_NOT_AVAILABLE)
            .to_string(),
        salary_range: salary_range(wages),
        education_required: detail
            .education_training
            .as_ref()
            .and_then(|e| non_empty(e.education_title.as_deref()))
            .unwrap_or(EDUCATION_NOT_AVAILABLE)
            .to_string(),
        daily_tasks: daily_tasks(detail.dwas.as_deref().unwrap_or_default()),
        growth_potential: growth_potential(
            detail.bright_outlook.as_deref(),
            detail.bright_outlook_category.as_deref(),
        ),
        growth_projections: growth_projections(projections),
        related_careers: related_careers(detail.related_onet_titles.as_ref()),
        training_programs: training_programs(detail.training_programs.as_deref().unwrap_or_default()),
        volunteer_link: volunteer_link(location, &title),
        video_url: resolve_video(
            dedicated_video.as_deref(),
            detail.cos_video_url.as_deref(),
            detail.multimedia.as_deref().unwrap_or_default(),
        ),
        title,
    }
}

/// `Annual: $<annual>, Hourly: $<hourly>` from the state wage list:
/// entry 0 is annual, entry 1 is hourly.
pub fn salary_range(wages: &[WageEntry]) -> String {
    let (annual, hourly) = match wages {
        [] => (
            ANNUAL_SALARY_NOT_AVAILABLE.to_string(),
            HOURLY_SALARY_NOT_AVAILABLE.to_string(),
        ),
        [only] => (median(only), HOURLY_SALARY_NOT_AVAILABLE.to_string()),
        [annual, hourly, ..] => (median(annual), median(hourly)),
    };
    format!("Annual: ${annual}, Hourly: ${hourly}")
}

fn median(entry: &WageEntry) -> String {
    match &entry.median {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => MEDIAN_NOT_AVAILABLE.to_string(),
    }
}

/// Direction of projected employment change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Increase,
    NoChange,
    Decrease,
}

impl Growth {
    pub fn classify(percent: i64) -> Self {
        match percent {
            p if p > 0 => Growth::Increase,
            0 => Growth::NoChange,
            _ => Growth::Decrease,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Growth::Increase => "increase",
            Growth::NoChange => "not change",
            Growth::Decrease => "decrease",
        }
    }
}

/// One sentence per projection entry (at most two), newline-separated.
pub fn growth_projections(projections: &[Projection]) -> String {
    if projections.is_empty() {
        return PROJECTION_NOT_AVAILABLE.to_string();
    }

    projections
        .iter()
        .take(MAX_PROJECTIONS)
        .map(projection_sentence)
        .collect::<Vec<_>>()
        .join("\n")
}

fn projection_sentence(projection: &Projection) -> String {
    let region = projection.state_name.as_deref().unwrap_or_default().trim();
    match projection.per_cent_change.as_ref().and_then(percent) {
        Some(pct) => format!(
            "We predict the employment for this job to {} by {pct}% in {region}.",
            Growth::classify(pct).verb()
        ),
        None => format!("Projection data for {region} is not available."),
    }
}

/// Whole-number percent, truncated toward zero. `NaN` and infinities are unreadable.
fn percent(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64),
        _ => None,
    }
}

pub fn daily_tasks(dwas: &[Dwa]) -> Vec<String> {
    dwas.iter()
        .take(MAX_DAILY_TASKS)
        .filter_map(|dwa| non_empty(dwa.dwa_title.as_deref()))
        .map(str::to_string)
        .collect()
}

/// First entries of the code → title mapping, upstream order.
pub fn related_careers(related: Option<&Map<String, Value>>) -> Vec<RelatedCareer> {
    let Some(related) = related else {
        return Vec::new();
    };

    related
        .iter()
        .take(MAX_RELATED_CAREERS)
        .map(|(code, title)| RelatedCareer {
            code: code.clone(),
            title: match title {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
        .collect()
}

pub fn growth_potential(outlook: Option<&str>, category: Option<&str>) -> String {
    match (non_empty(outlook), non_empty(category)) {
        (Some(outlook), Some(category)) => {
            format!("{outlook}. This job is/has {category} in employment.")
        }
        (Some(outlook), None) => format!("{outlook}."),
        (None, _) => OUTLOOK_NOT_AVAILABLE.to_string(),
    }
}

/// Upstream training programs, first ten. Non-text entries are skipped.
pub fn training_programs(programs: &[Value]) -> Vec<String> {
    programs
        .iter()
        .take(MAX_TRAINING_PROGRAMS)
        .filter_map(|p| non_empty(p.as_str()))
        .map(str::to_string)
        .collect()
}

/// Dedicated video endpoint, then the record's own video field, then the
/// first multimedia entry. The first non-empty source wins.
pub fn resolve_video(
    dedicated: Option<&str>,
    direct: Option<&str>,
    multimedia: &[MediaLink],
) -> Option<String> {
    non_empty(dedicated)
        .or_else(|| non_empty(direct))
        .or_else(|| multimedia.first().and_then(|m| non_empty(m.url.as_deref())))
        .map(str::to_string)
}

/// Volunteer search link for an occupation near a location. No network call.
pub fn volunteer_link(location: &str, title: &str) -> String {
    Url::parse_with_params(
        VOLUNTEER_SEARCH_URL,
        &[("l", location), ("k", title), ("v", "true")],
    )
    .map(String::from)
    .unwrap_or_else(|_| VOLUNTEER_SEARCH_URL.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
