//! UI-ready shapes produced from upstream occupation data.
//! Only snake_case keys of our own choosing appear here.

use serde::{Deserialize, Serialize};

/// One search hit: the minimum needed to pick an occupation and fetch its detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationMatch {
    pub title: String,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCareer {
    pub code: String,
    pub title: String,
}

/// Flattened career detail view. Every field carries a value or a
/// "not available" sentinel; only `video_url` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerView {
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub education_required: String,
    pub daily_tasks: Vec<String>,
    pub growth_potential: String,
    pub growth_projections: String,
    pub related_careers: Vec<RelatedCareer>,
    pub training_programs: Vec<String>,
    pub volunteer_link: String,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub organization: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerOpportunity {
    pub title: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    pub age_requirement: String,
    pub commitment: String,
    pub link: String,
}
