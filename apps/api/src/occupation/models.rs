//! Upstream occupation API payloads.
//!
//! Every field is optional: CareerOneStop omits or nulls whole sections
//! depending on the occupation and the inclusion flags. Numeric fields are kept
//! as raw `Value`s because the API sends them as numbers or strings.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    pub occupation_list: Option<Vec<OccupationSummary>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OccupationSummary {
    pub onet_title: Option<String>,
    pub onet_code: Option<String>,
    pub occupation_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailResponse {
    pub record_count: Option<u32>,
    pub occupation_detail: Option<Vec<OccupationDetail>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OccupationDetail {
    pub onet_title: Option<String>,
    pub onet_description: Option<String>,
    pub wages: Option<Wages>,
    pub projections: Option<ProjectionSet>,
    pub dwas: Option<Vec<Dwa>>,
    /// Code → title, in the order the API lists them.
    pub related_onet_titles: Option<Map<String, Value>>,
    pub education_training: Option<EducationTraining>,
    pub bright_outlook: Option<String>,
    pub bright_outlook_category: Option<String>,
    pub training_programs: Option<Vec<Value>>,
    #[serde(rename = "COSVideoURL")]
    pub cos_video_url: Option<String>,
    pub multimedia: Option<Vec<MediaLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wages {
    pub state_wages_list: Option<Vec<WageEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WageEntry {
    pub median: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectionSet {
    pub projections: Option<Vec<Projection>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    pub per_cent_change: Option<Value>,
    pub state_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dwa {
    pub dwa_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EducationTraining {
    pub education_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaLink {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoResponse {
    pub videos: Option<Vec<MediaLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificationResponse {
    pub cert_list: Option<Vec<CertificationRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificationRecord {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_response_parses_partial_record() {
        let raw = json!({
            "RecordCount": 1,
            "OccupationDetail": [{
                "OnetTitle": "Software Developers",
                "OnetCode": "15-1252.00",
                "Wages": { "StateWagesList": [{ "Median": "120000" }], "WageYear": "2023" },
                "Dwas": null,
                "COSVideoURL": "https://cdn.example.org/video.mp4",
                "Multimedia": [{ "URL": "https://cdn.example.org/mm.mp4" }]
            }]
        });

        let parsed: DetailResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.record_count, Some(1));
        let detail = &parsed.occupation_detail.unwrap()[0];
        assert_eq!(detail.onet_title.as_deref(), Some("Software Developers"));
        assert!(detail.dwas.is_none());
        assert!(detail.projections.is_none());
        assert_eq!(
            detail.cos_video_url.as_deref(),
            Some("https://cdn.example.org/video.mp4")
        );
        let wages = detail.wages.as_ref().unwrap().state_wages_list.as_ref().unwrap();
        assert_eq!(wages[0].median, Some(json!("120000")));
    }

    #[test]
    fn test_related_titles_keep_upstream_order() {
        let raw = json!({
            "RelatedOnetTitles": {
                "15-1299.08": "Computer Systems Engineers/Architects",
                "15-1211.00": "Computer Systems Analysts",
                "11-3021.00": "Computer and Information Systems Managers"
            }
        });

        let detail: OccupationDetail = serde_json::from_value(raw).unwrap();
        let keys: Vec<&String> = detail.related_onet_titles.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["15-1299.08", "15-1211.00", "11-3021.00"]);
    }

    #[test]
    fn test_search_response_without_list() {
        let parsed: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.occupation_list.is_none());
    }
}
