//! Career lookups used by the route layer: search → detail → normalize.
//!
//! Every upstream failure degrades here. Callers get `None` or an empty list,
//! never an error.

use tracing::{info, warn};

use crate::occupation::client::OccupationApi;
use crate::occupation::normalizer::normalize;
use crate::occupation::view::{CareerView, Certification, VolunteerOpportunity};

/// Resolves a career title (or an O*NET code) to its normalized view.
pub async fn get_career_view(
    api: &dyn OccupationApi,
    title_or_code: &str,
    location: &str,
) -> Option<CareerView> {
    let title_or_code = title_or_code.trim();
    if title_or_code.is_empty() {
        return None;
    }

    let code = if is_onet_code(title_or_code) {
        title_or_code.to_string()
    } else {
        match api.search(title_or_code).await {
            Ok(matches) => matches.into_iter().next()?.code,
            Err(e) => {
                warn!("Career search for '{title_or_code}' failed: {e}");
                return None;
            }
        }
    };

    let dedicated_video = match api.fetch_video_url(&code).await {
        Ok(url) => url,
        Err(e) => {
            warn!("Video lookup for {code} failed: {e}");
            None
        }
    };

    let response = match api.fetch_detail(&code, location).await {
        Ok(Some(response)) => response,
        Ok(None) => return None,
        Err(e) => {
            warn!("Detail fetch for {code} at {location} failed: {e}");
            return None;
        }
    };

    let view = normalize(&response, location, dedicated_video);
    if view.is_none() {
        info!("No occupation record for {code} at {location}");
    }
    view
}

pub async fn get_certifications(api: &dyn OccupationApi, title: &str) -> Vec<Certification> {
    match api.certifications(title.trim()).await {
        Ok(certifications) => certifications,
        Err(e) => {
            warn!("Certification lookup for '{title}' failed: {e}");
            Vec::new()
        }
    }
}

/// Sample volunteer opportunities around a ZIP code for a career.
///
/// Empty when the ZIP is malformed or the career has no occupation record.
pub async fn get_volunteer_opportunities(
    api: &dyn OccupationApi,
    career: &str,
    zip_code: &str,
    radius: u32,
) -> Vec<VolunteerOpportunity> {
    if !is_valid_zip(zip_code) {
        info!("Rejecting volunteer search with malformed ZIP '{zip_code}'");
        return Vec::new();
    }

    let Some(view) = get_career_view(api, career, zip_code).await else {
        return Vec::new();
    };

    volunteer_opportunities(career, zip_code, radius, &view.volunteer_link)
}

pub fn volunteer_opportunities(
    career: &str,
    zip_code: &str,
    radius: u32,
    link: &str,
) -> Vec<VolunteerOpportunity> {
    let nearby = format!("Within {radius} miles of {zip_code}");
    vec![
        VolunteerOpportunity {
            title: format!("Volunteer {career} Assistant"),
            organization: "Local Tech Community Center".to_string(),
            description: format!(
                "Help with {career} related activities and projects. Great opportunity to gain hands-on experience and build your portfolio."
            ),
            location: nearby.clone(),
            age_requirement: "16+".to_string(),
            commitment: "4-8 hours/week".to_string(),
            link: link.to_string(),
        },
        VolunteerOpportunity {
            title: format!("{career} Mentorship Program"),
            organization: "Tech Education Initiative".to_string(),
            description: format!(
                "Share your knowledge and mentor aspiring {career}s. Help others learn and grow in the field."
            ),
            location: nearby,
            age_requirement: "18+".to_string(),
            commitment: "2-4 hours/week".to_string(),
            link: link.to_string(),
        },
        VolunteerOpportunity {
            title: format!("Open Source {career} Contributor"),
            organization: "Open Source Community".to_string(),
            description: format!(
                "Contribute to open source projects related to {career}. Work with a team of developers and make an impact."
            ),
            location: "Remote".to_string(),
            age_requirement: "18+".to_string(),
            commitment: "Flexible".to_string(),
            link: link.to_string(),
        },
    ]
}

/// `NNNNN` or `NNNNN-NNNN`.
pub fn is_valid_zip(zip_code: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match zip_code.split_once('-') {
        Some((base, plus4)) => base.len() == 5 && plus4.len() == 4 && all_digits(base) && all_digits(plus4),
        None => zip_code.len() == 5 && all_digits(zip_code),
    }
}

/// O*NET-SOC codes look like `15-1252.00` (the `.NN` suffix is optional).
pub fn is_onet_code(value: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let Some((major, rest)) = value.split_once('-') else {
        return false;
    };
    let (minor, detail) = match rest.split_once('.') {
        Some((minor, detail)) => (minor, Some(detail)),
        None => (rest, None),
    };
    major.len() == 2
        && all_digits(major)
        && minor.len() == 4
        && all_digits(minor)
        && detail.map_or(true, |d| d.len() == 2 && all_digits(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupation::testing::StubOccupationApi;
    use serde_json::json;

    fn detail(title: &str) -> serde_json::Value {
        json!({
            "RecordCount": 1,
            "OccupationDetail": [{
                "OnetTitle": title,
                "COSVideoURL": "https://cos.example/v.mp4"
            }]
        })
    }

    #[test]
    fn test_zip_validation() {
        assert!(is_valid_zip("95747"));
        assert!(is_valid_zip("95747-1234"));
        assert!(!is_valid_zip("9574"));
        assert!(!is_valid_zip("95747-12"));
        assert!(!is_valid_zip("abcde"));
        assert!(!is_valid_zip(""));
    }

    #[test]
    fn test_onet_code_detection() {
        assert!(is_onet_code("15-1252.00"));
        assert!(is_onet_code("15-1252"));
        assert!(!is_onet_code("Software Developer"));
        assert!(!is_onet_code("15-12.00"));
        assert!(!is_onet_code("Full-Stack Developer"));
    }

    #[tokio::test]
    async fn test_view_by_title_uses_first_search_hit() {
        let api = StubOccupationApi::default()
            .with_search(&[("Software Developers", "15-1252.00"), ("Web Developers", "15-1254.00")])
            .with_detail("15-1252.00", detail("Software Developers"))
            .with_detail("15-1254.00", detail("Web Developers"));

        let view = get_career_view(&api, "Software Developer", "95747").await.unwrap();
        assert_eq!(view.title, "Software Developers");
        assert_eq!(api.detail_calls(), vec![("15-1252.00".to_string(), "95747".to_string())]);
    }

    #[tokio::test]
    async fn test_view_by_code_skips_search() {
        let api = StubOccupationApi::default().with_detail("15-1252.00", detail("Software Developers"));

        let view = get_career_view(&api, "15-1252.00", "10001").await;
        assert!(view.is_some());
        assert!(api.search_calls().is_empty());
    }

    #[tokio::test]
    async fn test_dedicated_video_wins_over_record_field() {
        let api = StubOccupationApi::default()
            .with_detail("15-1252.00", detail("Software Developers"))
            .with_video("15-1252.00", "https://video.example/dedicated");

        let view = get_career_view(&api, "15-1252.00", "95747").await.unwrap();
        assert_eq!(view.video_url.as_deref(), Some("https://video.example/dedicated"));
    }

    #[tokio::test]
    async fn test_failed_video_lookup_is_silent() {
        let api = StubOccupationApi::default()
            .with_detail("15-1252.00", detail("Software Developers"))
            .failing_videos();

        let view = get_career_view(&api, "15-1252.00", "95747").await.unwrap();
        assert_eq!(view.video_url.as_deref(), Some("https://cos.example/v.mp4"));
    }

    #[tokio::test]
    async fn test_unknown_career_is_none() {
        let api = StubOccupationApi::default();
        assert!(get_career_view(&api, "Astronaut Chef", "95747").await.is_none());
    }

    #[tokio::test]
    async fn test_search_failure_is_none() {
        let api = StubOccupationApi::default().failing_search();
        assert!(get_career_view(&api, "Software Developer", "95747").await.is_none());
    }

    #[tokio::test]
    async fn test_volunteer_opportunities_link_to_view() {
        let api = StubOccupationApi::default()
            .with_search(&[("Data Scientists", "15-2051.00")])
            .with_detail("15-2051.00", detail("Data Scientists"));

        let opportunities = get_volunteer_opportunities(&api, "Data Scientist", "95747", 25).await;
        assert_eq!(opportunities.len(), 3);
        assert_eq!(opportunities[0].title, "Volunteer Data Scientist Assistant");
        assert_eq!(opportunities[0].location, "Within 25 miles of 95747");
        assert_eq!(opportunities[2].location, "Remote");
        assert!(opportunities
            .iter()
            .all(|o| o.link == "https://www.volunteermatch.org/search/?l=95747&k=Data+Scientists&v=true"));
    }

    #[tokio::test]
    async fn test_volunteer_search_rejects_bad_zip_without_calls() {
        let api = StubOccupationApi::default();
        let opportunities = get_volunteer_opportunities(&api, "Data Scientist", "95", 25).await;
        assert!(opportunities.is_empty());
        assert!(api.search_calls().is_empty());
    }
}
