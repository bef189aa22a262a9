//! Recommendation Filter: quiz answers in, up to seven career titles out.
//!
//! Algorithm:
//! 1. Expand each answer through its lookup table (or fixed suffix)
//! 2. Search the occupation API once with the four expanded answers joined
//! 3. Preferred titles first, then unseen upstream titles in upstream order
//! 4. Keep in-domain titles, truncate to 7; if none survive, take the
//!    unfiltered list instead
//!
//! A failed search yields the first 7 preferred titles.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::occupation::client::OccupationApi;
use crate::recommendation::lookup::{
    expand, is_in_domain, INTEREST_PHRASES, PERSONALITY_SUFFIX, PREFERRED_TITLES, SKILL_PHRASES,
    STRENGTHS_SUFFIX,
};

pub const MAX_RECOMMENDATIONS: usize = 7;

/// The four free-text quiz fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub personality: String,
}

impl QuizAnswers {
    /// Answers rewritten into descriptive phrases for the search query.
    pub fn expanded(&self) -> QuizAnswers {
        QuizAnswers {
            interests: expand(INTEREST_PHRASES, &self.interests).to_string(),
            strengths: format!("{}{STRENGTHS_SUFFIX}", self.strengths),
            skills: expand(SKILL_PHRASES, &self.skills).to_string(),
            personality: format!("{}{PERSONALITY_SUFFIX}", self.personality),
        }
    }

    pub fn is_blank(&self) -> bool {
        [&self.interests, &self.strengths, &self.skills, &self.personality]
            .iter()
            .all(|answer| answer.trim().is_empty())
    }

    pub fn search_query(&self) -> String {
        format!(
            "{} {} {} {}",
            self.interests, self.strengths, self.skills, self.personality
        )
    }
}

/// Full pipeline, including the single upstream search.
pub async fn recommend_careers(api: &dyn OccupationApi, answers: &QuizAnswers) -> Vec<String> {
    let query = answers.expanded().search_query();
    debug!("Recommendation search query: {query}");

    match api.search(&query).await {
        Ok(matches) => rank(matches.into_iter().map(|m| m.title)),
        Err(e) => {
            warn!("Recommendation search failed, using preferred titles: {e}");
            fallback()
        }
    }
}

/// Deterministic ranking over the upstream titles, in the order they arrived.
pub fn rank(upstream_titles: impl IntoIterator<Item = String>) -> Vec<String> {
    rank_with(PREFERRED_TITLES, upstream_titles)
}

fn rank_with(
    preferred: &[&str],
    upstream_titles: impl IntoIterator<Item = String>,
) -> Vec<String> {
    let mut combined: Vec<String> = preferred.iter().map(|t| t.to_string()).collect();
    for title in upstream_titles {
        if !combined.contains(&title) {
            combined.push(title);
        }
    }

    let filtered: Vec<String> = combined
        .iter()
        .filter(|title| is_in_domain(title))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    if filtered.is_empty() {
        combined.truncate(MAX_RECOMMENDATIONS);
        return combined;
    }
    filtered
}

pub fn fallback() -> Vec<String> {
    PREFERRED_TITLES
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupation::testing::StubOccupationApi;

    fn answers() -> QuizAnswers {
        QuizAnswers {
            interests: "data".to_string(),
            strengths: "problem solving".to_string(),
            skills: "database".to_string(),
            personality: "analytical".to_string(),
        }
    }

    #[test]
    fn test_expanded_query() {
        assert_eq!(
            answers().expanded().search_query(),
            "data science, data analytics, big data \
             problem solving in technology and programming \
             SQL, NoSQL, MongoDB, PostgreSQL \
             analytical in a technology environment"
        );
    }

    #[test]
    fn test_unknown_answers_pass_through() {
        let quiz = QuizAnswers {
            interests: "oceanography".to_string(),
            skills: "sailing".to_string(),
            ..QuizAnswers::default()
        };
        let expanded = quiz.expanded();
        assert_eq!(expanded.interests, "oceanography");
        assert_eq!(expanded.skills, "sailing");
    }

    #[test]
    fn test_is_blank_only_when_every_answer_is_blank() {
        assert!(QuizAnswers::default().is_blank());
        let partial = QuizAnswers {
            skills: " ".to_string(),
            personality: "curious".to_string(),
            ..QuizAnswers::default()
        };
        assert!(!partial.is_blank());
    }

    #[test]
    fn test_rank_preferred_titles_come_first() {
        let ranked = rank(vec!["Data Warehousing Specialists".to_string()]);
        assert_eq!(ranked, fallback());
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_rank_skips_duplicates_of_preferred_titles() {
        let ranked = rank(vec!["Software Developer".to_string()]);
        assert_eq!(ranked.iter().filter(|t| *t == "Software Developer").count(), 1);
    }

    #[test]
    fn test_rank_appends_discoveries_in_upstream_order() {
        let ranked = rank_with(
            &["Software Developer", "Chef"],
            vec![
                "Web Developers".to_string(),
                "Bakers".to_string(),
                "Computer Programmers".to_string(),
            ],
        );
        assert_eq!(
            ranked,
            vec!["Software Developer", "Web Developers", "Computer Programmers"]
        );
    }

    #[test]
    fn test_rank_without_domain_matches_uses_unfiltered_list() {
        let upstream = (0..10).map(|i| format!("Baker {i}"));
        let ranked = rank_with(&["Chef", "Florist"], upstream);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert_eq!(&ranked[..3], &["Chef", "Florist", "Baker 0"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let upstream = || {
            vec![
                "Web Developers".to_string(),
                "Bakers".to_string(),
                "Computer Programmers".to_string(),
            ]
        };
        assert_eq!(rank(upstream()), rank(upstream()));
    }

    #[test]
    fn test_rank_never_exceeds_limit() {
        let many = (0..50).map(|i| format!("Software Role {i}"));
        assert!(rank(many).len() <= MAX_RECOMMENDATIONS);
    }

    #[tokio::test]
    async fn test_recommend_issues_exactly_one_search() {
        let api = StubOccupationApi::default().with_search(&[
            ("Database Architects", "15-1243.00"),
            ("Bakers", "51-3011.00"),
        ]);

        let titles = recommend_careers(&api, &answers()).await;
        assert_eq!(titles.len(), MAX_RECOMMENDATIONS);
        assert_eq!(titles[0], "Software Developer");

        let calls = api.search_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("data science, data analytics, big data"));
    }

    #[tokio::test]
    async fn test_recommend_falls_back_on_search_failure() {
        let api = StubOccupationApi::default().failing_search();
        let titles = recommend_careers(&api, &answers()).await;
        assert_eq!(
            titles,
            vec![
                "Software Developer",
                "Data Scientist",
                "Machine Learning Engineer",
                "DevOps Engineer",
                "Cloud Architect",
                "Cybersecurity Analyst",
                "Full Stack Developer",
            ]
        );
    }

    #[tokio::test]
    async fn test_recommend_with_empty_search_results() {
        let api = StubOccupationApi::default();
        let titles = recommend_careers(&api, &answers()).await;
        assert_eq!(titles, fallback());
    }
}
