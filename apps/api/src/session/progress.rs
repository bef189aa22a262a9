//! Gamification progress kept per session: badges and completed steps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The four achievements a session can earn. Each is awarded at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Finished the career quiz.
    QuizCompleted,
    /// Sent a message to the career counselor.
    ChatEngaged,
    /// Ran a volunteer opportunity search.
    OpportunityFound,
    /// Opened a career detail page.
    CareerResearched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeInfo {
    pub id: Badge,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Badge {
    pub const ALL: [Badge; 4] = [
        Badge::QuizCompleted,
        Badge::ChatEngaged,
        Badge::OpportunityFound,
        Badge::CareerResearched,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Badge::QuizCompleted => "quiz_completed",
            Badge::ChatEngaged => "chat_engaged",
            Badge::OpportunityFound => "opportunity_found",
            Badge::CareerResearched => "career_researched",
        }
    }

    pub fn info(self) -> BadgeInfo {
        let (name, description, icon) = match self {
            Badge::QuizCompleted => ("Career Explorer", "Completed the career quiz", "🎯"),
            Badge::ChatEngaged => (
                "Career Conversationalist",
                "Had a meaningful chat about careers",
                "💬",
            ),
            Badge::OpportunityFound => ("Opportunity Seeker", "Found a local opportunity", "🔍"),
            Badge::CareerResearched => (
                "Career Researcher",
                "Researched a specific career path",
                "📚",
            ),
        };
        BadgeInfo {
            id: self,
            name,
            description,
            icon,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Badges and steps are sets; the vectors keep award order for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub badges: Vec<Badge>,
    pub completed_steps: Vec<String>,
    pub last_activity: DateTime<Utc>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            badges: Vec::new(),
            completed_steps: Vec::new(),
            last_activity: Utc::now(),
        }
    }
}

impl ProgressState {
    /// Returns true only when this call newly added the badge.
    pub fn award_badge(&mut self, badge: Badge) -> bool {
        if self.badges.contains(&badge) {
            return false;
        }
        self.badges.push(badge);
        debug!("Badge {badge} awarded");
        true
    }

    /// Returns true only when this call newly recorded the step.
    pub fn complete_step(&mut self, step: &str) -> bool {
        if self.completed_steps.iter().any(|s| s == step) {
            return false;
        }
        self.completed_steps.push(step.to_string());
        true
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    pub fn earned_badges(&self) -> Vec<BadgeInfo> {
        self.badges.iter().map(|b| b.info()).collect()
    }
}

#[cfg(test)]
impl ProgressState {
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}
