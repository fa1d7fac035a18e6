use serde::{Deserialize, Serialize};

/// Number of match slots shown on the dashboard
pub const MATCH_SLOTS: usize = 3;

/// The viewing member's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub image_url: String,
    pub key_skills: Vec<String>,
    pub industry: String,
    pub business_goals: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
    pub hobbies: Vec<String>,
    pub career_stage: String,
    pub preferred_communication: String,
}

/// A candidate collaborator paired with the member
///
/// `matching_score` is supplied by the caller (or defaulted), never computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub name: String,
    pub image_url: String,
    pub matching_score: u32,
    pub explanation: String,
    pub complementary_skills: Vec<String>,
    pub potential_collaboration: String,
    pub shared_interests: Vec<String>,
    pub location: String,
    pub geographical_synergy: String,
    pub experience_level: String,
    pub communication_compatibility: String,
}

/// Everything the dashboard shows: one member and the three match slots in slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub member: Member,
    pub matches: [Match; MATCH_SLOTS],
}

impl DashboardData {
    /// Matches paired with their 1-based slot number
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Match)> {
        self.matches.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}
