use serde::{Deserialize, Serialize};
use crate::models::domain::{DashboardData, Match, Member};

/// Page heading shown above the profile and match columns
pub const DASHBOARD_TITLE: &str = "Talent Pool Matchmaker Dashboard";

/// Upper bound of `matching_score` values
///
/// Scores are supplied externally and nothing fixes their range, so the
/// scale is configured rather than inferred. 100 and 10 are both in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreScale(u32);

impl ScoreScale {
    pub const PERCENT: ScoreScale = ScoreScale(100);

    /// Returns `None` for a zero scale
    pub fn new(max: u32) -> Option<Self> {
        (max > 0).then_some(Self(max))
    }

    pub fn max(&self) -> u32 {
        self.0
    }

    /// Score as a 0-100 progress value
    pub fn percent(&self, score: u32) -> u8 {
        let pct = u64::from(score) * 100 / u64::from(self.0);
        pct.min(100) as u8
    }
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self::PERCENT
    }
}

/// Avatar fallback: first character of every space-separated word
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Profile column card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCard {
    pub name: String,
    pub image_url: String,
    pub initials: String,
    pub headline: String,
    pub key_skills: Vec<String>,
    pub business_goals: Vec<String>,
    pub interests: Vec<String>,
    pub hobbies: Vec<String>,
    pub location: String,
    pub communication: String,
}

impl From<&Member> for MemberCard {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            image_url: member.image_url.clone(),
            initials: initials(&member.name),
            headline: format!("{} | {}", member.industry, member.career_stage),
            key_skills: member.key_skills.clone(),
            business_goals: member.business_goals.clone(),
            interests: member.interests.clone(),
            hobbies: member.hobbies.clone(),
            location: member.location.clone(),
            communication: format!("Prefers {}", member.preferred_communication),
        }
    }
}

/// One card in the match column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCard {
    pub slot: usize,
    pub name: String,
    pub image_url: String,
    pub initials: String,
    pub experience_level: String,
    pub score: u32,
    pub score_percent: u8,
    pub explanation: String,
    pub complementary_skills: Vec<String>,
    pub shared_interests: Vec<String>,
    pub potential_collaboration: String,
    pub location: String,
    pub geographical_synergy: String,
    pub communication_compatibility: String,
}

impl MatchCard {
    pub fn new(slot: usize, m: &Match, scale: ScoreScale) -> Self {
        Self {
            slot,
            name: m.name.clone(),
            image_url: m.image_url.clone(),
            initials: initials(&m.name),
            experience_level: m.experience_level.clone(),
            score: m.matching_score,
            score_percent: scale.percent(m.matching_score),
            explanation: m.explanation.clone(),
            complementary_skills: m.complementary_skills.clone(),
            shared_interests: m.shared_interests.clone(),
            potential_collaboration: m.potential_collaboration.clone(),
            location: m.location.clone(),
            geographical_synergy: m.geographical_synergy.clone(),
            communication_compatibility: m.communication_compatibility.clone(),
        }
    }
}

/// Card-ready dashboard: profile column plus match column in slot order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub profile: MemberCard,
    pub matches: Vec<MatchCard>,
}

impl DashboardView {
    pub fn build(data: &DashboardData, scale: ScoreScale) -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            profile: MemberCard::from(&data.member),
            matches: data
                .slots()
                .map(|(slot, m)| MatchCard::new(slot, m, scale))
                .collect(),
        }
    }
}
