//! Built-in mock dashboard used whenever an input is absent

use crate::models::{DashboardData, Match, Member};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_member() -> Member {
    Member {
        name: "John Doe".to_string(),
        image_url: "https://i.pravatar.cc/150?u=johndoe".to_string(),
        key_skills: strings(&["React", "Node.js", "Python"]),
        industry: "Technology".to_string(),
        business_goals: strings(&["Expand client base", "Increase revenue"]),
        interests: strings(&["AI", "Blockchain", "IoT"]),
        location: "New York, USA".to_string(),
        hobbies: strings(&["Reading", "Hiking", "Photography"]),
        career_stage: "Mid-level".to_string(),
        preferred_communication: "Email".to_string(),
    }
}

pub fn default_matches() -> [Match; 3] {
    [
        Match {
            name: "Alice Smith".to_string(),
            image_url: "https://i.pravatar.cc/150?u=alicesmith".to_string(),
            matching_score: 85,
            explanation: "Strong skill complementarity and shared interests".to_string(),
            complementary_skills: strings(&["UI/UX Design", "Project Management"]),
            potential_collaboration: "Tech startup focused on AI-driven solutions".to_string(),
            shared_interests: strings(&["AI", "IoT"]),
            location: "Boston, USA".to_string(),
            geographical_synergy: "East Coast tech hub proximity".to_string(),
            experience_level: "Senior".to_string(),
            communication_compatibility: "High".to_string(),
        },
        Match {
            name: "Bob Johnson".to_string(),
            image_url: "https://i.pravatar.cc/150?u=bobjohnson".to_string(),
            matching_score: 75,
            explanation: "Complementary industry experience and business goals".to_string(),
            complementary_skills: strings(&["Marketing", "Sales"]),
            potential_collaboration: "B2B SaaS product development".to_string(),
            shared_interests: strings(&["Blockchain"]),
            location: "San Francisco, USA".to_string(),
            geographical_synergy: "Tech industry network".to_string(),
            experience_level: "Executive".to_string(),
            communication_compatibility: "Medium".to_string(),
        },
        Match {
            name: "Emma Davis".to_string(),
            image_url: "https://i.pravatar.cc/150?u=emmadavis".to_string(),
            matching_score: 70,
            explanation: "Shared interests and potential for mentorship".to_string(),
            complementary_skills: strings(&["Data Science", "Machine Learning"]),
            potential_collaboration: "AI research project".to_string(),
            shared_interests: strings(&["AI", "IoT"]),
            location: "Seattle, USA".to_string(),
            geographical_synergy: "Tech hub collaboration".to_string(),
            experience_level: "Senior".to_string(),
            communication_compatibility: "High".to_string(),
        },
    ]
}

pub fn default_dashboard() -> DashboardData {
    DashboardData {
        member: default_member(),
        matches: default_matches(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_non_empty() {
        let dashboard = default_dashboard();
        let member = &dashboard.member;

        for text in [
            &member.name,
            &member.image_url,
            &member.industry,
            &member.location,
            &member.career_stage,
            &member.preferred_communication,
        ] {
            assert!(!text.is_empty());
        }
        for list in [&member.key_skills, &member.business_goals, &member.interests, &member.hobbies] {
            assert!(!list.is_empty());
        }

        for m in &dashboard.matches {
            assert!(!m.name.is_empty());
            assert!(!m.complementary_skills.is_empty());
            assert!(!m.shared_interests.is_empty());
            assert!(m.matching_score > 0);
        }
    }

    #[test]
    fn test_default_slot_order() {
        let names: Vec<_> = default_matches().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Johnson", "Emma Davis"]);
    }
}
