//! Field descriptor tables
//!
//! Each descriptor names the query key for one field and how its raw string is
//! coerced into the typed record. Fallback values are the fields of the
//! default record a descriptor is applied to: a descriptor only overwrites
//! that value when the input is present, non-empty and coercible.

use crate::models::{Match, Member};

/// Coercion rule plus accessor for the target field
pub enum FieldKind<T> {
    /// Used verbatim
    Text(fn(&mut T) -> &mut String),
    /// Split on `,` without trimming or deduplication
    List(fn(&mut T) -> &mut Vec<String>),
    /// Base-10 integer; unparseable input keeps the fallback
    Score(fn(&mut T) -> &mut u32),
}

pub struct FieldDescriptor<T> {
    pub key: &'static str,
    pub kind: FieldKind<T>,
}

impl<T> FieldDescriptor<T> {
    /// Coerce `raw` into the target field. `raw` must be non-empty.
    pub fn apply(&self, target: &mut T, raw: &str) {
        match self.kind {
            FieldKind::Text(field) => *field(target) = raw.to_string(),
            FieldKind::List(field) => *field(target) = split_list(raw),
            FieldKind::Score(field) => {
                if let Some(score) = parse_score(raw) {
                    *field(target) = score;
                }
            }
        }
    }
}

/// Order-preserving comma split
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Lenient score parse: anything that is not a base-10 `u32` (optional leading `+`) yields `None`
pub fn parse_score(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

/// Query key for a match field in the given 1-based slot, e.g. `match2_score`
pub fn slot_key(slot: usize, suffix: &str) -> String {
    format!("match{}_{}", slot, suffix)
}

pub const MEMBER_FIELDS: &[FieldDescriptor<Member>] = &[
    FieldDescriptor { key: "name", kind: FieldKind::Text(|m: &mut Member| &mut m.name) },
    FieldDescriptor { key: "image_url", kind: FieldKind::Text(|m: &mut Member| &mut m.image_url) },
    FieldDescriptor { key: "key_skills", kind: FieldKind::List(|m: &mut Member| &mut m.key_skills) },
    FieldDescriptor { key: "industry", kind: FieldKind::Text(|m: &mut Member| &mut m.industry) },
    FieldDescriptor { key: "business_goals", kind: FieldKind::List(|m: &mut Member| &mut m.business_goals) },
    FieldDescriptor { key: "interests", kind: FieldKind::List(|m: &mut Member| &mut m.interests) },
    FieldDescriptor { key: "location", kind: FieldKind::Text(|m: &mut Member| &mut m.location) },
    FieldDescriptor { key: "hobbies", kind: FieldKind::List(|m: &mut Member| &mut m.hobbies) },
    FieldDescriptor { key: "career_stage", kind: FieldKind::Text(|m: &mut Member| &mut m.career_stage) },
    FieldDescriptor {
        key: "preferred_communication",
        kind: FieldKind::Text(|m: &mut Member| &mut m.preferred_communication),
    },
];

/// Match fields keyed by suffix; the full key is built with [`slot_key`]
pub const MATCH_FIELDS: &[FieldDescriptor<Match>] = &[
    FieldDescriptor { key: "name", kind: FieldKind::Text(|m: &mut Match| &mut m.name) },
    FieldDescriptor { key: "image_url", kind: FieldKind::Text(|m: &mut Match| &mut m.image_url) },
    FieldDescriptor { key: "score", kind: FieldKind::Score(|m: &mut Match| &mut m.matching_score) },
    FieldDescriptor { key: "explanation", kind: FieldKind::Text(|m: &mut Match| &mut m.explanation) },
    FieldDescriptor {
        key: "complementary_skills",
        kind: FieldKind::List(|m: &mut Match| &mut m.complementary_skills),
    },
    FieldDescriptor {
        key: "collaboration",
        kind: FieldKind::Text(|m: &mut Match| &mut m.potential_collaboration),
    },
    FieldDescriptor {
        key: "shared_interests",
        kind: FieldKind::List(|m: &mut Match| &mut m.shared_interests),
    },
    FieldDescriptor { key: "location", kind: FieldKind::Text(|m: &mut Match| &mut m.location) },
    FieldDescriptor { key: "synergy", kind: FieldKind::Text(|m: &mut Match| &mut m.geographical_synergy) },
    FieldDescriptor { key: "experience", kind: FieldKind::Text(|m: &mut Match| &mut m.experience_level) },
    FieldDescriptor {
        key: "compatibility",
        kind: FieldKind::Text(|m: &mut Match| &mut m.communication_compatibility),
    },
];
