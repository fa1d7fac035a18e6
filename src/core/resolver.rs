use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::core::defaults::{default_dashboard, default_matches, default_member};
use crate::core::fields::{slot_key, FieldDescriptor, MATCH_FIELDS, MEMBER_FIELDS};
use crate::models::{DashboardData, MATCH_SLOTS};

/// Flat string key/value input, e.g. decoded query parameters
pub trait ParamSource {
    fn param(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, String, S> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Build the dashboard from an optional flat mapping
///
/// Total over every input: missing or empty keys and unparseable scores
/// fall back to the built-in defaults. Always yields three matches in slot order.
pub fn resolve<P>(source: Option<&P>) -> DashboardData
where
    P: ParamSource + ?Sized,
{
    let Some(source) = source else {
        return default_dashboard();
    };

    let mut member = default_member();
    for field in MEMBER_FIELDS {
        apply_present(field, &mut member, source.param(field.key));
    }

    let mut matches = default_matches();
    for (index, m) in matches.iter_mut().enumerate() {
        let slot = index + 1;
        for field in MATCH_FIELDS {
            apply_present(field, m, source.param(&slot_key(slot, field.key)));
        }
    }

    DashboardData { member, matches }
}

/// Dashboard for an absent input source
pub fn resolve_defaults() -> DashboardData {
    resolve::<HashMap<String, String>>(None)
}

/// Every key the resolver reads, member keys first, then slots 1 to 3
pub fn recognized_keys() -> impl Iterator<Item = String> {
    let member = MEMBER_FIELDS.iter().map(|f| f.key.to_string());
    let slots = (1..=MATCH_SLOTS)
        .flat_map(|slot| MATCH_FIELDS.iter().map(move |f| slot_key(slot, f.key)));
    member.chain(slots)
}

#[inline]
fn apply_present<T>(field: &FieldDescriptor<T>, target: &mut T, raw: Option<&str>) {
    if let Some(raw) = raw.filter(|r| !r.is_empty()) {
        field.apply(target, raw);
    }
}
