// Core resolution exports
pub mod defaults;
pub mod fields;
pub mod resolver;

pub use defaults::{default_dashboard, default_matches, default_member};
pub use fields::{FieldDescriptor, FieldKind, MATCH_FIELDS, MEMBER_FIELDS, slot_key, split_list, parse_score};
pub use resolver::{ParamSource, resolve, resolve_defaults, recognized_keys};
