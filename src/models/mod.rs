// Model exports
pub mod domain;
pub mod responses;
pub mod view;

pub use domain::{Member, Match, DashboardData, MATCH_SLOTS};
pub use responses::{HealthResponse, DashboardState};
pub use view::{DashboardView, MemberCard, MatchCard, ScoreScale, initials, DASHBOARD_TITLE};
