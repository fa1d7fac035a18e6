//! Talent Matchmaker - matchmaking dashboard service
//!
//! Resolves a member profile and three ranked match slots from optional
//! query parameters, falling back to built-in defaults field by field.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{resolve, resolve_defaults, ParamSource};
pub use models::{DashboardData, DashboardState, DashboardView, Match, Member, ScoreScale};
pub use services::DashboardLoader;
