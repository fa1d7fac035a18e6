// Service exports
pub mod loader;

pub use loader::DashboardLoader;
