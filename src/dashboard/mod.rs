//! Dashboard composition for request handlers.

mod config;
mod runner;

pub use config::DashboardConfig;
pub use runner::{Dashboard, DashboardView};
