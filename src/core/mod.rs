//! Core planning functionality: data model, store, and derived views

pub mod catalog;
pub mod error;
pub mod grades;
pub mod models;
pub mod planner;
pub mod progress;
pub mod report;
pub mod seed;
pub mod session;
pub mod store;
pub mod transcript;
pub mod views;

pub use error::StoreError;
pub use grades::Grade;
pub use store::{Action, AppState, PlannerStore};

/// Returns the current version of the `academic-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
