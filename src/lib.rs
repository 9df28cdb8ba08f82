//! Library for the academic planner.
//! Holds the planning store, its derived views, configuration and logging,
//! shared by the `acadplan` CLI and the integration tests.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
