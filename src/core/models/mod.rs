//! Data models for the academic planner

pub mod completed;
pub mod course;
pub mod requirement;
pub mod term;
pub mod user;

pub use completed::{CompletedCourse, NewCompletedCourse};
pub use course::{Course, CourseLevel};
pub use requirement::{DegreeRequirement, RequirementType};
pub use term::{SlotId, Term};
pub use user::{UserData, UserUpdate};
