//! The planning store: canonical in-memory state and its mutation contract.
//!
//! Every change goes through [`PlannerStore::dispatch`] with one of the four
//! [`Action`] variants. [`reduce`] is the pure transition function behind it:
//! it builds a complete new [`AppState`] or rejects the request, so a failed
//! mutation never leaves a partially applied snapshot behind.

use crate::core::error::StoreError;
use crate::core::models::{
    CompletedCourse, Course, DegreeRequirement, NewCompletedCourse, SlotId, Term, UserData,
    UserUpdate,
};
use crate::core::Grade;
use crate::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;

/// Planned courses per semester slot, in chronological slot order.
///
/// Slots appear on first insertion and are never removed, even when emptied.
pub type PlannedCourses = BTreeMap<SlotId, Vec<Course>>;

/// Prefix of generated completed-course record ids
const RECORD_ID_PREFIX: &str = "completed-";

/// A complete snapshot of the application's data
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Student profile
    pub user: UserData,
    /// Course catalog (reference data)
    pub courses: Vec<Course>,
    /// Transcript, in the order courses were recorded
    pub completed_courses: Vec<CompletedCourse>,
    /// Degree requirements (reference data)
    pub degree_requirements: Vec<DegreeRequirement>,
    /// Courses planned per semester slot
    pub planned_courses: PlannedCourses,
    /// Sequence number for the next generated record id
    next_record: u64,
}

impl AppState {
    /// Initial state from reference data: empty transcript, empty plan
    #[must_use]
    pub const fn new(
        user: UserData,
        courses: Vec<Course>,
        degree_requirements: Vec<DegreeRequirement>,
    ) -> Self {
        Self {
            user,
            courses,
            completed_courses: Vec::new(),
            degree_requirements,
            planned_courses: BTreeMap::new(),
            next_record: 1,
        }
    }

    /// Courses planned in `slot` (empty if the slot was never used)
    #[must_use]
    pub fn planned_in(&self, slot: &SlotId) -> &[Course] {
        self.planned_courses.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Catalog course by id
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

/// A mutation request. The closed set of ways the state may change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Record a completed course; the store assigns its id and grade points
    AddCompletedCourse(NewCompletedCourse),
    /// Shallow-merge the given profile fields
    UpdateUser(UserUpdate),
    /// Append a course to a semester slot, creating the slot if needed
    PlanCourse {
        /// Slot id, e.g. `fall-2025`
        semester_id: String,
        /// Course to append
        course: Course,
    },
    /// Remove every occurrence of a course id from a semester slot
    RemovePlannedCourse {
        /// Slot id, e.g. `fall-2025`
        semester_id: String,
        /// Catalog id of the course to remove
        course_id: String,
    },
}

impl Action {
    /// Short name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddCompletedCourse(_) => "ADD_COMPLETED_COURSE",
            Self::UpdateUser(_) => "UPDATE_USER",
            Self::PlanCourse { .. } => "PLAN_COURSE",
            Self::RemovePlannedCourse { .. } => "REMOVE_PLANNED_COURSE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddCompletedCourse(new) => {
                write!(f, "{} {} ({})", self.name(), new.code, new.grade)
            }
            Self::UpdateUser(_) => f.write_str(self.name()),
            Self::PlanCourse {
                semester_id,
                course,
            } => write!(f, "{} {} -> {semester_id}", self.name(), course.id),
            Self::RemovePlannedCourse {
                semester_id,
                course_id,
            } => write!(f, "{} {course_id} from {semester_id}", self.name()),
        }
    }
}

/// Apply `action` to `state`, producing the next snapshot.
///
/// # Errors
/// Returns a [`StoreError`] when the request breaks the input contract
/// (unknown grade or term, non-positive credits, bad year or slot id).
pub fn reduce(state: &AppState, action: Action) -> Result<AppState, StoreError> {
    match action {
        Action::AddCompletedCourse(new) => add_completed_course(state, new),
        Action::UpdateUser(update) => {
            let mut next = state.clone();
            next.user.merge(update);
            Ok(next)
        }
        Action::PlanCourse {
            semester_id,
            course,
        } => {
            let slot: SlotId = semester_id.parse()?;
            let mut next = state.clone();
            next.planned_courses.entry(slot).or_default().push(course);
            Ok(next)
        }
        Action::RemovePlannedCourse {
            semester_id,
            course_id,
        } => {
            let slot: SlotId = semester_id.parse()?;
            let mut next = state.clone();
            if let Some(planned) = next.planned_courses.get_mut(&slot) {
                planned.retain(|c| c.id != course_id);
            }
            Ok(next)
        }
    }
}

fn add_completed_course(state: &AppState, new: NewCompletedCourse) -> Result<AppState, StoreError> {
    let grade: Grade = new.grade.parse()?;
    let credits = u32::try_from(new.credits)
        .ok()
        .filter(|c| *c > 0)
        .ok_or(StoreError::InvalidCredits(new.credits))?;
    let semester: Term = new.semester.parse()?;
    let year = SlotId::new(semester, new.year)?.year;

    let mut next = state.clone();
    let record = CompletedCourse {
        course_id: format!("{RECORD_ID_PREFIX}{}", next.next_record),
        code: new.code,
        title: new.title,
        credits,
        grade,
        semester,
        year,
        gpa: grade.points(),
    };
    next.next_record += 1;
    next.completed_courses.push(record);
    Ok(next)
}

/// Injectable store instance owning the current snapshot.
///
/// Views read through [`state`](Self::state) and change data only through
/// [`dispatch`](Self::dispatch). Mutations apply in call order.
#[derive(Debug, Clone)]
pub struct PlannerStore {
    state: AppState,
}

impl PlannerStore {
    /// Create a store seeded with reference data
    #[must_use]
    pub const fn new(
        user: UserData,
        courses: Vec<Course>,
        degree_requirements: Vec<DegreeRequirement>,
    ) -> Self {
        Self::from_state(AppState::new(user, courses, degree_requirements))
    }

    /// Create a store from an existing snapshot
    #[must_use]
    pub const fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a mutation request. On error the snapshot is unchanged.
    ///
    /// # Errors
    /// Returns the [`StoreError`] produced by [`reduce`].
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let description = action.to_string();
        match reduce(&self.state, action) {
            Ok(next) => {
                debug!("Applied {description}");
                self.state = next;
                Ok(())
            }
            Err(err) => {
                warn!("Rejected {description}: {err}");
                Err(err)
            }
        }
    }

    /// Record a completed course and return its generated id
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidGrade`], [`StoreError::InvalidCredits`],
    /// [`StoreError::InvalidTerm`] or [`StoreError::InvalidYear`].
    pub fn add_completed_course(&mut self, course: NewCompletedCourse) -> Result<String, StoreError> {
        self.dispatch(Action::AddCompletedCourse(course))?;
        Ok(self
            .state
            .completed_courses
            .last()
            .map(|c| c.course_id.clone())
            .unwrap_or_default())
    }

    /// Merge a partial profile update
    ///
    /// # Errors
    /// Propagates whatever [`reduce`] returns; profile updates are currently
    /// always accepted.
    pub fn update_user(&mut self, update: UserUpdate) -> Result<(), StoreError> {
        self.dispatch(Action::UpdateUser(update))
    }

    /// Append `course` to the slot `semester_id`
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidSlotId`] for a malformed slot id.
    pub fn plan_course(&mut self, semester_id: &str, course: Course) -> Result<(), StoreError> {
        self.dispatch(Action::PlanCourse {
            semester_id: semester_id.to_string(),
            course,
        })
    }

    /// Remove every occurrence of `course_id` from the slot `semester_id`
    ///
    /// An absent slot or course is a no-op.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidSlotId`] for a malformed slot id.
    pub fn remove_planned_course(
        &mut self,
        semester_id: &str,
        course_id: &str,
    ) -> Result<(), StoreError> {
        self.dispatch(Action::RemovePlannedCourse {
            semester_id: semester_id.to_string(),
            course_id: course_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserData {
        UserData {
            id: "user123".to_string(),
            name: "Alex Johnson".to_string(),
            email: "ajohnson3@gatech.edu".to_string(),
            major: "Computer Science".to_string(),
            threads: Vec::new(),
            minors: Vec::new(),
            expected_graduation: "Spring 2026".to_string(),
            total_credits: 126,
            completed_credits: 45,
            gpa: 3.67,
        }
    }

    fn store() -> PlannerStore {
        PlannerStore::new(
            user(),
            vec![
                Course::new("cs1301", "CS 1301", "Introduction to Computing", 3),
                Course::new("math1551", "MATH 1551", "Differential Calculus", 2),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = store();
        assert!(store.state().completed_courses.is_empty());
        assert!(store.state().planned_courses.is_empty());
        assert_eq!(store.state().courses.len(), 2);
    }

    #[test]
    fn test_add_completed_course_assigns_id_and_points() {
        let mut store = store();
        let id = store
            .add_completed_course(NewCompletedCourse::new(
                "CS 1301", "Intro", 4, "B+", "Fall", 2024,
            ))
            .unwrap();

        let record = &store.state().completed_courses[0];
        assert_eq!(id, "completed-1");
        assert_eq!(record.course_id, "completed-1");
        assert_eq!(record.grade, Grade::BPlus);
        assert!((record.gpa - 3.3).abs() < f64::EPSILON);
        assert_eq!(record.semester, Term::Fall);
        assert_eq!(record.year, 2024);
    }

    #[test]
    fn test_record_ids_are_never_reused() {
        let mut store = store();
        let first = store
            .add_completed_course(NewCompletedCourse::new("A", "a", 3, "A", "Fall", 2024))
            .unwrap();
        let _ = store.add_completed_course(NewCompletedCourse::new("B", "b", 3, "Z", "Fall", 2024));
        let second = store
            .add_completed_course(NewCompletedCourse::new("C", "c", 3, "A", "Fall", 2024))
            .unwrap();

        assert_eq!(first, "completed-1");
        assert_eq!(second, "completed-2");
    }

    #[test]
    fn test_invalid_inputs_leave_state_unchanged() {
        let mut store = store();
        let before = store.state().clone();

        let cases = [
            (
                NewCompletedCourse::new("X", "x", 3, "E", "Fall", 2024),
                StoreError::InvalidGrade("E".to_string()),
            ),
            (
                NewCompletedCourse::new("X", "x", 0, "A", "Fall", 2024),
                StoreError::InvalidCredits(0),
            ),
            (
                NewCompletedCourse::new("X", "x", -3, "A", "Fall", 2024),
                StoreError::InvalidCredits(-3),
            ),
            (
                NewCompletedCourse::new("X", "x", 3, "A", "Winter", 2024),
                StoreError::InvalidTerm("Winter".to_string()),
            ),
            (
                NewCompletedCourse::new("X", "x", 3, "A", "Fall", 24),
                StoreError::InvalidYear(24),
            ),
        ];
        for (request, expected) in cases {
            assert_eq!(store.add_completed_course(request), Err(expected));
        }
        assert_eq!(
            store.plan_course("Fall 2025", Course::new("cs1301", "CS 1301", "Intro", 3)),
            Err(StoreError::InvalidSlotId("Fall 2025".to_string()))
        );
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_plan_creates_slot_and_allows_duplicates() {
        let mut store = store();
        let course = store.state().courses[0].clone();
        store.plan_course("fall-2025", course.clone()).unwrap();
        store.plan_course("fall-2025", course.clone()).unwrap();
        store.plan_course("spring-2026", course).unwrap();

        let fall: SlotId = "fall-2025".parse().unwrap();
        assert_eq!(store.state().planned_in(&fall).len(), 2);
        assert_eq!(store.state().planned_courses.len(), 2);
    }

    #[test]
    fn test_remove_drops_every_occurrence_and_keeps_slot() {
        let mut store = store();
        let cs = store.state().courses[0].clone();
        let math = store.state().courses[1].clone();
        store.plan_course("fall-2025", cs.clone()).unwrap();
        store.plan_course("fall-2025", math).unwrap();
        store.plan_course("fall-2025", cs).unwrap();

        store.remove_planned_course("fall-2025", "cs1301").unwrap();

        let fall: SlotId = "fall-2025".parse().unwrap();
        let remaining: Vec<&str> = store
            .state()
            .planned_in(&fall)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["math1551"]);

        store.remove_planned_course("fall-2025", "math1551").unwrap();
        assert!(store.state().planned_courses.contains_key(&fall));
        assert!(store.state().planned_in(&fall).is_empty());
    }

    #[test]
    fn test_remove_from_absent_slot_is_noop() {
        let mut store = store();
        let before = store.state().clone();
        store.remove_planned_course("summer-2027", "cs1301").unwrap();
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let state = store().state().clone();
        let next = reduce(
            &state,
            Action::UpdateUser(UserUpdate {
                name: Some("Sam Lee".to_string()),
                ..UserUpdate::default()
            }),
        )
        .unwrap();

        assert_eq!(state.user.name, "Alex Johnson");
        assert_eq!(next.user.name, "Sam Lee");
    }

    #[test]
    fn test_action_display() {
        let action = Action::RemovePlannedCourse {
            semester_id: "fall-2025".to_string(),
            course_id: "cs1301".to_string(),
        };
        assert_eq!(action.to_string(), "REMOVE_PLANNED_COURSE cs1301 from fall-2025");
    }
}
