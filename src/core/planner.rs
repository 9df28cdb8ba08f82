//! Planning grid: the semester slots shown for the next few academic years

use crate::core::models::{Course, SlotId, Term};
use crate::core::store::AppState;

/// One semester slot of the grid with whatever is planned in it
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSemester<'a> {
    /// Slot id
    pub slot: SlotId,
    /// Planned courses, in insertion order
    pub courses: &'a [Course],
}

impl PlannedSemester<'_> {
    /// Heading such as "Fall 2025"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.slot.term, self.slot.year)
    }

    /// Credits planned in the slot
    #[must_use]
    pub fn credits(&self) -> u64 {
        slot_credits(self.courses)
    }
}

/// Sum of credits over planned courses
#[must_use]
pub fn slot_credits(courses: &[Course]) -> u64 {
    courses.iter().map(|c| u64::from(c.credits)).sum()
}

/// Slot ids for `years` academic years starting with the fall of `start_year`.
///
/// Each academic year contributes `fall-Y`, `spring-(Y+1)`, `summer-(Y+1)`.
/// Years that fall outside four digits are skipped.
#[must_use]
pub fn grid_slots(start_year: i32, years: u32) -> Vec<SlotId> {
    let start = i64::from(start_year);
    (0..i64::from(years))
        .flat_map(|offset| {
            let year = start + offset;
            [
                SlotId::new(Term::Fall, year),
                SlotId::new(Term::Spring, year + 1),
                SlotId::new(Term::Summer, year + 1),
            ]
        })
        .filter_map(Result::ok)
        .collect()
}

/// The planning grid over `state`, including empty slots
#[must_use]
pub fn planning_grid(state: &AppState, start_year: i32, years: u32) -> Vec<PlannedSemester<'_>> {
    grid_slots(start_year, years)
        .into_iter()
        .map(|slot| PlannedSemester {
            slot,
            courses: state.planned_in(&slot),
        })
        .collect()
}

/// Every slot that has been planned into, in chronological order, including
/// slots outside the grid horizon and slots emptied since
#[must_use]
pub fn planned_semesters(state: &AppState) -> Vec<PlannedSemester<'_>> {
    state
        .planned_courses
        .iter()
        .map(|(slot, courses)| PlannedSemester {
            slot: *slot,
            courses,
        })
        .collect()
}

/// Total credits planned across all slots
#[must_use]
pub fn total_planned_credits(state: &AppState) -> u64 {
    state.planned_courses.values().map(|c| slot_credits(c)).sum()
}
