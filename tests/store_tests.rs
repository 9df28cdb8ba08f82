//! Integration tests for the planning store and its derived views

use academic_planner::core::catalog::{search, CourseQuery};
use academic_planner::core::models::{Course, NewCompletedCourse, SlotId, UserUpdate};
use academic_planner::core::planner::slot_credits;
use academic_planner::core::progress::{requirement_progress, RequirementStatus};
use academic_planner::core::seed::SeedData;
use academic_planner::core::store::reduce;
use academic_planner::core::transcript::{by_semester, overall_gpa, total_credits};
use academic_planner::core::{Action, PlannerStore, StoreError};

fn sample_store() -> PlannerStore {
    SeedData::sample().into_store()
}

fn slot(id: &str) -> SlotId {
    id.parse().expect("valid slot id")
}

fn planned_ids(store: &PlannerStore, id: &str) -> Vec<String> {
    store
        .state()
        .planned_in(&slot(id))
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

#[test]
fn test_gpa_scenario() {
    let mut store = sample_store();

    store
        .add_completed_course(NewCompletedCourse::new(
            "CS 1301",
            "Introduction to Computing",
            4,
            "B+",
            "Fall",
            2024,
        ))
        .unwrap();
    let first = &store.state().completed_courses[0];
    assert!((first.gpa - 3.3).abs() < 1e-12);

    store
        .add_completed_course(NewCompletedCourse::new(
            "MATH 1551",
            "Differential Calculus",
            2,
            "A",
            "Fall",
            2024,
        ))
        .unwrap();

    let gpa = overall_gpa(&store.state().completed_courses);
    assert!((gpa - (3.3 * 4.0 + 4.0 * 2.0) / 6.0).abs() < 1e-12);
    assert!((gpa - 3.5333).abs() < 1e-4);
}

#[test]
fn test_empty_transcript_gpa_is_zero() {
    let store = sample_store();
    assert!(overall_gpa(&store.state().completed_courses).abs() < f64::EPSILON);
}

#[test]
fn test_add_completed_course_is_append_only() {
    let mut store = sample_store();
    let grades = ["A", "B", "C+", "F"];
    let mut ids = Vec::new();

    for (n, grade) in grades.iter().enumerate() {
        let before = store.state().completed_courses.clone();
        let id = store
            .add_completed_course(NewCompletedCourse::new(
                "CS 1331", "OOP", 3, grade, "Spring", 2025,
            ))
            .unwrap();

        let after = &store.state().completed_courses;
        assert_eq!(after.len(), n + 1);
        assert_eq!(&after[..n], &before[..]);
        assert!(!ids.contains(&id));
        ids.push(id);
    }
    assert_eq!(ids, vec!["completed-1", "completed-2", "completed-3", "completed-4"]);
}

#[test]
fn test_invalid_completed_course_is_rejected() {
    let mut store = sample_store();
    let before = store.state().clone();

    let cases = [
        (NewCompletedCourse::new("X", "X", 3, "E", "Fall", 2024), StoreError::InvalidGrade("E".to_string())),
        (NewCompletedCourse::new("X", "X", 3, "a", "Fall", 2024), StoreError::InvalidGrade("a".to_string())),
        (NewCompletedCourse::new("X", "X", 0, "A", "Fall", 2024), StoreError::InvalidCredits(0)),
        (NewCompletedCourse::new("X", "X", -3, "A", "Fall", 2024), StoreError::InvalidCredits(-3)),
    ];
    for (request, expected) in cases {
        assert_eq!(store.add_completed_course(request), Err(expected));
        assert_eq!(store.state(), &before);
    }

    // A rejected request does not consume a record id
    let id = store
        .add_completed_course(NewCompletedCourse::new("X", "X", 3, "A", "Fall", 2024))
        .unwrap();
    assert_eq!(id, "completed-1");
}

#[test]
fn test_plan_scenario() {
    let mut store = sample_store();
    let cs = store.state().course("cs1301").unwrap().clone();
    let math = store.state().course("math1551").unwrap().clone();

    store.plan_course("fall-2025", cs).unwrap();
    store.plan_course("fall-2025", math).unwrap();

    assert_eq!(planned_ids(&store, "fall-2025"), vec!["cs1301", "math1551"]);
    assert_eq!(slot_credits(store.state().planned_in(&slot("fall-2025"))), 5);
}

#[test]
fn test_plan_then_remove_restores_slot() {
    let mut store = sample_store();
    let cs = store.state().course("cs1301").unwrap().clone();
    let math = store.state().course("math1551").unwrap().clone();
    let phys = store.state().course("phys2211").unwrap().clone();

    store.plan_course("spring-2026", cs).unwrap();
    store.plan_course("spring-2026", math).unwrap();
    let before = planned_ids(&store, "spring-2026");

    store.plan_course("spring-2026", phys).unwrap();
    store
        .remove_planned_course("spring-2026", "phys2211")
        .unwrap();

    assert_eq!(planned_ids(&store, "spring-2026"), before);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut store = sample_store();
    let cs = store.state().course("cs1301").unwrap().clone();
    store.plan_course("fall-2025", cs).unwrap();
    let before = store.state().clone();

    store.remove_planned_course("summer-2030", "cs1301").unwrap();
    store.remove_planned_course("fall-2025", "cs9999").unwrap();

    assert_eq!(store.state(), &before);
}

#[test]
fn test_malformed_slot_ids_are_rejected() {
    let mut store = sample_store();
    let cs = store.state().course("cs1301").unwrap().clone();

    for bad in ["Fall-2025", "fall2025", "fall-25", "winter-2025", "fall-2025-x", ""] {
        assert!(matches!(
            store.plan_course(bad, cs.clone()),
            Err(StoreError::InvalidSlotId(_))
        ));
        assert!(matches!(
            store.remove_planned_course(bad, "cs1301"),
            Err(StoreError::InvalidSlotId(_))
        ));
    }
    assert!(store.state().planned_courses.is_empty());
}

#[test]
fn test_duplicate_planning_is_permitted() {
    let mut store = sample_store();
    let cs = store.state().course("cs1301").unwrap().clone();

    store.plan_course("fall-2025", cs.clone()).unwrap();
    store.plan_course("fall-2025", cs.clone()).unwrap();
    store.plan_course("spring-2026", cs).unwrap();

    assert_eq!(planned_ids(&store, "fall-2025"), vec!["cs1301", "cs1301"]);

    store.remove_planned_course("fall-2025", "cs1301").unwrap();
    assert!(planned_ids(&store, "fall-2025").is_empty());
    assert_eq!(planned_ids(&store, "spring-2026"), vec!["cs1301"]);
}

#[test]
fn test_update_user_changes_only_given_fields() {
    let mut store = sample_store();
    let before = store.state().user.clone();

    store.update_user(UserUpdate {
        major: Some("Computational Media".to_string()),
        gpa: Some(3.9),
        ..UserUpdate::default()
    })
    .unwrap();

    let after = &store.state().user;
    assert_eq!(after.major, "Computational Media");
    assert!((after.gpa - 3.9).abs() < f64::EPSILON);
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.threads, before.threads);
    assert_eq!(after.minors, before.minors);
    assert_eq!(after.total_credits, before.total_credits);
    assert_eq!(after.completed_credits, before.completed_credits);
}

#[test]
fn test_profile_figures_are_not_derived_from_transcript() {
    let mut store = sample_store();
    store
        .add_completed_course(NewCompletedCourse::new("CS 1301", "Intro", 4, "F", "Fall", 2024))
        .unwrap();

    let user = &store.state().user;
    assert_eq!(user.completed_credits, 45);
    assert!((user.gpa - 3.67).abs() < f64::EPSILON);
}

#[test]
fn test_reduce_is_pure() {
    let store = sample_store();
    let before = store.state().clone();

    let next = reduce(
        store.state(),
        Action::UpdateUser(UserUpdate {
            name: Some("Sam".to_string()),
            ..UserUpdate::default()
        }),
    )
    .unwrap();

    assert_eq!(next.user.name, "Sam");
    assert_eq!(store.state(), &before);
}

#[test]
fn test_requirement_progress_is_clamped() {
    let mut seed = SeedData::sample();
    seed.requirements[0].credits_completed = seed.requirements[0].credits_required * 3;
    let requirement = &seed.requirements[0];

    assert!((requirement_progress(requirement) - 100.0).abs() < f64::EPSILON);
    assert_eq!(
        RequirementStatus::from_percentage(requirement_progress(requirement)),
        RequirementStatus::Completed
    );
}

#[test]
fn test_catalog_intro_scenario() {
    let store = sample_store();
    let titles: Vec<&str> = search(&store.state().courses, &CourseQuery::text("intro"))
        .iter()
        .map(|c| c.title.as_str())
        .collect();

    assert!(titles.contains(&"Introduction to Computing"));
    assert!(titles.contains(&"Introduction to Physics I"));
    assert!(!titles.contains(&"Differential Calculus"));
}

#[test]
fn test_large_credit_totals_do_not_overflow() {
    let mut store = sample_store();
    for code in ["BIG 1", "BIG 2"] {
        store
            .add_completed_course(NewCompletedCourse::new(
                code,
                "Oversized",
                3_000_000_000,
                "A",
                "Fall",
                2024,
            ))
            .unwrap();
    }

    let courses = &store.state().completed_courses;
    assert_eq!(total_credits(courses), 6_000_000_000);
    assert!((overall_gpa(courses) - 4.0).abs() < 1e-12);

    let semesters = by_semester(courses);
    assert_eq!(semesters[0].credits(), 6_000_000_000);
}

#[test]
fn test_large_planned_credits_do_not_overflow() {
    let mut store = sample_store();
    let heavy = Course::new("big1", "BIG 1", "Oversized", u32::MAX);

    store.plan_course("fall-2025", heavy.clone()).unwrap();
    store.plan_course("fall-2025", heavy).unwrap();

    assert_eq!(
        slot_credits(store.state().planned_in(&slot("fall-2025"))),
        2 * u64::from(u32::MAX)
    );
}
