//! Probar E2E tests for linear search.
//!
//! These tests verify:
//! - The classroom walkthrough scenarios behave exactly as taught
//! - Found/not-found agrees with membership for arbitrary arrays
//! - Bar flags settle into a well-defined terminal partition

#![allow(clippy::unwrap_used, clippy::expect_used)]

use buscar::prelude::*;
use buscar::scenario::ScenarioYaml;

const LINEAR_YAML: &str = include_str!("../demos/classroom_linear.yaml");

fn run(values: Vec<f64>, target: f64) -> (SearchOutcome, SearchSession) {
    let mut session = SearchSession::new();
    session.set_array(values).unwrap();
    let outcome = session
        .search(SearchKind::Linear, target, Pacing::None, &mut NullObserver)
        .unwrap();
    (outcome, session)
}

// =============================================================================
// Probar E2E: Classroom Scenarios
// =============================================================================

#[test]
fn probar_linear_scenario_yaml_loads() {
    let scenario = ScenarioYaml::from_yaml(LINEAR_YAML).unwrap();
    assert_eq!(scenario.meta.id, "SEARCH-LIN-004");
    assert_eq!(scenario.algorithm.kind, SearchKind::Linear);
    assert!(scenario.validate().is_ok());
}

#[test]
fn probar_linear_walkthrough_found() {
    // [5,3,8,1] target 8: two logged misses, then a hit at index 2
    let (outcome, _) = run(vec![5.0, 3.0, 8.0, 1.0], 8.0);
    assert_eq!(outcome.status, SearchStatus::Found { index: 2 });

    let records = outcome.trace.records();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].iteration, records[0].index, records[0].value), (1, 0, 5.0));
    assert_eq!((records[1].iteration, records[1].index, records[1].value), (2, 1, 3.0));
}

#[test]
fn probar_linear_walkthrough_not_found() {
    // [5,3,8,1] target 9: four logged records, none matching
    let (outcome, _) = run(vec![5.0, 3.0, 8.0, 1.0], 9.0);
    assert_eq!(outcome.status, SearchStatus::NotFound);
    assert_eq!(outcome.trace.len(), 4);
    assert!(outcome.trace.records().iter().all(|r| r.value != 9.0));
}

#[test]
fn probar_linear_scenario_expectations_hold() {
    let scenario = ScenarioYaml::from_yaml(LINEAR_YAML).unwrap();
    let (outcome, _) = run(scenario.array.clone(), scenario.algorithm.target);
    let mismatches = scenario.check_expectations(&outcome).unwrap();
    assert!(mismatches.is_empty(), "mismatches: {mismatches:?}");
}

// =============================================================================
// Probar E2E: Membership Property
// =============================================================================

#[test]
fn probar_linear_found_agrees_with_membership() {
    let arrays: Vec<Vec<f64>> = vec![
        vec![1.0],
        vec![5.0, 3.0, 8.0, 1.0],
        vec![2.0, 2.0, 2.0],
        vec![-4.0, 0.0, 7.5, -1.25],
    ];
    for values in arrays {
        for target in [-4.0, 0.0, 1.0, 2.0, 7.5, 99.0] {
            let expected = values.contains(&target);
            let (outcome, _) = run(values.clone(), target);
            assert_eq!(outcome.found(), expected, "array {values:?} target {target}");
        }
    }
}

#[test]
fn probar_linear_complexity_label() {
    let (outcome, _) = run(vec![1.0, 2.0], 2.0);
    assert_eq!(
        outcome.complexity.to_string(),
        "Time Complexity: O(n), Space Complexity: O(1)"
    );
}

// =============================================================================
// Probar E2E: Terminal Bar States
// =============================================================================

#[test]
fn probar_linear_bars_partition_on_found() {
    let (_, session) = run(vec![5.0, 3.0, 8.0, 1.0], 8.0);
    let bars = session.bars();
    assert_eq!(bars[0].checked, Some(CheckedReason::Examined));
    assert_eq!(bars[1].checked, Some(CheckedReason::Examined));
    assert!(bars[2].found);
    // trailing element untouched after early termination, by design
    assert!(bars[3].is_default());
    assert!(session.bars_settled());
}

#[test]
fn probar_linear_bars_all_examined_on_miss() {
    let (_, session) = run(vec![5.0, 3.0, 8.0, 1.0], 9.0);
    assert!(session
        .bars()
        .iter()
        .all(|b| b.checked == Some(CheckedReason::Examined)));
    assert!(session.bars_settled());
}

#[test]
fn probar_linear_no_active_flag_survives() {
    let (_, session) = run(vec![5.0, 3.0, 8.0], 3.0);
    assert!(session.bars().iter().all(|b| !b.active));
}
