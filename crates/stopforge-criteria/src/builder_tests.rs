//! Tests for building criteria from configuration.

use super::*;
use crate::test_utils::{answers, answers_n};
use stopforge_config::{CriterionConfig, StoppingConfig};

#[test]
fn test_build_leaf_nodes() {
    let mut iterations =
        CriterionBuilder::build::<u64>(&CriterionConfig::max_iterations(3)).unwrap();
    assert_eq!(answers_n(&mut iterations, 4), vec![false, false, true, true]);

    let mut stalled =
        CriterionBuilder::build::<u64>(&CriterionConfig::no_improvement(2)).unwrap();
    assert_eq!(answers(&mut stalled, &[10, 10, 10]), vec![false, false, true]);

    let mut runtime =
        CriterionBuilder::build::<u64>(&CriterionConfig::max_runtime(3600.0)).unwrap();
    assert!(!runtime.should_stop(0));
}

#[test]
fn test_build_rejects_non_positive_parameters() {
    let invalid = [
        CriterionConfig::max_runtime(0.0),
        CriterionConfig::max_runtime(-2.5),
        CriterionConfig::max_iterations(0),
        CriterionConfig::max_iterations(-1),
        CriterionConfig::no_improvement(0),
        CriterionConfig::no_improvement(i64::MIN),
        CriterionConfig::and(vec![]),
        CriterionConfig::or(vec![]),
    ];

    for config in &invalid {
        let err = CriterionBuilder::build::<u64>(config).unwrap_err();
        assert!(
            matches!(err, StopForgeError::InvalidParameter(_)),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn test_build_rejects_invalid_nested_child() {
    let config = CriterionConfig::or(vec![
        CriterionConfig::max_iterations(10),
        CriterionConfig::and(vec![
            CriterionConfig::no_improvement(5),
            CriterionConfig::max_iterations(0),
        ]),
    ]);

    let err = CriterionBuilder::build::<f64>(&config).unwrap_err();
    assert_eq!(
        err,
        StopForgeError::InvalidParameter("max iterations must be at least 1, got 0".to_string())
    );
}

#[test]
fn test_build_tree_with_manual_clock() {
    let clock = ManualClock::new();
    let config = CriterionConfig::or(vec![
        CriterionConfig::max_runtime(10.0),
        CriterionConfig::and(vec![
            CriterionConfig::max_iterations(3),
            CriterionConfig::no_improvement(2),
        ]),
    ]);
    let mut term =
        CriterionBuilder::build_with_clock::<u64, _>(&config, clock.clone()).unwrap();

    // Improving search: only the clock can stop it.
    assert_eq!(answers(&mut term, &[9, 8, 7, 6]), vec![false; 4]);
    clock.advance_secs(10.0);
    assert!(term.should_stop(5));
}

#[test]
fn test_build_and_has_no_short_circuit() {
    let config = CriterionConfig::and(vec![
        CriterionConfig::max_iterations(2),
        CriterionConfig::max_iterations(4),
    ]);
    let mut term = CriterionBuilder::build::<u64>(&config).unwrap();

    assert_eq!(answers_n(&mut term, 5), vec![false, false, false, true, true]);
}

#[test]
fn test_build_not() {
    let config = CriterionConfig::not(CriterionConfig::max_iterations(2));
    let mut term = CriterionBuilder::build::<u64>(&config).unwrap();

    assert_eq!(answers_n(&mut term, 3), vec![true, false, false]);
}

#[test]
fn test_build_single_child_composite() {
    let config = CriterionConfig::and(vec![CriterionConfig::max_iterations(2)]);
    let mut term = CriterionBuilder::build::<u64>(&config).unwrap();

    assert_eq!(answers_n(&mut term, 2), vec![false, true]);
}

#[test]
fn test_from_config_ors_flat_limits() {
    let config = StoppingConfig::new()
        .with_max_iterations(5)
        .with_no_improvement_patience(2);
    let mut term = CriterionBuilder::from_config::<u64>(&config).unwrap();

    // Stalls after the baseline plus two calls, before the iteration budget.
    assert_eq!(answers(&mut term, &[4, 4, 4]), vec![false, false, true]);
}

#[test]
fn test_from_config_single_limit() {
    let config = StoppingConfig::new().with_max_iterations(2);
    let mut term = CriterionBuilder::from_config::<i64>(&config).unwrap();

    assert_eq!(answers(&mut term, &[1, 1]), vec![false, true]);
}

#[test]
fn test_from_config_combines_tree_and_runtime() {
    let clock = ManualClock::new();
    let config = StoppingConfig::new()
        .with_max_runtime_seconds(1.0)
        .with_criterion(CriterionConfig::max_iterations(100));
    let mut term =
        CriterionBuilder::from_config_with_clock::<u64, _>(&config, clock.clone()).unwrap();

    assert!(!term.should_stop(3));
    clock.advance_secs(1.0);
    assert!(term.should_stop(3));
}

#[test]
fn test_from_config_rejects_empty() {
    let err = CriterionBuilder::from_config::<u64>(&StoppingConfig::new()).unwrap_err();
    assert!(matches!(err, StopForgeError::InvalidParameter(_)));
}

#[test]
fn test_from_config_rejects_bad_flat_limit() {
    let config = StoppingConfig::new()
        .with_max_iterations(10)
        .with_max_runtime_seconds(-1.0);

    let err = CriterionBuilder::from_config::<u64>(&config).unwrap_err();
    assert!(matches!(err, StopForgeError::InvalidParameter(_)));
}

#[test]
fn test_from_toml_end_to_end() {
    let config = StoppingConfig::from_toml_str(
        r#"
        max_iterations = 6

        [criterion]
        type = "and"
        criteria = [
            { type = "max_iterations", iterations = 3 },
            { type = "no_improvement", patience = 1 },
        ]
        "#,
    )
    .unwrap();
    let mut term = CriterionBuilder::from_config::<u64>(&config).unwrap();

    assert_eq!(
        answers(&mut term, &[9, 8, 7, 7, 6, 5]),
        vec![false, false, false, true, false, true]
    );
}
