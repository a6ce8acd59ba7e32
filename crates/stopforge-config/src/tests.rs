//! Tests for stopping configuration.

use super::*;

#[test]
fn test_toml_flat_limits() {
    let toml = r#"
        max_runtime_seconds = 2.5
        max_iterations = 1000
        no_improvement_patience = 20
    "#;

    let config = StoppingConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_runtime_seconds, Some(2.5));
    assert_eq!(config.max_iterations, Some(1000));
    assert_eq!(config.no_improvement_patience, Some(20));
    assert!(config.criterion.is_none());
}

#[test]
fn test_toml_integer_seconds() {
    let config = StoppingConfig::from_toml_str("max_runtime_seconds = 30").unwrap();
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
}

#[test]
fn test_toml_nested_tree() {
    let toml = r#"
        [criterion]
        type = "or"

        [[criterion.criteria]]
        type = "max_runtime"
        seconds = 60

        [[criterion.criteria]]
        type = "and"
        criteria = [
            { type = "max_iterations", iterations = 10 },
            { type = "no_improvement", patience = 3 },
        ]

        [[criterion.criteria]]
        type = "not"
        criterion = { type = "max_iterations", iterations = 2 }
    "#;

    let config = StoppingConfig::from_toml_str(toml).unwrap();
    let expected = CriterionConfig::or(vec![
        CriterionConfig::max_runtime(60.0),
        CriterionConfig::and(vec![
            CriterionConfig::max_iterations(10),
            CriterionConfig::no_improvement(3),
        ]),
        CriterionConfig::not(CriterionConfig::max_iterations(2)),
    ]);
    assert_eq!(config.criterion, Some(expected));
}

#[test]
fn test_yaml_nested_tree() {
    let yaml = r#"
        max_iterations: 500
        criterion:
          type: and
          criteria:
            - type: max_iterations
              iterations: 5
            - type: max_iterations
              iterations: 3
    "#;

    let config = StoppingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_iterations, Some(500));
    match config.criterion {
        Some(CriterionConfig::And(composite)) => assert_eq!(composite.criteria.len(), 2),
        other => panic!("expected and node, got {other:?}"),
    }
}

#[test]
fn test_non_positive_values_parse() {
    // Range checks belong to the builder, so these must load.
    let toml = r#"
        max_iterations = -4

        [criterion]
        type = "no_improvement"
        patience = 0
    "#;

    let config = StoppingConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_iterations, Some(-4));
    assert_eq!(config.criterion, Some(CriterionConfig::no_improvement(0)));
}

#[test]
fn test_empty_config_is_invalid() {
    let err = StoppingConfig::from_toml_str("").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = StoppingConfig::from_yaml_str("{}").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_criterion_type() {
    let toml = r#"
        [criterion]
        type = "first_feasible"
    "#;

    let err = StoppingConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = StoppingConfig::load("/nonexistent/stopping.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = StoppingConfig::new()
        .with_max_runtime_seconds(10.0)
        .with_max_iterations(100)
        .with_no_improvement_patience(7)
        .with_criterion(CriterionConfig::max_iterations(3));

    assert!(!config.is_empty());
    assert!(config.validate().is_ok());
    assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
    assert_eq!(config.no_improvement_patience, Some(7));
}

#[test]
fn test_time_limit_rejects_unrepresentable() {
    assert_eq!(StoppingConfig::new().time_limit(), None);
    assert_eq!(
        StoppingConfig::new().with_max_runtime_seconds(0.0).time_limit(),
        None
    );
    assert_eq!(
        StoppingConfig::new()
            .with_max_runtime_seconds(f64::NAN)
            .time_limit(),
        None
    );
}

#[test]
fn test_toml_serialization_skips_unset_limits() {
    let config = StoppingConfig::new().with_max_iterations(42);
    let text = toml::to_string(&config).unwrap();

    assert_eq!(text.trim(), "max_iterations = 42");
}

#[test]
fn test_type_names() {
    assert_eq!(CriterionConfig::max_runtime(1.0).type_name(), "max_runtime");
    assert_eq!(CriterionConfig::and(vec![]).type_name(), "and");
    assert_eq!(
        CriterionConfig::not(CriterionConfig::no_improvement(1)).type_name(),
        "not"
    );
}
