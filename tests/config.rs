use std::fs;

use partition_sort_rs::{ConfigError, PivotStrategy, SortConfig, PIVOT_MARKER};

#[test]
fn default_config() {
    let config = SortConfig::default();

    assert_eq!(config.pivot_strategy, PivotStrategy::Last);
    assert_eq!(config.pivot_marker, PIVOT_MARKER);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(SortConfig::from_json("{}").unwrap(), SortConfig::default());
}

#[test]
fn full_json() {
    let config = SortConfig::from_json(
        r##"{ "pivot_strategy": "median_of_three", "pivot_marker": "#e33" }"##,
    )
    .unwrap();

    assert_eq!(config.pivot_strategy, PivotStrategy::MedianOfThree);
    assert_eq!(config.pivot_marker, "#e33");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SortConfig::from_json(r#"{ "pivot": "last" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");

    let err = SortConfig::from_json(r#"{ "pivot_strategy": "random" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn json_round_trip_names() {
    let config = SortConfig::default().with_pivot_strategy(PivotStrategy::MedianOfThree);
    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains(r#""pivot_strategy":"median_of_three""#), "{json}");
}

#[test]
fn pivot_strategy_from_str() {
    assert_eq!("last".parse::<PivotStrategy>().unwrap(), PivotStrategy::Last);
    assert_eq!(
        "median-of-three".parse::<PivotStrategy>().unwrap(),
        PivotStrategy::MedianOfThree
    );
    assert_eq!(
        PivotStrategy::MedianOfThree.to_string().parse::<PivotStrategy>().unwrap(),
        PivotStrategy::MedianOfThree
    );

    let err = "first".parse::<PivotStrategy>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPivotStrategy(ref name) if name == "first"));
}

#[test]
fn load_from_file() {
    let pid = std::process::id();
    let path = std::env::temp_dir().join(format!("partition-sort-config-{pid}.json"));
    fs::write(&path, r#"{ "pivot_strategy": "median_of_three" }"#).unwrap();

    let config = SortConfig::load(&path);
    let _ = fs::remove_file(&path);

    let config = config.unwrap();
    assert_eq!(config.pivot_strategy, PivotStrategy::MedianOfThree);
    assert_eq!(config.pivot_marker, PIVOT_MARKER);
}

#[test]
fn load_missing_file() {
    let path = std::env::temp_dir().join("partition-sort-config-does-not-exist.json");

    assert!(matches!(SortConfig::load(&path), Err(ConfigError::Io(_))));
}
