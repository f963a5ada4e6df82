use jsonutil::{from_json, to_json, Duration};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct RetentionConfig {
    name: String,
    retention: Duration,
    scrape_interval: Option<Duration>,
}

#[test]
fn test_duration_inside_document() {
    let json = r#"{"name":"metrics","retention":"15d","scrape_interval":"30s"}"#;
    let config: RetentionConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.retention.as_millis(), 15 * 86_400_000);
    assert_eq!(config.scrape_interval, Some(Duration::from_millis(30_000)));

    assert_eq!(serde_json::to_string(&config).unwrap(), json);
}

#[test]
fn test_document_normalises_units() {
    let json = r#"{"name":"logs","retention":"120m","scrape_interval":null}"#;
    let config: RetentionConfig = serde_json::from_str(json).unwrap();

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["retention"], "2h");
    assert!(value["scrape_interval"].is_null());
}

#[test]
fn test_invalid_duration_aborts_document() {
    let json = r#"{"name":"logs","retention":"7x","scrape_interval":null}"#;
    let err = serde_json::from_str::<RetentionConfig>(json).unwrap_err();
    assert!(err.to_string().contains(r#"not a valid duration string: "7x""#), "{}", err);
}

#[test]
fn test_number_is_type_mismatch() {
    let json = r#"{"name":"logs","retention":5000,"scrape_interval":null}"#;
    let err = serde_json::from_str::<RetentionConfig>(json).unwrap_err();
    assert_eq!(err.classify(), serde_json::error::Category::Data);
    assert!(err.to_string().contains("invalid type: integer `5000`"), "{}", err);
}

#[test]
fn test_helper_round_trip() {
    let encoded = to_json(&Duration::from_millis(5000)).unwrap();
    assert_eq!(encoded, r#""5s""#);
    assert_eq!(from_json(&encoded).unwrap(), Duration::from_millis(5000));
}

#[test]
fn test_deserialize_from_value() {
    let value = serde_json::json!("1500ms");
    let d: Duration = serde_json::from_value(value).unwrap();
    assert_eq!(d.as_millis(), 1500);
}
