use super::*;

#[test]
fn default_uses_stock_key_and_target() {
    let config = BuilderConfig::default();
    assert_eq!(config.storage_key, "layout");
    assert_eq!(config.drop_target_id, "droppable");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(BuilderConfig::from_json("{}").unwrap(), BuilderConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = BuilderConfig::from_json(r#"{"storage_key":"landing-page"}"#).unwrap();
    assert_eq!(config.storage_key, "landing-page");
    assert_eq!(config.drop_target_id, "droppable");
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = BuilderConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyStorageKey));
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = BuilderConfig::from_json("{storage_key}").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
