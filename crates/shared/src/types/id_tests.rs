use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = ZoneId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = ZoneId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_display_matches_uuid() {
    let uuid = Uuid::new_v4();
    assert_eq!(UsageEventId::from_uuid(uuid).to_string(), uuid.to_string());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = ZoneId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
    assert!(ZoneId::from_str("not-a-zone").is_err());
}

