use super::*;

#[test]
fn new_user_keeps_name_and_mints_uuid() {
    let user = User::new("alice");
    assert_eq!(user.name, "alice");
    let id = user.id.as_str().expect("minted id is a string");
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert!(user.extra.is_empty());
}

#[test]
fn new_users_get_distinct_ids() {
    assert_ne!(User::new("a").id, User::new("a").id);
}

#[test]
fn unknown_fields_survive_deserialize_and_serialize() {
    let raw = serde_json::json!({ "id": "u1", "name": "Alice", "theme": "dark", "age": 30 });
    let user: User = serde_json::from_value(raw.clone()).expect("user");
    assert_eq!(user.extra.get("theme"), Some(&serde_json::json!("dark")));
    assert_eq!(serde_json::to_value(&user).expect("json"), raw);
}

#[test]
fn record_without_name_is_rejected() {
    let raw = serde_json::json!({ "id": "u1" });
    assert!(serde_json::from_value::<User>(raw).is_err());
}

#[test]
fn numeric_id_round_trips() {
    let raw = serde_json::json!({ "id": 1, "name": "John Doe" });
    let user: User = serde_json::from_value(raw.clone()).expect("user");
    assert_eq!(user, User::with_id(1, "John Doe"));
    assert_eq!(serde_json::to_value(&user).expect("json"), raw);
}

#[test]
fn record_without_id_is_rejected() {
    let raw = serde_json::json!({ "name": "Alice" });
    assert!(serde_json::from_value::<User>(raw).is_err());
}
