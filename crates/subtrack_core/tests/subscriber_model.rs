use subtrack_core::{Subscriber, SubscriberValidationError};

#[test]
fn new_builds_record_from_parts() {
    let subscriber = Subscriber::new("42", "Alice", "F");

    assert_eq!(subscriber.id, "42");
    assert_eq!(subscriber.name, "Alice");
    assert_eq!(subscriber.gender, "F");
    assert!(subscriber.validate().is_ok());
}

#[test]
fn validate_rejects_empty_and_whitespace_ids() {
    let empty = Subscriber::new("", "Alice", "F");
    assert_eq!(empty.validate(), Err(SubscriberValidationError::EmptyId));

    let blank = Subscriber::new("   ", "Bob", "M");
    assert_eq!(blank.validate(), Err(SubscriberValidationError::EmptyId));
}

#[test]
fn display_line_uses_canonical_row_format() {
    let subscriber = Subscriber::new("7", "Carol", "F");
    assert_eq!(subscriber.display_line(), "Carol | ID: 7 | Gender: F");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let subscriber = Subscriber::new("1", "Alice", "F");

    let json = serde_json::to_value(&subscriber).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["gender"], "F");

    let decoded: Subscriber = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, subscriber);
}

#[test]
fn identity_is_id_not_field_content() {
    let a = Subscriber::new("1", "Alice", "F");
    let renamed = Subscriber::new("1", "Alicia", "F");

    // Same identity, different record content.
    assert_eq!(a.id, renamed.id);
    assert_ne!(a, renamed);
}
