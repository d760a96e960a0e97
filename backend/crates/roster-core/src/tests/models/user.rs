use crate::{Entity, User};

#[test]
fn test_user_new_has_no_picture() {
    let user = User::new(1, Some("Ada".to_string()), Some("Lovelace".to_string()));

    assert_eq!(user.uid, 1);
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
    assert!(user.picture.is_none());
}

#[test]
fn test_user_from_names_sets_both_names() {
    let user = User::from_names("Alan", "Turing");

    assert_eq!(user.first_name.as_deref(), Some("Alan"));
    assert_eq!(user.last_name.as_deref(), Some("Turing"));
}

#[test]
fn test_user_same_record_ignores_picture() {
    let plain = User::new(7, Some("Grace".to_string()), None);
    let pictured = plain.clone().with_picture(vec![0x89, 0x50, 0x4e, 0x47]);

    assert!(plain.same_record(&pictured));
    assert_ne!(plain, pictured);
}

#[test]
fn test_user_same_record_detects_field_change() {
    let stored = User::new(7, Some("Grace".to_string()), Some("Hopper".to_string()));
    let other = User::new(7, Some("Grace".to_string()), None);

    assert!(!stored.same_record(&other));
}

#[test]
fn test_user_key_is_uid() {
    let user = User::new(-42, None, None);
    assert_eq!(user.key(), -42);
}

#[test]
fn test_user_picture_is_not_a_column() {
    assert!(User::SCHEMA.is_ignored("picture"));
    assert!(User::SCHEMA.column_for("picture").is_none());
}
