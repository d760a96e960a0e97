use crate::{ConflictPolicy, CoreError};

use std::str::FromStr;

#[test]
fn test_conflict_policy_as_str() {
    assert_eq!(ConflictPolicy::Abort.as_str(), "abort");
    assert_eq!(ConflictPolicy::Replace.as_str(), "replace");
}

#[test]
fn test_conflict_policy_from_str() {
    assert_eq!(
        ConflictPolicy::from_str("abort").unwrap(),
        ConflictPolicy::Abort
    );
    assert_eq!(
        ConflictPolicy::from_str("replace").unwrap(),
        ConflictPolicy::Replace
    );
}

#[test]
fn test_conflict_policy_from_str_rejects_unknown() {
    let err = ConflictPolicy::from_str("ignore").unwrap_err();
    assert!(matches!(err, CoreError::InvalidConflictPolicy { ref value, .. } if value == "ignore"));
}

#[test]
fn test_conflict_policy_default_is_abort() {
    assert_eq!(ConflictPolicy::default(), ConflictPolicy::Abort);
}

#[test]
fn test_conflict_policy_sql_clause() {
    assert_eq!(ConflictPolicy::Abort.sql_clause(), "ABORT");
    assert_eq!(ConflictPolicy::Replace.sql_clause(), "REPLACE");
}
