#![allow(dead_code)]

use roster_core::User;

/// Creates a user with both names set
pub fn create_test_user(uid: i32, first_name: &str, last_name: &str) -> User {
    User::new(
        uid,
        Some(first_name.to_string()),
        Some(last_name.to_string()),
    )
}

pub fn ada() -> User {
    create_test_user(1, "Ada", "Lovelace")
}

pub fn alan() -> User {
    create_test_user(2, "Alan", "Turing")
}

pub fn grace() -> User {
    create_test_user(3, "Grace", "Hopper")
}

/// Creates a user with neither name set
pub fn create_anonymous_user(uid: i32) -> User {
    User::new(uid, None, None)
}
