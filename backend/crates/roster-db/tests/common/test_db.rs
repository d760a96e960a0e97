#![allow(dead_code)]

use roster_core::ConflictPolicy;
use roster_db::Database;

/// Opens a private in-memory database with the default conflict policy
pub async fn create_test_db() -> Database {
    create_test_db_with_policy(ConflictPolicy::Abort).await
}

pub async fn create_test_db_with_policy(policy: ConflictPolicy) -> Database {
    Database::open_in_memory(policy)
        .await
        .expect("Failed to open in-memory database")
}
