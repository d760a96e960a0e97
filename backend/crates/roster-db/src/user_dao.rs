use crate::Result as DbErrorResult;

use roster_core::User;

use std::collections::HashSet;

use async_trait::async_trait;

/// Operations the rest of an application uses to reach stored users
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Insert every user in one transaction, returning one row id per input
    /// in input order.
    async fn insert_all(&self, users: &[User]) -> DbErrorResult<Vec<i64>>;

    /// Remove the stored row whose persisted fields all equal `user`'s.
    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, user: &User) -> DbErrorResult<u64>;

    async fn get_all(&self) -> DbErrorResult<Vec<User>>;

    async fn load_all_by_ids(&self, ids: &HashSet<i32>) -> DbErrorResult<Vec<User>>;

    /// First user, in insertion order, whose names match both `LIKE` patterns
    async fn find_by_name(&self, first: &str, last: &str) -> DbErrorResult<User>;
}
