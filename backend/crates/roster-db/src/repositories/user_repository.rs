use crate::connection::row_sequence::reserve;
use crate::{DbError, Result as DbErrorResult, UserDao};

use roster_core::models::user::{FIRST_NAME_COLUMN, LAST_NAME_COLUMN, UID_COLUMN};
use roster_core::schema::column_def::quote_ident;
use roster_core::{ConflictPolicy, Entity, ErrorLocation, LikePattern, User};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tokio::sync::RwLock;

/// Lowest default SQLITE_MAX_VARIABLE_NUMBER across SQLite releases
const MAX_BIND_PARAMS: usize = 999;

pub struct UserRepository {
    pool: SqlitePool,
    lock: Arc<RwLock<()>>,
    policy: ConflictPolicy,
}

impl UserRepository {
    pub fn new(pool: SqlitePool, lock: Arc<RwLock<()>>, policy: ConflictPolicy) -> Self {
        Self { pool, lock, policy }
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.policy
    }

    fn select_sql() -> String {
        format!(
            "SELECT {} FROM {}",
            User::SCHEMA.select_list(),
            User::SCHEMA.quoted_table()
        )
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<User> {
        Ok(User::new(
            row.try_get(UID_COLUMN)?,
            row.try_get(FIRST_NAME_COLUMN)?,
            row.try_get(LAST_NAME_COLUMN)?,
        ))
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error.as_database_error().is_some_and(|e| {
        // SQLITE_CONSTRAINT_PRIMARYKEY / SQLITE_CONSTRAINT_UNIQUE
        e.is_unique_violation() || matches!(e.code().as_deref(), Some("1555" | "2067"))
    })
}

#[async_trait]
impl UserDao for UserRepository {
    async fn insert_all(&self, users: &[User]) -> DbErrorResult<Vec<i64>> {
        let _guard = self.lock.write().await;

        if users.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "INSERT OR {} INTO {} (rowid, {}) VALUES (?, ?, ?, ?)",
            self.policy.sql_clause(),
            User::SCHEMA.quoted_table(),
            User::SCHEMA.select_list()
        );

        let mut tx = self.pool.begin().await?;
        let first_row_id = reserve(&mut *tx, User::SCHEMA.table, users.len() as i64).await?;
        let row_ids: Vec<i64> = (first_row_id..).take(users.len()).collect();

        for (user, row_id) in users.iter().zip(&row_ids) {
            let result = sqlx::query(&sql)
                .bind(row_id)
                .bind(user.uid)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .execute(&mut *tx)
                .await;

            match result {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {
                    warn!("Insert rejected, uid {} already exists", user.uid);
                    if let Err(rollback) = tx.rollback().await {
                        warn!("Rollback after rejected insert failed: {rollback}");
                    }
                    return Err(DbError::DuplicateKey {
                        uid: user.uid,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }

        tx.commit().await?;

        debug!("Inserted {} user(s), row ids {:?}", users.len(), row_ids);

        Ok(row_ids)
    }

    async fn delete(&self, user: &User) -> DbErrorResult<u64> {
        let _guard = self.lock.write().await;

        // `IS` so that a NULL column matches a None field
        let predicate = User::SCHEMA
            .columns
            .iter()
            .map(|c| format!("{} IS ?", quote_ident(c.column)))
            .collect::<Vec<_>>()
            .join(" AND ");

        let sql = format!(
            "DELETE FROM {} WHERE {}",
            User::SCHEMA.quoted_table(),
            predicate
        );

        let result = sqlx::query(&sql)
            .bind(user.uid)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .execute(&self.pool)
            .await?;

        debug!("Delete key {}: {} row(s)", user.key(), result.rows_affected());

        Ok(result.rows_affected())
    }

    async fn get_all(&self) -> DbErrorResult<Vec<User>> {
        let _guard = self.lock.read().await;

        let sql = format!("{} ORDER BY rowid ASC", Self::select_sql());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn load_all_by_ids(&self, ids: &HashSet<i32>) -> DbErrorResult<Vec<User>> {
        let _guard = self.lock.read().await;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = ids.iter().copied().collect();
        let mut found: Vec<(i64, User)> = Vec::new();

        for chunk in ids.chunks(MAX_BIND_PARAMS) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "SELECT rowid, {} FROM {} WHERE {} IN (",
                User::SCHEMA.select_list(),
                User::SCHEMA.quoted_table(),
                quote_ident(UID_COLUMN)
            ));

            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let rows = builder.build().fetch_all(&self.pool).await?;
            for row in &rows {
                found.push((row.try_get(0)?, Self::from_row(row)?));
            }
        }

        found.sort_by_key(|(row_id, _)| *row_id);

        Ok(found.into_iter().map(|(_, user)| user).collect())
    }

    async fn find_by_name(&self, first: &str, last: &str) -> DbErrorResult<User> {
        let _guard = self.lock.read().await;

        let first_pattern = LikePattern::new(first);
        let last_pattern = LikePattern::new(last);

        let sql = format!(
            "{} WHERE {} GLOB ? AND {} GLOB ? ORDER BY rowid ASC LIMIT 1",
            Self::select_sql(),
            quote_ident(FIRST_NAME_COLUMN),
            quote_ident(LAST_NAME_COLUMN)
        );

        let row = sqlx::query(&sql)
            .bind(first_pattern.to_glob())
            .bind(last_pattern.to_glob())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::from_row(&row),
            None => Err(DbError::NotFound {
                first: first.to_string(),
                last: last.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
