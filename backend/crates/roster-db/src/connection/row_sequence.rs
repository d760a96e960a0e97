//! Persisted high-water mark for row ids.
//!
//! Plain SQLite rowids are reused once the highest row is deleted. Each
//! table instead draws its row ids from `roster_sequence`, which only ever
//! moves forward.

use crate::Result;

use sqlx::{SqliteConnection, SqlitePool};

pub const SEQUENCE_TABLE: &str = "roster_sequence";

/// Create the sequence table and seed `table`'s entry from its current rows
pub async fn ensure_sequence(pool: &SqlitePool, quoted_table: &str, table: &str) -> Result<()> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {SEQUENCE_TABLE} (
            name TEXT NOT NULL PRIMARY KEY,
            seq INTEGER NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        INSERT OR IGNORE INTO {SEQUENCE_TABLE} (name, seq)
        SELECT ?, COALESCE(MAX(rowid), 0) FROM {quoted_table}
        "#
    ))
    .bind(table)
    .execute(pool)
    .await?;

    Ok(())
}

/// Reserve `count` consecutive row ids for `table`, returning the first.
///
/// Must run inside the inserting transaction so a rollback also returns
/// the reservation.
pub async fn reserve(conn: &mut SqliteConnection, table: &str, count: i64) -> Result<i64> {
    let high: i64 = sqlx::query_scalar(&format!(
        "UPDATE {SEQUENCE_TABLE} SET seq = seq + ? WHERE name = ? RETURNING seq"
    ))
    .bind(count)
    .bind(table)
    .fetch_one(conn)
    .await?;

    Ok(high - count + 1)
}
