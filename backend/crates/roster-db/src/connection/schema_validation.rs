use crate::{DbError, Result};

use roster_core::{ErrorLocation, TableSchema};

use std::panic::Location;

use log::warn;
use sqlx::{Row, SqlitePool};

struct LiveColumn {
    name: String,
    declared_type: String,
    not_null: bool,
    primary_key: bool,
}

/// Compare the live table layout with the descriptor it was created from
pub async fn validate_table_schema(pool: &SqlitePool, schema: &TableSchema) -> Result<()> {
    let rows = sqlx::query(r#"SELECT name, type, "notnull", pk FROM pragma_table_info(?)"#)
        .bind(schema.table)
        .fetch_all(pool)
        .await?;

    if rows.is_empty() {
        return Err(schema_error(format!(
            "Table '{}' does not exist",
            schema.table
        )));
    }

    let live = rows
        .iter()
        .map(|row| -> std::result::Result<LiveColumn, sqlx::Error> {
            Ok(LiveColumn {
                name: row.try_get("name")?,
                declared_type: row.try_get("type")?,
                not_null: row.try_get::<i64, _>("notnull")? != 0,
                primary_key: row.try_get::<i64, _>("pk")? != 0,
            })
        })
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

    for expected in schema.columns {
        let Some(actual) = live.iter().find(|c| c.name == expected.column) else {
            return Err(schema_error(format!(
                "Table '{}' is missing column '{}'",
                schema.table, expected.column
            )));
        };

        if !actual
            .declared_type
            .eq_ignore_ascii_case(expected.declared_type())
        {
            return Err(schema_error(format!(
                "Column '{}' has type '{}' but expected '{}'",
                expected.column,
                actual.declared_type,
                expected.declared_type()
            )));
        }

        if actual.primary_key != expected.primary_key {
            return Err(schema_error(format!(
                "Column '{}' primary key flag is {} but expected {}",
                expected.column, actual.primary_key, expected.primary_key
            )));
        }

        if actual.not_null == expected.nullable {
            return Err(schema_error(format!(
                "Column '{}' nullability differs from the declared schema",
                expected.column
            )));
        }
    }

    for actual in &live {
        if !schema.columns.iter().any(|c| c.column == actual.name) {
            warn!(
                "Extra column '{}' found in table '{}'",
                actual.name, schema.table
            );
        }
    }

    Ok(())
}

#[track_caller]
fn schema_error(message: String) -> DbError {
    DbError::Schema {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
