use crate::schema::column_def::quote_ident;
use crate::{ColumnDef, CoreError, Result as CoreErrorResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;

/// Explicit table layout for an [`Entity`](crate::Entity)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [ColumnDef],
    /// Fields present on the Rust type but never persisted
    pub ignored_fields: &'static [&'static str],
}

impl TableSchema {
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    pub fn column_for(&self, field: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.column).collect()
    }

    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored_fields.contains(&field)
    }

    pub fn quoted_table(&self) -> String {
        quote_ident(self.table)
    }

    /// Comma separated, quoted column list in declaration order
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| quote_ident(c.column))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("    {}", c.ddl()))
            .collect::<Vec<_>>()
            .join(",\n");

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            self.quoted_table(),
            columns
        )
    }

    /// Check the descriptor itself is coherent before any DDL is issued
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let keys = self.columns.iter().filter(|c| c.primary_key).count();
        if keys != 1 {
            return Err(self.invalid(format!("expected exactly one primary key, found {keys}")));
        }

        let mut seen = HashSet::new();
        for column in self.columns {
            if !seen.insert(column.column) {
                return Err(self.invalid(format!("duplicate column '{}'", column.column)));
            }
            if self.is_ignored(column.field) {
                return Err(self.invalid(format!(
                    "field '{}' is both persisted and ignored",
                    column.field
                )));
            }
        }

        Ok(())
    }

    #[track_caller]
    fn invalid(&self, message: String) -> CoreError {
        CoreError::Validation {
            message: format!("table '{}': {}", self.table, message),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
