use crate::{ColumnDef, CoreError, Entity, SqlType, TableSchema, User};

use googletest::prelude::*;

#[test]
fn given_user_schema_when_inspected_then_uid_is_primary_key() {
    let pk = User::SCHEMA.primary_key().unwrap();

    assert_that!(pk.column, eq("uid"));
    assert_that!(pk.nullable, eq(false));
}

#[test]
fn given_user_schema_when_looking_up_fields_then_storage_names_resolve() {
    let first = User::SCHEMA.column_for("first_name").unwrap();
    let last = User::SCHEMA.column_for("last_name").unwrap();

    assert_eq!(first.column, "firstName");
    assert_eq!(last.column, "last_name");
}

#[test]
fn given_user_schema_when_listing_columns_then_declaration_order() {
    assert_that!(
        User::SCHEMA.column_names(),
        elements_are![eq(&"uid"), eq(&"firstName"), eq(&"last_name")]
    );
}

#[test]
fn given_user_schema_when_rendering_ddl_then_matches_persisted_layout() {
    let ddl = User::SCHEMA.create_table_sql();

    assert_that!(
        ddl,
        eq("CREATE TABLE IF NOT EXISTS \"user\" (\n    \"uid\" INT NOT NULL PRIMARY KEY,\n    \"firstName\" TEXT,\n    \"last_name\" TEXT\n)")
    );
}

#[test]
fn given_user_schema_when_validated_then_ok() {
    assert_that!(User::SCHEMA.validate(), ok(anything()));
}

#[test]
fn given_schema_without_primary_key_when_validated_then_error() {
    const COLUMNS: &[ColumnDef] = &[ColumnDef::new("name", "name", SqlType::Text)];
    let schema = TableSchema {
        table: "broken",
        columns: COLUMNS,
        ignored_fields: &[],
    };

    let result = schema.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_schema_persisting_ignored_field_when_validated_then_error() {
    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::key("id", "id", SqlType::Integer),
        ColumnDef::new("picture", "picture", SqlType::Text),
    ];
    let schema = TableSchema {
        table: "broken",
        columns: COLUMNS,
        ignored_fields: &["picture"],
    };

    assert_that!(schema.validate(), err(anything()));
}

#[test]
fn given_duplicate_column_names_when_validated_then_error() {
    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::key("id", "id", SqlType::Integer),
        ColumnDef::new("name", "label", SqlType::Text),
        ColumnDef::new("title", "label", SqlType::Text).not_null(),
    ];
    let schema = TableSchema {
        table: "broken",
        columns: COLUMNS,
        ignored_fields: &[],
    };

    assert_that!(schema.validate(), err(anything()));
}

#[test]
fn given_non_key_integer_column_when_rendered_then_declared_integer() {
    let column = ColumnDef::new("age", "age", SqlType::Integer).not_null();

    assert_that!(column.declared_type(), eq("INTEGER"));
    assert_that!(column.ddl(), eq("\"age\" INTEGER NOT NULL"));
}
