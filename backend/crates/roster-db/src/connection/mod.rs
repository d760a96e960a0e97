pub mod database;
pub mod row_sequence;
pub mod schema_validation;
