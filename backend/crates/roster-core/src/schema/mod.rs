pub mod column_def;
pub mod entity;
pub mod sql_type;
pub mod table_schema;
