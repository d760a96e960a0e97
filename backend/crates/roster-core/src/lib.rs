pub mod error;
pub mod like_pattern;
pub mod models;
pub mod schema;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use like_pattern::LikePattern;
pub use models::conflict_policy::ConflictPolicy;
pub use models::user::User;
pub use schema::column_def::ColumnDef;
pub use schema::entity::Entity;
pub use schema::sql_type::SqlType;
pub use schema::table_schema::TableSchema;
