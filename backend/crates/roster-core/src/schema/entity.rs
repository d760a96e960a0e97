use crate::TableSchema;

/// A record type that maps onto a single table
pub trait Entity {
    const SCHEMA: TableSchema;

    /// Primary key value of this record
    fn key(&self) -> i64;
}
