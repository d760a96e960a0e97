use crate::SqlType;

/// Mapping of one entity field onto one table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field name on the Rust type
    pub field: &'static str,
    /// Column name in storage, may differ from `field`
    pub column: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub primary_key: bool,
}

impl ColumnDef {
    pub const fn new(field: &'static str, column: &'static str, sql_type: SqlType) -> Self {
        Self {
            field,
            column,
            sql_type,
            nullable: true,
            primary_key: false,
        }
    }

    /// Non-null primary key column
    pub const fn key(field: &'static str, column: &'static str, sql_type: SqlType) -> Self {
        Self {
            field,
            column,
            sql_type,
            nullable: false,
            primary_key: true,
        }
    }

    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Type name as written into the DDL.
    ///
    /// An integer primary key is declared `INT` so SQLite keeps a separate
    /// rowid instead of aliasing it to the key. Rowids then follow insertion
    /// order.
    pub fn declared_type(&self) -> &'static str {
        match (self.sql_type, self.primary_key) {
            (SqlType::Integer, true) => "INT",
            (sql_type, _) => sql_type.as_str(),
        }
    }

    /// Column definition fragment for `CREATE TABLE`
    pub fn ddl(&self) -> String {
        let mut ddl = format!("{} {}", quote_ident(self.column), self.declared_type());
        if !self.nullable {
            ddl.push_str(" NOT NULL");
        }
        if self.primary_key {
            ddl.push_str(" PRIMARY KEY");
        }
        ddl
    }
}

/// Double-quote an SQL identifier, doubling embedded quotes
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
