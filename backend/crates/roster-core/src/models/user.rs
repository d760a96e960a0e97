use crate::{ColumnDef, Entity, SqlType, TableSchema};

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const USER_TABLE: &str = "user";
pub const UID_COLUMN: &str = "uid";
pub const FIRST_NAME_COLUMN: &str = "firstName";
pub const LAST_NAME_COLUMN: &str = "last_name";

const USER_COLUMNS: &[ColumnDef] = &[
    ColumnDef::key("uid", UID_COLUMN, SqlType::Integer),
    ColumnDef::new("first_name", FIRST_NAME_COLUMN, SqlType::Text),
    ColumnDef::new("last_name", LAST_NAME_COLUMN, SqlType::Text),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,

    /// Held in memory only. Records read back from storage never carry it.
    #[serde(skip)]
    pub picture: Option<Vec<u8>>,
}

impl User {
    pub fn new(uid: i32, first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            uid,
            first_name,
            last_name,
            picture: None,
        }
    }

    /// Build a user keyed by the low 32 bits of the current time in milliseconds
    pub fn from_names(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let uid = Utc::now().timestamp_millis() as i32;
        Self::new(uid, Some(first_name.into()), Some(last_name.into()))
    }

    pub fn with_picture(mut self, picture: Vec<u8>) -> Self {
        self.picture = Some(picture);
        self
    }

    /// True when every persisted field matches, ignoring transient ones
    pub fn same_record(&self, other: &User) -> bool {
        self.uid == other.uid
            && self.first_name == other.first_name
            && self.last_name == other.last_name
    }
}

impl Entity for User {
    const SCHEMA: TableSchema = TableSchema {
        table: USER_TABLE,
        columns: USER_COLUMNS,
        ignored_fields: &["picture"],
    };

    fn key(&self) -> i64 {
        i64::from(self.uid)
    }
}
