use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What an insert does when the primary key is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Reject the whole batch with a duplicate key error
    #[default]
    Abort,
    /// Drop the existing record and store the new one in its place
    Replace,
}

impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Replace => "replace",
        }
    }

    /// SQLite conflict clause used by `INSERT OR <clause>`
    pub fn sql_clause(&self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::Replace => "REPLACE",
        }
    }
}

impl FromStr for ConflictPolicy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "abort" => Ok(Self::Abort),
            "replace" => Ok(Self::Replace),
            _ => Err(CoreError::InvalidConflictPolicy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
