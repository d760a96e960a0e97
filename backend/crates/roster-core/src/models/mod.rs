pub mod conflict_policy;
pub mod user;
