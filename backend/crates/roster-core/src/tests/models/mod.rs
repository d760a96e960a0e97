mod conflict_policy;
mod user;
