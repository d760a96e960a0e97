use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] roster_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] roster_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, DemoError>;
