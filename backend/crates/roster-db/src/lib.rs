pub mod connection;
pub mod error;
pub mod repositories;
pub mod user_dao;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use user_dao::UserDao;
