pub mod app;
pub mod cli;
pub mod error;
pub mod logger;


pub use cli::Cli;
pub use error::{DemoError, Result as DemoResult};
