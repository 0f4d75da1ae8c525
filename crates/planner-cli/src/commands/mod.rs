//! Command implementations.

pub mod config;
pub mod parse;
pub mod time;

pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::time::execute_time;
