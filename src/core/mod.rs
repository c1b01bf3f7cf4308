pub mod config;
pub mod error;

pub use config::{TableConfig, TextConfig, TextConfigBuilder};
pub use error::{Result, TextIoError};
