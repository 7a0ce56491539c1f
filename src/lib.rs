pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::simpledb::SimpleDbClient;
pub use config::DemoSettings;
pub use core::runner::{DemoOutcome, DemoRunner};
pub use utils::error::{DemoError, Result, ServiceError};
