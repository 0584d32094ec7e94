//! Logwheel Core - Shared configuration, paths, and error handling

pub mod config;
pub mod constants;
pub mod error;

pub use config::LogConfig;
pub use constants::*;
pub use error::{Error, Result};
