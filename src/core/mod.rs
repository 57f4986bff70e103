//! Core logger types

pub mod config;
pub mod error;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use sink::{MemorySink, SinkKind};
pub use timestamp::DEFAULT_TIME_FORMAT;
