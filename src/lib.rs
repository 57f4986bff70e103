//! # flg
//!
//! A minimal, thread-safe line logger. Each call renders
//! `[timestamp ][prefix]message` into a reused buffer and hands it to a
//! single sink (standard error, an append-mode file, or any writer) in one
//! write, under the logger's lock.
//!
//! ## Features
//!
//! - **Atomic lines**: concurrent callers never interleave bytes
//! - **File or stream sinks**: with a fallback to standard error when a log file cannot be opened
//! - **Default instance**: free functions and macros that need no setup
//! - **No levels, no fan-out**: one line, one sink, synchronously
//!
//! ```
//! use flg::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).no_timestamp().build();
//! logger.set_prefix("[A] ");
//! logger.write("hello").unwrap();
//! assert_eq!(sink.contents_string(), "[A] hello");
//! ```

pub mod core;
pub mod format;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Logger, LoggerBuilder, LoggerConfig, LoggerError, MemorySink, Result, SinkKind,
        DEFAULT_TIME_FORMAT,
    };
}

pub use crate::core::{
    Logger, LoggerBuilder, LoggerConfig, LoggerError, MemorySink, Result, SinkKind,
    DEFAULT_TIME_FORMAT, FATAL_EXIT_CODE,
};
pub use crate::global::{
    fatal, fatalln, flush, logger, panic, panicln, prefix, print, print_values, println,
    println_values, set_filename, set_prefix, set_sink, set_time_format, sink_kind, time_format,
    try_set_filename, write,
};
