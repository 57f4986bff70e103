//! Process-wide default logger.
//!
//! The default instance writes to standard error with the default time
//! format and no prefix. It is created on first use and lives until the
//! process exits. The free functions here forward to it and keep no state
//! of their own.

use crate::core::{Logger, Result, SinkKind};
use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// The default instance, for handing to code that takes a `&Logger`.
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn set_sink<W: Write + Send + 'static>(writer: W) {
    DEFAULT_LOGGER.set_sink(writer);
}

pub fn set_filename(target: impl AsRef<Path>) {
    DEFAULT_LOGGER.set_filename(target);
}

pub fn try_set_filename(target: impl AsRef<Path>) -> Result<()> {
    DEFAULT_LOGGER.try_set_filename(target)
}

pub fn sink_kind() -> SinkKind {
    DEFAULT_LOGGER.sink_kind()
}

pub fn prefix() -> String {
    DEFAULT_LOGGER.prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    DEFAULT_LOGGER.set_prefix(prefix);
}

pub fn time_format() -> String {
    DEFAULT_LOGGER.time_format()
}

pub fn set_time_format(format: impl Into<String>) {
    DEFAULT_LOGGER.set_time_format(format);
}

pub fn write(message: &str) -> Result<()> {
    DEFAULT_LOGGER.write(message)
}

pub fn flush() -> Result<()> {
    DEFAULT_LOGGER.flush()
}

pub fn print(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.print(args)
}

pub fn println(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.println(args)
}

pub fn print_values(values: &[&dyn Display]) -> Result<()> {
    DEFAULT_LOGGER.print_values(values)
}

pub fn println_values(values: &[&dyn Display]) -> Result<()> {
    DEFAULT_LOGGER.println_values(values)
}

pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.fatal(args)
}

pub fn fatalln(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.fatalln(args)
}

pub fn panic(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.panic(args)
}

pub fn panicln(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.panicln(args)
}
