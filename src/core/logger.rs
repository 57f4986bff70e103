//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    sink::{Sink, SinkKind},
    timestamp::{self, DEFAULT_TIME_FORMAT},
};
use crate::format;
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exit status used by the `fatal*` family.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Everything the lock protects.
struct State {
    sink: Sink,
    prefix: String,
    time_format: String,
    /// Reused for every line; only meaningful inside one critical section.
    buf: Vec<u8>,
}

/// A thread-safe line logger.
///
/// Each call to [`write`](Logger::write) emits `[time ][prefix]message` to the
/// sink as a single write while holding the logger's lock, so lines from
/// concurrent callers never interleave. Callers racing for the lock are
/// served in whatever order they acquire it.
///
/// Every operation, including the getters, blocks until the lock is free.
/// There is no timeout: a slow sink stalls every user of the same logger.
/// Atomicity only holds among callers of one `Logger`; two loggers sharing a
/// writer may interleave.
///
/// # Examples
///
/// ```
/// use flg::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new("");
/// logger.set_sink(sink.clone());
/// logger.set_time_format("");
/// logger.set_prefix("[api] ");
///
/// logger.write("started\n").unwrap();
/// assert_eq!(sink.contents_string(), "[api] started\n");
/// ```
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Create a logger writing to `target`.
    ///
    /// An empty target writes to standard error. Otherwise the file is opened
    /// for appending and created if missing. If it cannot be opened the error
    /// is printed to standard output and the logger writes to standard error
    /// instead; construction itself never fails.
    #[must_use]
    pub fn new(target: impl AsRef<Path>) -> Self {
        let target = target.as_ref();
        let sink = if target.as_os_str().is_empty() {
            Sink::Stderr
        } else {
            open_or_stderr(target)
        };
        Self::with_sink(sink, String::new(), DEFAULT_TIME_FORMAT.to_string())
    }

    /// Create a logger from a [`LoggerConfig`].
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = match &config.filename {
            Some(path) => Self::new(path),
            None => Self::new(""),
        };
        logger.set_prefix(config.prefix.clone());
        logger.set_time_format(config.time_format.clone());
        logger
    }

    fn with_sink(sink: Sink, prefix: String, time_format: String) -> Self {
        Self {
            state: Mutex::new(State {
                sink,
                prefix,
                time_format,
                buf: Vec::new(),
            }),
        }
    }

    /// Replace the sink with a caller-supplied writer.
    ///
    /// The previous sink is dropped, not explicitly closed.
    pub fn set_sink<W: Write + Send + 'static>(&self, writer: W) {
        self.state.lock().sink = Sink::Writer(Box::new(writer));
    }

    /// Switch to appending to `target`.
    ///
    /// A file this logger opened earlier is closed first. If the new file
    /// cannot be opened the error is printed to standard output and the
    /// logger falls back to standard error. Use
    /// [`try_set_filename`](Logger::try_set_filename) to receive the error.
    pub fn set_filename(&self, target: impl AsRef<Path>) {
        if let Err(err) = self.try_set_filename(target) {
            println!("[FLG ERROR] {}", err);
        }
    }

    /// Like [`set_filename`](Logger::set_filename), but returns the open
    /// error instead of printing it. The logger is left writing to standard
    /// error in that case.
    pub fn try_set_filename(&self, target: impl AsRef<Path>) -> Result<()> {
        let mut state = self.state.lock();
        // Dropping the old sink closes a logger-owned file.
        state.sink = Sink::Stderr;
        state.sink = Sink::open(target)?;
        Ok(())
    }

    /// Which kind of sink is currently in use
    pub fn sink_kind(&self) -> SinkKind {
        self.state.lock().sink.kind()
    }

    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state.lock().prefix = prefix.into();
    }

    pub fn time_format(&self) -> String {
        self.state.lock().time_format.clone()
    }

    /// Set the strftime format for the leading timestamp. An empty format
    /// disables the timestamp and its trailing space.
    pub fn set_time_format(&self, format: impl Into<String>) {
        self.state.lock().time_format = format.into();
    }

    /// Write one line: `[time ][prefix]message`.
    ///
    /// No newline is added. The assembled bytes reach the sink in a single
    /// `write_all` while the lock is held. Sink errors are returned as-is;
    /// nothing is retried.
    pub fn write(&self, message: &str) -> Result<()> {
        let mut guard = self.state.lock();
        let State {
            sink,
            prefix,
            time_format,
            buf,
        } = &mut *guard;

        buf.clear();
        if !time_format.is_empty() {
            timestamp::render_now(time_format, buf)?;
            buf.push(b' ');
        }
        if !prefix.is_empty() {
            buf.extend_from_slice(prefix.as_bytes());
        }
        buf.extend_from_slice(message.as_bytes());

        sink.write_all(buf).map_err(|source| {
            LoggerError::io_operation("writing log line", format!("{} sink", sink.kind()), source)
        })
    }

    /// Flush the current sink
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        let kind = state.sink.kind();
        state.sink.flush().map_err(|source| {
            LoggerError::io_operation("flushing sink", format!("{} sink", kind), source)
        })
    }

    /// Write pre-formatted arguments as-is (`logf!`).
    pub fn print(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(&format::render(args))
    }

    /// Write pre-formatted arguments, ending with a newline (`logln!`).
    pub fn println(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(&format::render_line(args))
    }

    /// Write values separated by single spaces.
    pub fn print_values(&self, values: &[&dyn Display]) -> Result<()> {
        self.write(&format::join(values))
    }

    /// Write values separated by single spaces, followed by a newline.
    pub fn println_values(&self, values: &[&dyn Display]) -> Result<()> {
        self.write(&format::join_line(values))
    }

    /// Write the message, then exit the process with status 1.
    ///
    /// A failed write does not prevent the exit.
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.print(args);
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// [`fatal`](Logger::fatal) with a guaranteed trailing newline.
    pub fn fatalln(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.println(args);
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write the message, then panic with it as a `String` payload.
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let message = format::render(args);
        let _ = self.write(&message);
        std::panic::panic_any(message)
    }

    /// [`panic`](Logger::panic) with a guaranteed trailing newline; the
    /// payload carries the newline too.
    pub fn panicln(&self, args: fmt::Arguments<'_>) -> ! {
        let message = format::render_line(args);
        let _ = self.write(&message);
        std::panic::panic_any(message)
    }
}

fn open_or_stderr(target: &Path) -> Sink {
    Sink::open(target).unwrap_or_else(|err| {
        println!("[FLG ERROR] {}", err);
        Sink::Stderr
    })
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("sink", &state.sink.kind())
            .field("prefix", &state.prefix)
            .field("time_format", &state.time_format)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.state.get_mut().sink.flush();
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use flg::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .sink(sink.clone())
///     .prefix("[worker] ")
///     .no_timestamp()
///     .build();
///
/// logger.write("ready").unwrap();
/// assert_eq!(sink.contents_string(), "[worker] ready");
/// ```
pub struct LoggerBuilder {
    filename: Option<PathBuf>,
    sink: Option<Box<dyn Write + Send>>,
    prefix: String,
    time_format: String,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filename: None,
            sink: None,
            prefix: String::new(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Take file, prefix and time format from a [`LoggerConfig`]
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.filename = config.filename;
        self.prefix = config.prefix;
        self.time_format = config.time_format;
        self
    }

    /// Append to this file. Ignored if a sink is also set.
    #[must_use = "builder methods return a new value"]
    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Write to a caller-supplied writer
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Disable the leading timestamp
    #[must_use = "builder methods return a new value"]
    pub fn no_timestamp(mut self) -> Self {
        self.time_format.clear();
        self
    }

    /// Build the Logger. Never fails; see [`Logger::new`] for the fallback.
    pub fn build(self) -> Logger {
        let sink = match (self.sink, self.filename) {
            (Some(writer), _) => Sink::Writer(writer),
            (None, Some(path)) if !path.as_os_str().is_empty() => open_or_stderr(&path),
            (None, _) => Sink::Stderr,
        };
        Logger::with_sink(sink, self.prefix, self.time_format)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
