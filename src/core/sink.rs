//! Output destinations for a [`Logger`](super::Logger)

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

/// Permission bits for log files created by the logger (`rw-r--r--`).
pub const FILE_MODE: u32 = 0o644;

/// Which kind of destination a logger is currently writing to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// The process's standard error stream
    Stderr,
    /// A file the logger opened itself and will close on replacement
    File,
    /// A caller-supplied writer
    Writer,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Stderr => "stderr",
            SinkKind::File => "file",
            SinkKind::Writer => "writer",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cloneable in-memory sink; every clone appends to the same buffer.
///
/// # Examples
///
/// ```
/// use flg::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).no_timestamp().build();
/// logger.write("hello\n").unwrap();
/// assert_eq!(sink.contents_string(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The single destination owned by a logger.
///
/// Only `File` is treated as logger-owned: replacing it through
/// `set_filename` closes it. A caller-supplied writer is handed back to
/// nobody and simply dropped when replaced.
#[derive(Default)]
pub enum Sink {
    #[default]
    Stderr,
    File(File),
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Open `path` for appending, creating it with [`FILE_MODE`] if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        open_append(path)
            .map(Sink::File)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))
    }

    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Stderr => SinkKind::Stderr,
            Sink::File(_) => SinkKind::File,
            Sink::Writer(_) => SinkKind::Writer,
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Stderr"),
            Sink::File(file) => f.debug_tuple("File").field(file).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stderr => io::stderr().write(buf),
            Sink::File(file) => file.write(buf),
            Sink::Writer(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => io::stderr().lock().write_all(buf),
            Sink::File(file) => file.write_all(buf),
            Sink::Writer(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stderr => io::stderr().flush(),
            Sink::File(file) => file.flush(),
            Sink::Writer(writer) => writer.flush(),
        }
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
