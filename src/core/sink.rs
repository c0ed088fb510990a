//! Output destinations for formatted log lines

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;

/// A writable destination plus whether it is attached to a terminal.
pub struct Sink {
    writer: Box<dyn Write + Send>,
    terminal: bool,
    name: &'static str,
}

impl Sink {
    pub fn stdout() -> Self {
        Self {
            terminal: io::stdout().is_terminal(),
            writer: Box::new(io::stdout()),
            name: "stdout",
        }
    }

    pub fn stderr() -> Self {
        Self {
            terminal: io::stderr().is_terminal(),
            writer: Box::new(io::stderr()),
            name: "stderr",
        }
    }

    /// Open `path` for appending, creating it if missing.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            writer: Box::new(file),
            terminal: false,
            name: "file",
        })
    }

    /// Wrap an arbitrary writer. It is treated as a non-terminal.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            terminal: false,
            name: "writer",
        }
    }

    /// Override terminal detection, e.g. for a pty handed in as a writer.
    #[must_use]
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("terminal", &self.terminal)
            .finish()
    }
}

impl From<BufferSink> for Sink {
    fn from(buffer: BufferSink) -> Self {
        Self {
            writer: Box::new(buffer),
            terminal: false,
            name: "buffer",
        }
    }
}

/// Shared in-memory sink. Clones write to the same buffer.
///
/// # Example
///
/// ```
/// use tripwire::{BufferSink, Logger};
///
/// let buffer = BufferSink::new();
/// let logger = Logger::new();
/// logger.set_output(buffer.clone());
/// logger.set_show_caller(false);
/// logger.info("ready");
/// assert!(buffer.contents().ends_with("INFO  ready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
