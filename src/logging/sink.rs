//! Line-oriented output sinks for progress and warning messages.
//!
//! The deployer never writes to stdout or stderr directly.  Callers inject a
//! [`Sink`] for the summary line and another for warnings; [`NullSink`]
//! discards everything.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::Log;

/// Append-only text stream accepting one line at a time.
pub trait Sink: Send + Sync {
    /// Append `line`.  The sink adds the line terminator.
    fn write_line(&self, line: &str);
}

/// Sink that discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {
    fn write_line(&self, _line: &str) {}
}

/// Sink over any [`Write`] implementation (files, `stdout`, buffers).
///
/// Write errors are ignored: output sinks are best effort.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}").ok();
        writer.flush().ok();
    }
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Which logger method a [`LogSink`] forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkLevel {
    /// Forward to [`Log::info`].
    Info,
    /// Forward to [`Log::warn`].
    Warn,
}

/// Sink that forwards lines to a [`Log`].
///
/// The warning variant strips the `WARN:\t` prefix the deployer puts on its
/// lines, since the console formatter already tags warnings.
pub struct LogSink {
    log: Arc<dyn Log>,
    level: SinkLevel,
}

impl LogSink {
    /// Sink for progress lines (logged at info level).
    #[must_use]
    pub fn progress(log: Arc<dyn Log>) -> Self {
        Self {
            log,
            level: SinkLevel::Info,
        }
    }

    /// Sink for warning lines (logged at warn level).
    #[must_use]
    pub fn warnings(log: Arc<dyn Log>) -> Self {
        Self {
            log,
            level: SinkLevel::Warn,
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("log", &"<dyn Log>")
            .field("level", &self.level)
            .finish()
    }
}

impl Sink for LogSink {
    fn write_line(&self, line: &str) {
        match self.level {
            SinkLevel::Info => self.log.info(line),
            SinkLevel::Warn => self.log.warn(line.strip_prefix("WARN:\t").unwrap_or(line)),
        }
    }
}
