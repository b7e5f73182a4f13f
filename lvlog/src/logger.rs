use crate::error::LogError;
use crate::format::format_now;
use crate::level::Severity;
use crate::location::Location;
use crate::sink::Sink;
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Leveled logger writing one line per accepted call to its sink.
///
/// The threshold is atomic and every sink access goes through one mutex,
/// so a redirect never interleaves with a half-written line.
#[derive(Debug)]
pub struct Logger {
    threshold: AtomicU8,
    sink: Mutex<Sink>,
}

impl Logger {
    pub fn new(sink: Sink) -> Self {
        Self {
            threshold: AtomicU8::new(Severity::Debug as u8),
            sink: Mutex::new(sink),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Sink::Stdout)
    }

    pub fn with_level(self, level: Severity) -> Self {
        self.set_level(level);
        self
    }

    pub fn level(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_level(&self, level: Severity) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Whether a call at `severity` passes the threshold.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /// Send further lines to `path`, opened for append and created if absent.
    ///
    /// On failure the current sink stays in place. On success the previous
    /// sink is handed back; dropping it releases a previously opened file.
    pub fn redirect(&self, path: impl AsRef<Path>) -> Result<Sink, LogError> {
        let sink = Sink::open(path)?;
        Ok(self.set_sink(sink))
    }

    /// Swap in an arbitrary sink, returning the previous one.
    pub fn set_sink(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut *self.lock_sink(), sink)
    }

    /// Flush and release the current sink. Later lines are dropped until
    /// the next redirect.
    pub fn close(&self) -> Result<(), LogError> {
        self.lock_sink().close()
    }

    pub fn is_closed(&self) -> bool {
        self.lock_sink().is_closed()
    }

    /// Emit one line if `severity` passes the threshold.
    ///
    /// Write failures are dropped; logging never fails the caller.
    pub fn log(&self, severity: Severity, location: Location, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let line = format_now(severity, location, args);
        let _ = self.lock_sink().write_line(&line);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, Location::caller(), args);
    }

    #[track_caller]
    pub fn notice(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Notice, Location::caller(), args);
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, Location::caller(), args);
    }

    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, Location::caller(), args);
    }

    /// Same as [`Logger::debug`]. Lets printf-style client adapters hand
    /// their output to this logger.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, Location::caller(), args);
    }

    fn lock_sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}
