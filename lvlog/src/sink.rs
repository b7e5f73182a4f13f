use crate::error::LogError;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Destination receiving rendered log lines.
#[derive(Default)]
pub enum Sink {
    #[default]
    Stdout,
    Stderr,
    File { path: PathBuf, file: File },
    Writer(Box<dyn Write + Send>),
    /// Released by `close`. Lines written here are dropped.
    Closed,
}

impl Sink {
    /// Open `path` for appending, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let file = options.open(path).map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Sink::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// In-memory sink plus a handle to read back what was written.
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::default();
        (Sink::Writer(Box::new(buffer.clone())), buffer)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Sink::Closed)
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Write one rendered line in a single call.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        let bytes = line.as_bytes();
        match self {
            Sink::Stdout => io::stdout().lock().write_all(bytes),
            Sink::Stderr => io::stderr().lock().write_all(bytes),
            Sink::File { file, .. } => file.write_all(bytes),
            Sink::Writer(writer) => writer.write_all(bytes),
            Sink::Closed => Ok(()),
        }
    }

    /// Flush and release the underlying handle.
    ///
    /// Process stdout/stderr are flushed but stay open for the rest of the
    /// process.
    pub fn close(&mut self) -> Result<(), LogError> {
        let flushed = match std::mem::replace(self, Sink::Closed) {
            Sink::Closed => return Err(LogError::AlreadyClosed),
            Sink::Stdout => io::stdout().flush(),
            Sink::Stderr => io::stderr().flush(),
            Sink::File { mut file, .. } => file.flush(),
            Sink::Writer(mut writer) => writer.flush(),
        };
        flushed.map_err(|source| LogError::Close { source })
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
            Sink::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
            Sink::Closed => f.write_str("Closed"),
        }
    }
}

/// Shared, cloneable byte buffer usable as a sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_memory_sink_collects_lines() {
        let (mut sink, buffer) = Sink::memory();
        sink.write_line("first\n").unwrap();
        sink.write_line("second\n").unwrap();

        assert_eq!(buffer.lines(), vec!["first", "second"]);

        buffer.clear();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_close_transitions_to_closed() {
        let (mut sink, buffer) = Sink::memory();
        sink.close().unwrap();
        assert!(sink.is_closed());

        sink.write_line("dropped\n").unwrap();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_double_close_is_reported() {
        let mut sink = Sink::Stdout;
        sink.close().unwrap();
        assert!(matches!(sink.close(), Err(LogError::AlreadyClosed)));
    }

    #[test]
    fn test_close_surfaces_flush_error() {
        let mut sink = Sink::Writer(Box::new(FailingWriter));
        assert!(matches!(sink.close(), Err(LogError::Close { .. })));
        assert!(sink.is_closed());
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        match Sink::open(&path) {
            Err(LogError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Open error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut sink = Sink::open(&path).unwrap();
        assert_eq!(sink.path(), Some(path.as_path()));
        sink.write_line("appended\n").unwrap();
        sink.close().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\nappended\n"
        );
    }
}
