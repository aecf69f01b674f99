use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use crate::error::LogError;

/// Destination of formatted log lines.
///
/// A line handed to [`LogWriter::write_line`] is complete, terminator included,
/// and must be written in one go.
pub trait LogWriter: Send {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Standard error, the default sink.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogStderr;

impl LogWriter for LogStderr {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        io::stderr().lock().write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        io::stdout().lock().write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Appends lines to a file. The file is created if it does not exist.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let file = File::options().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }
}

impl LogWriter for LogFile {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.file.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Adapter turning any [`io::Write`] into a sink.
#[derive(Debug)]
pub struct IoWriter<W> {
    inner: W,
}

impl<W: Write + Send> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> LogWriter for IoWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink. Clones share the same buffer, so the caller can keep one
/// and read back what the logger wrote through another.
#[derive(Default, Debug, Clone)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, invalid UTF-8 replaced.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for SharedBuffer {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(line.as_bytes());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_file_appends() {
    let path = std::env::temp_dir().join("linelog_test_log_file.log");
    std::fs::remove_file(&path).ok();
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.write_line("[INFO] Hello, world!\n").unwrap();
    log_file.flush().unwrap();
    drop(log_file);
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.write_line("[WARN] second run\n").unwrap();
    log_file.flush().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[INFO] Hello, world!\n[WARN] second run\n"
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_log_file_missing_directory() {
    let path = std::env::temp_dir()
        .join("linelog_no_such_dir")
        .join("app.log");
    assert!(matches!(LogFile::new(path), Err(LogError::Io(_))));
}

#[test]
fn test_shared_buffer_clones_share_storage() {
    let buffer = SharedBuffer::new();
    let mut writer = buffer.clone();
    assert!(buffer.is_empty());
    writer.write_line("[INFO] one\n").unwrap();
    writer.write_line("[INFO] two\n").unwrap();
    assert_eq!(buffer.lines(), vec!["[INFO] one", "[INFO] two"]);
    buffer.clear();
    assert!(writer.is_empty());
}

#[test]
fn test_io_writer_and_boxed_writer() {
    let mut writer: Box<dyn LogWriter> = Box::new(IoWriter::new(Vec::new()));
    writer.write_line("[DEBUG] boxed\n").unwrap();
    writer.flush().unwrap();

    let mut writer = IoWriter::new(Vec::new());
    writer.write_line("[DEBUG] direct\n").unwrap();
    assert_eq!(writer.into_inner(), b"[DEBUG] direct\n");
}
