// crates/logging/src/sink.rs
use std::fs::File;
use std::io::{self, Write};
use tracing_subscriber::fmt::writer::MakeWriter;

/// Console writer; diagnostics always go to stderr so stdout stays
/// machine-readable.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LogWriter;

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        io::stderr()
    }
}

pub(crate) struct FileWriter {
    pub(crate) file: File,
}

pub(crate) enum FileHandle {
    File(File),
    Failed,
}

impl Write for FileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileHandle::File(f) => f.write(buf),
            FileHandle::Failed => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileHandle::File(f) => f.flush(),
            FileHandle::Failed => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileHandle;

    fn make_writer(&'a self) -> Self::Writer {
        // a failed clone drops the event rather than panicking mid-log
        match self.file.try_clone() {
            Ok(f) => FileHandle::File(f),
            Err(_) => FileHandle::Failed,
        }
    }
}
