//! Renderer: stat a path and write its record

use std::io::{self, Write};
use std::path::Path;

use crate::error::{self, EntryError};
use crate::platform::PlatformMetadata;
use crate::record::FileRecord;
use crate::tree::RecordSink;

use super::writer::RecordWriter;

/// Record sink that writes one tab-separated line per rendered path.
pub struct TsvRenderer<W: Write, P: PlatformMetadata> {
    writer: RecordWriter<W, P>,
    reported: usize,
}

impl<W: Write, P: PlatformMetadata> TsvRenderer<W, P> {
    pub fn new(out: W, platform: P) -> Self {
        Self {
            writer: RecordWriter::new(out, platform),
            reported: 0,
        }
    }

    /// Number of diagnostics reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write, P: PlatformMetadata> RecordSink for TsvRenderer<W, P> {
    fn render(&mut self, path: &Path) -> io::Result<()> {
        let mut diagnostics = Vec::new();
        let record = FileRecord::collect(path, self.writer.platform(), &mut diagnostics);
        for e in &diagnostics {
            self.report(e);
        }
        self.writer.write_record(&record)
    }

    fn report(&mut self, err: &EntryError) {
        self.reported += 1;
        error::report(err);
    }
}
