//! Tab-separated record writer
//!
//! `RecordWriter` owns the "header already written" state for one run, so the
//! header appears exactly once however many roots are walked.

use std::io::{self, Write};

use crate::platform::PlatformMetadata;
use crate::record::{FileRecord, SEPARATOR};

pub struct RecordWriter<W: Write, P: PlatformMetadata> {
    out: W,
    platform: P,
    header_written: bool,
}

impl<W: Write, P: PlatformMetadata> RecordWriter<W, P> {
    pub fn new(out: W, platform: P) -> Self {
        Self {
            out,
            platform,
            header_written: false,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Write `record`, preceded by the header if this is the first one.
    pub fn write_record(&mut self, record: &FileRecord) -> io::Result<()> {
        if !self.header_written {
            self.write_line(FileRecord::header())?;
            self.header_written = true;
        }
        self.write_line(record.values())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<'a>(&mut self, fields: impl Iterator<Item = &'a str>) -> io::Result<()> {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                self.out.write_all(SEPARATOR.as_bytes())?;
            }
            self.out.write_all(&self.platform.encode(field))?;
        }
        self.out.write_all(b"\n")
    }
}
