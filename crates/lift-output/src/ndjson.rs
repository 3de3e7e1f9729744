//! NDJSON file backends: one JSON object per line, newline-terminated.
//!
//! A run owns two append-only files in its output directory, created fresh
//! (truncating any previous run's output):
//!
//! - `events.ndjson`
//! - `snapshots.ndjson`

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::{EventRecord, SnapshotRecord};
use crate::sink::{EventSink, SnapshotSink};
use crate::OutputResult;

/// Create both stream files in `dir` (which must exist), truncating any
/// previous contents.
pub fn create_run_files(dir: &Path) -> OutputResult<(NdjsonEvents, NdjsonSnapshots)> {
    let events = NdjsonEvents {
        out:      BufWriter::new(File::create(dir.join("events.ndjson"))?),
        finished: false,
    };
    let snapshots = NdjsonSnapshots {
        out:      BufWriter::new(File::create(dir.join("snapshots.ndjson"))?),
        finished: false,
    };
    Ok((events, snapshots))
}

fn write_line<T: serde::Serialize>(out: &mut BufWriter<File>, record: &T) -> OutputResult<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// `events.ndjson` — flushed once per batch.
pub struct NdjsonEvents {
    out:      BufWriter<File>,
    finished: bool,
}

impl EventSink for NdjsonEvents {
    fn write_batch(&mut self, batch: &[EventRecord]) -> OutputResult<()> {
        for record in batch {
            write_line(&mut self.out, record)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// `snapshots.ndjson` — flushed after every snapshot.
pub struct NdjsonSnapshots {
    out:      BufWriter<File>,
    finished: bool,
}

impl SnapshotSink for NdjsonSnapshots {
    fn write_snapshot(&mut self, snapshot: &SnapshotRecord) -> OutputResult<()> {
        write_line(&mut self.out, snapshot)?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
