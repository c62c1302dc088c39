use crate::errors::FixMdError;
use crate::persistence::rows::PersistBatch;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Destination for market data that has already been applied to the in-memory store.
///
/// A batch is one message and must be stored all-or-nothing. Implementations
/// are called after the store lock is released; their errors are logged by the
/// caller and never reach ingestion.
pub trait MarketDataSink: Send + Sync {
    fn store_batch(&self, batch: &PersistBatch<'_>) -> Result<(), FixMdError>;
}

/// Appends rows as JSON lines to a file.
///
/// Each batch is serialised into a staging buffer first. If any row fails the
/// buffer is dropped and nothing reaches the file. Otherwise the whole batch
/// is written and flushed; if either fails partway the file is truncated back
/// to its length before the batch, so a torn line never survives.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesSink {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FixMdError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn stage(batch: &PersistBatch<'_>) -> Result<(Vec<u8>, usize), FixMdError> {
        let mut staged = Vec::with_capacity(batch.entries.len() * 160);
        let mut rows = 0;
        for row in batch.rows() {
            serde_json::to_writer(&mut staged, &row).map_err(|error| {
                FixMdError::SerializationError {
                    message: error.to_string(),
                }
            })?;
            staged.push(b'\n');
            rows += 1;
        }
        Ok((staged, rows))
    }
}

/// An append target that can be cut back to an earlier length.
trait Truncate: Write {
    fn current_len(&mut self) -> io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn current_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Appends `staged` as one unit: on a write or flush error the target is
/// truncated to its previous length before the error is returned.
fn commit<T: Truncate>(target: &mut T, staged: &[u8]) -> Result<(), FixMdError> {
    let previous_len = target.current_len()?;
    let written = target.write_all(staged).and_then(|()| target.flush());
    if let Err(error) = written {
        if let Err(rollback) = target.truncate_to(previous_len) {
            error!(%rollback, previous_len, "failed to roll back partial batch");
        }
        return Err(error.into());
    }
    Ok(())
}

impl MarketDataSink for JsonLinesSink {
    fn store_batch(&self, batch: &PersistBatch<'_>) -> Result<(), FixMdError> {
        let (staged, rows) = Self::stage(batch)?;
        if rows == 0 {
            return Ok(());
        }

        commit(&mut *self.file.lock(), &staged)?;

        debug!(rows, seq_num = batch.seq_num, "persisted market data batch");
        Ok(())
    }
}
