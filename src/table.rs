//! In-memory host table backed by a hosts file.
//!
//! The table is plain data plus blocking file I/O. It does no locking; share
//! it across threads only behind external synchronization.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec;
use crate::error::{Error, Result};
use crate::record::{Column, HostRecord};

/// Suffix appended to the hosts path for the pre-save backup.
pub const BACKUP_SUFFIX: &str = ".old";

/// Ordered records read from, and written back to, one hosts file.
#[derive(Debug, Clone)]
pub struct HostTable {
    path: PathBuf,
    records: Vec<HostRecord>,
}

impl HostTable {
    /// Empty table bound to `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hosts path with `.old` appended.
    pub fn backup_path(&self) -> PathBuf {
        let mut p = self.path.clone().into_os_string();
        p.push(BACKUP_SUFFIX);
        PathBuf::from(p)
    }

    /// Replace the table contents with what is on disk.
    ///
    /// On error the previous contents are kept.
    pub fn load(&mut self) -> Result<&[HostRecord]> {
        let text = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let records = codec::parse(&text);

        let with_data = text
            .lines()
            .filter(|line| {
                let data = line.split('#').next().unwrap_or("");
                !data.trim().is_empty()
            })
            .count();
        let dropped = with_data.saturating_sub(records.len());
        if dropped > 0 {
            warn!(
                path = %self.path.display(),
                dropped,
                "skipped lines without an address and host name"
            );
        }

        debug!(path = %self.path.display(), records = records.len(), "loaded hosts file");
        self.records = records;
        Ok(&self.records)
    }

    /// Back up the current file to [`backup_path`](Self::backup_path), then
    /// overwrite it with the table contents.
    ///
    /// A failed backup returns before the hosts file is opened. The overwrite
    /// itself is not atomic: a crash mid-write can leave a truncated file,
    /// with the backup holding the previous content.
    pub fn save(&self) -> Result<()> {
        let backup = self.backup_path();
        let exists = self.path.try_exists().map_err(|source| Error::Backup {
            path: backup.clone(),
            source,
        })?;
        if exists {
            fs::copy(&self.path, &backup).map_err(|source| Error::Backup {
                path: backup.clone(),
                source,
            })?;
            info!(backup = %backup.display(), "backed up hosts file");
        } else {
            debug!(path = %self.path.display(), "no existing hosts file; skipping backup");
        }

        fs::write(&self.path, codec::serialize(&self.records)).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), records = self.records.len(), "saved hosts file");
        Ok(())
    }

    /// Append a record.
    pub fn insert(&mut self, record: HostRecord) {
        debug!(address = %record.address, host = %record.host_name, "insert record");
        self.records.push(record);
    }

    /// Remove every position in `indices`, all resolved against the table as
    /// it is before the call. Duplicates are ignored.
    ///
    /// Fails without changing anything if any index is out of range. Returns
    /// the removed records in table order.
    pub fn remove(&mut self, indices: &[usize]) -> Result<Vec<HostRecord>> {
        let len = self.records.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut positions = indices.to_vec();
        positions.sort_unstable();
        positions.dedup();

        // Highest first so earlier positions stay put.
        let mut removed: Vec<HostRecord> = positions
            .iter()
            .rev()
            .map(|&i| self.records.remove(i))
            .collect();
        removed.reverse();
        debug!(count = removed.len(), "removed records");
        Ok(removed)
    }

    /// Stable sort by `column`. Equal keys keep their relative order in both
    /// directions.
    pub fn reorder(&mut self, column: Column, ascending: bool) -> &[HostRecord] {
        self.records.sort_by(|a, b| {
            let ord = a.field(column).cmp(b.field(column));
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        &self.records
    }

    pub fn record_at(&self, index: usize) -> Result<&HostRecord> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Replace the record at `index`, returning the old one.
    pub fn update(&mut self, index: usize, record: HostRecord) -> Result<HostRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HostRecord] {
        &self.records
    }
}
