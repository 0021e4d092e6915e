use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Transaction;

/// Fixed header row. Field order is positional and never changes.
pub const HEADER: [&str; 3] = ["Date", "Category", "Amount"];

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file does not exist.
    #[error("ledger not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A persisted row failed to parse back into a `Transaction`.
    #[error("malformed ledger row: {source}")]
    MalformedRow {
        #[source]
        source: csv::Error,
    },

    #[error("ledger I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Append-only CSV persistence for the transaction journal.
/// A store owns its target path; nothing in the crate holds a process-wide
/// file location.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with the fixed header if it does not exist.
    /// Idempotent: an existing file is left untouched, whatever it contains.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER).map_err(io::Error::from)?;
        writer.flush()?;
        Ok(())
    }

    /// Append one row. The row is written exactly as given; category and
    /// amount validation happens before this call, or not at all.
    pub fn append(&self, tx: &Transaction) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| self.not_found_or_io(err))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(tx).map_err(io::Error::from)?;
        writer.flush()?;
        Ok(())
    }

    /// Read the whole journal back in file order, header skipped, eagerly
    /// materialized. One unparseable row fails the entire read.
    pub fn read_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = File::open(&self.path)
            .map_err(|err| self.not_found_or_io(err))?;

        let mut reader = csv::Reader::from_reader(file);
        let mut transactions = Vec::new();
        for row in reader.deserialize() {
            let tx: Transaction = row.map_err(|source| StoreError::MalformedRow { source })?;
            transactions.push(tx);
        }
        Ok(transactions)
    }

    /// Number of persisted transactions (header excluded).
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read_all()?.len())
    }

    fn not_found_or_io(&self, err: io::Error) -> StoreError {
        if err.kind() == ErrorKind::NotFound {
            StoreError::NotFound {
                path: self.path.clone(),
            }
        } else {
            StoreError::Io(err)
        }
    }
}
