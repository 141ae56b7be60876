//! Streaming FASTA reader using noodles.
//!
//! Yields one [`ProteinEntry`] at a time and tracks how many bytes of the input
//! file have been consumed, so callers can report progress without knowing the
//! number of records in advance.
//!
//! Supported extensions:
//! - `.fasta`, `.fa`, `.faa`, ... (uncompressed)
//! - `.fasta.gz`, `.fasta.bgz`, ... (gzip/bgzip compressed)

use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::entry::ProteinEntry;
use crate::utils::validation::is_gzipped;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Counts bytes pulled from the underlying file (compressed bytes for gzip input)
struct CountingReader<R> {
    inner: R,
    count: Rc<Cell<u64>>,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count.set(self.count.get() + n as u64);
        Ok(n)
    }
}

/// Read position within the input file
#[derive(Debug, Clone)]
pub struct ReadProgress {
    bytes_read: Rc<Cell<u64>>,
    total_bytes: u64,
}

impl ReadProgress {
    /// Fraction of the file consumed so far, between 0.0 and 1.0
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_bytes == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.bytes_read.get() as f64 / self.total_bytes as f64;
        fraction.min(1.0)
    }

    #[must_use]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read.get()
    }
}

/// Sequential reader over a plain or gzip-compressed protein FASTA file
pub struct FastaReader {
    inner: fasta::io::Reader<Box<dyn BufRead>>,
    progress: ReadProgress,
}

impl FastaReader {
    /// Open a FASTA file, decompressing when the name ends in `.gz` or `.bgz`.
    ///
    /// # Errors
    ///
    /// Returns `ReadError::NotFound` if the file does not exist, or
    /// `ReadError::Io` if it cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ReadError::NotFound(path.to_path_buf())
            } else {
                ReadError::Io(e)
            }
        })?;
        let total_bytes = file.metadata()?.len();

        let count = Rc::new(Cell::new(0));
        let counted = CountingReader {
            inner: file,
            count: Rc::clone(&count),
        };

        let reader: Box<dyn BufRead> = if is_gzipped(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(counted)))
        } else {
            Box::new(BufReader::new(counted))
        };

        Ok(Self {
            inner: fasta::io::Reader::new(reader),
            progress: ReadProgress {
                bytes_read: count,
                total_bytes,
            },
        })
    }

    /// A handle for checking read progress while iterating
    #[must_use]
    pub fn progress(&self) -> ReadProgress {
        self.progress.clone()
    }

    /// Iterate over the entries in file order.
    ///
    /// Over-long descriptions are truncated; see [`ProteinEntry::new`].
    pub fn entries(&mut self) -> impl Iterator<Item = Result<ProteinEntry, ReadError>> + '_ {
        self.inner.records().map(|result| {
            let record = result
                .map_err(|e| ReadError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

            let name = String::from_utf8_lossy(record.name()).to_string();
            let description = record
                .description()
                .map(|d| String::from_utf8_lossy(d).trim().to_string())
                .unwrap_or_default();
            let sequence = record.sequence().as_ref().to_vec();

            Ok(ProteinEntry::new(name, description, sequence))
        })
    }
}
