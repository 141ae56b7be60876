//! Output file naming and writers for filtered FASTA and tab-separated reports.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::entry::ProteinEntry;

/// Residues per line in FASTA output
pub const FASTA_LINE_WIDTH: usize = 60;

/// Suffix for filtered output unless a single organism name supplies one
pub const DEFAULT_SUFFIX: &str = "Filtered";

pub const MATCH_INFO_HEADER: [&str; 3] = ["Protein", "FilterMatch", "RegEx"];
pub const ORGANISM_SUMMARY_HEADER: [&str; 5] =
    ["Organism", "TaxonomyID", "Proteins", "Genus", "Species"];
pub const PROTEIN_MAP_HEADER: [&str; 3] = ["Protein", "Organism", "TaxonomyID"];

/// Output artifact paths derived from the input file name
#[derive(Debug, Clone)]
pub struct OutputPaths {
    dir: PathBuf,
    base: String,
}

impl OutputPaths {
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
        }
    }

    /// `<base>_<suffix>.fasta`
    #[must_use]
    pub fn filtered_fasta(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}_{suffix}.fasta", self.base))
    }

    /// `<base>_<suffix>_MatchInfo.txt`
    #[must_use]
    pub fn match_info(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}_{suffix}_MatchInfo.txt", self.base))
    }

    /// `<base>_OrganismSummary.txt`
    #[must_use]
    pub fn organism_summary(&self) -> PathBuf {
        self.dir.join(format!("{}_OrganismSummary.txt", self.base))
    }

    /// `<base>_ProteinOrganismMap.txt`
    #[must_use]
    pub fn protein_map(&self) -> PathBuf {
        self.dir.join(format!("{}_ProteinOrganismMap.txt", self.base))
    }
}

fn create_buffered(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}

/// Writes FASTA records with residues wrapped at [`FASTA_LINE_WIDTH`]
pub struct FastaWriter<W: Write> {
    inner: W,
}

impl FastaWriter<BufWriter<File>> {
    /// Create (or truncate) a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns the IO error if the file cannot be created.
    pub fn create(path: &Path) -> io::Result<Self> {
        create_buffered(path).map(Self::new)
    }
}

impl<W: Write> FastaWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one entry: the header line, then the residues in fixed-width lines.
    ///
    /// # Errors
    ///
    /// Returns the IO error from the underlying writer.
    pub fn write_entry(&mut self, entry: &ProteinEntry) -> io::Result<()> {
        writeln!(self.inner, ">{}", entry.header())?;
        for line in entry.sequence.chunks(FASTA_LINE_WIDTH) {
            self.inner.write_all(line)?;
            self.inner.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the IO error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Writes tab-separated rows after a fixed header row
pub struct TsvWriter<W: Write> {
    inner: W,
}

impl TsvWriter<BufWriter<File>> {
    /// Create (or truncate) a report file and write its header row.
    ///
    /// # Errors
    ///
    /// Returns the IO error if the file cannot be created or written.
    pub fn create(path: &Path, header: &[&str]) -> io::Result<Self> {
        Self::new(create_buffered(path)?, header)
    }
}

impl<W: Write> TsvWriter<W> {
    /// Wrap a writer, writing the header row immediately.
    ///
    /// # Errors
    ///
    /// Returns the IO error if the header cannot be written.
    pub fn new(inner: W, header: &[&str]) -> io::Result<Self> {
        let mut writer = Self { inner };
        writer.write_row(header)?;
        Ok(writer)
    }

    /// # Errors
    ///
    /// Returns the IO error from the underlying writer.
    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        let mut first = true;
        for field in fields {
            if !first {
                self.inner.write_all(b"\t")?;
            }
            first = false;
            self.inner.write_all(field.as_ref().as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the IO error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
