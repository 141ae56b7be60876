//! Single-pass processing of a FASTA file.
//!
//! - [`run_filter`]: write the entries selected by a [`FilterSpecification`]
//! - [`run_summary`]: build an organism census (and optionally a protein map)
//!
//! Both read one entry at a time, so memory use does not grow with the input.
//! Output files are flushed on success; on error they are closed when dropped
//! and their contents should not be relied on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::types::FilterMode;
use crate::matching::spec::FilterSpecification;
use crate::parsing::fasta::{FastaReader, ReadError};

pub mod filter;
pub mod output;
pub mod progress;
pub mod summary;

use output::{
    FastaWriter, OutputPaths, TsvWriter, MATCH_INFO_HEADER, ORGANISM_SUMMARY_HEADER,
    PROTEIN_MAP_HEADER,
};
use progress::ProgressReporter;
use summary::OrganismSummary;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("Unable to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a run did, printed at the end of the run
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub mode: FilterMode,
    pub input: PathBuf,
    pub entries_read: u64,

    /// Entries written to the filtered FASTA (filter modes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_kept: Option<u64>,

    /// Entries without an organism name (summarize mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_without_organism: Option<u64>,

    /// Distinct organisms (summarize mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_organisms: Option<usize>,

    /// Files written
    pub outputs: Vec<PathBuf>,
}

fn create_fasta(path: &Path) -> Result<FastaWriter<std::io::BufWriter<std::fs::File>>, PipelineError> {
    FastaWriter::create(path).map_err(|source| PipelineError::Create {
        path: path.to_path_buf(),
        source,
    })
}

fn create_tsv(
    path: &Path,
    header: &[&str],
) -> Result<TsvWriter<std::io::BufWriter<std::fs::File>>, PipelineError> {
    TsvWriter::create(path, header).map_err(|source| PipelineError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Filter `input` into `<base>_<suffix>.fasta`.
///
/// With `match_info`, also writes `<base>_<suffix>_MatchInfo.txt`.
///
/// # Errors
///
/// Returns `PipelineError` if the input cannot be read or an output cannot be
/// created or written.
pub fn run_filter(
    input: &Path,
    spec: &FilterSpecification,
    paths: &OutputPaths,
    suffix: &str,
    match_info: bool,
) -> Result<RunStats, PipelineError> {
    let mut reader = FastaReader::open(input)?;
    let mut reporter = ProgressReporter::new(reader.progress());

    let fasta_path = paths.filtered_fasta(suffix);
    let mut output = create_fasta(&fasta_path)?;
    let mut outputs = vec![fasta_path];

    let mut match_writer = if match_info {
        let path = paths.match_info(suffix);
        let writer = create_tsv(&path, &MATCH_INFO_HEADER)?;
        outputs.push(path);
        Some(writer)
    } else {
        None
    };

    info!("Filtering {} ({})", input.display(), spec.describe());

    let counts = filter::filter_entries(
        reader.entries(),
        spec,
        &mut output,
        match_writer.as_mut(),
        |n| {
            reporter.tick(n);
        },
    )?;

    output.finish()?;
    if let Some(writer) = match_writer {
        writer.finish()?;
    }

    info!(
        "Kept {} of {} entries",
        counts.entries_kept, counts.entries_read
    );

    Ok(RunStats {
        mode: spec.mode(),
        input: input.to_path_buf(),
        entries_read: counts.entries_read,
        entries_kept: Some(counts.entries_kept),
        entries_without_organism: None,
        distinct_organisms: None,
        outputs,
    })
}

/// Summarize the organisms in `input` into `<base>_OrganismSummary.txt`.
///
/// With `protein_map`, also writes `<base>_ProteinOrganismMap.txt` during the pass.
///
/// # Errors
///
/// Returns `PipelineError` if the input cannot be read or an output cannot be
/// created or written.
pub fn run_summary(
    input: &Path,
    paths: &OutputPaths,
    protein_map: bool,
) -> Result<RunStats, PipelineError> {
    let mut reader = FastaReader::open(input)?;
    let mut reporter = ProgressReporter::new(reader.progress());
    let mut outputs = Vec::new();

    let mut map_writer = if protein_map {
        let path = paths.protein_map();
        let writer = create_tsv(&path, &PROTEIN_MAP_HEADER)?;
        outputs.push(path);
        Some(writer)
    } else {
        None
    };

    info!("Summarizing organisms in {}", input.display());

    let mut summary = OrganismSummary::new();
    summary::summarize_entries(reader.entries(), &mut summary, map_writer.as_mut(), |n| {
        reporter.tick(n);
    })?;

    if let Some(writer) = map_writer {
        writer.finish()?;
    }

    let summary_path = paths.organism_summary();
    let mut table = create_tsv(&summary_path, &ORGANISM_SUMMARY_HEADER)?;
    summary.write_table(&mut table)?;
    table.finish()?;
    outputs.insert(0, summary_path);

    if summary.is_empty() {
        warn!("No organism names found in {}", input.display());
    }

    info!(
        "Found {} organisms in {} entries ({} without an organism)",
        summary.len(),
        summary.entries(),
        summary.without_organism()
    );

    Ok(RunStats {
        mode: FilterMode::Summarize,
        input: input.to_path_buf(),
        entries_read: summary.entries(),
        entries_kept: None,
        entries_without_organism: Some(summary.without_organism()),
        distinct_organisms: Some(summary.len()),
        outputs,
    })
}
