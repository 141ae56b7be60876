//! Keep/drop decisions for each filtering mode, and the streaming filter loop.
//!
//! ## Candidate Order
//!
//! | Mode | Candidates tested, in order |
//! |------|-----------------------------|
//! | Organism name/list | `OX=` ID (lists only), then `OS=` name *or* bracketed name, then full description |
//! | Taxonomy list | `OX=` ID |
//! | Protein list | entry name, then full description (if enabled) |
//!
//! A UniProt `OS=` name is trusted: when present it is the only name tested.

use std::collections::BTreeSet;
use std::io::Write;

use tracing::debug;

use crate::core::entry::ProteinEntry;
use crate::core::types::TaxonomyId;
use crate::matching::engine::{match_name, match_taxonomy, NameMatch};
use crate::matching::spec::{FilterSpecification, NameCriteria};
use crate::parsing::description::{
    extract_bracketed_organism, extract_species_tag, extract_taxonomy_id,
};
use crate::parsing::fasta::ReadError;
use crate::pipeline::output::{FastaWriter, TsvWriter};
use crate::pipeline::PipelineError;

/// Decide whether an entry is kept.
///
/// Returns the match that kept it, or `None` to drop it. `NoFilter` drops
/// everything, since that mode never writes FASTA output.
#[must_use]
pub fn evaluate(spec: &FilterSpecification, entry: &ProteinEntry) -> Option<NameMatch> {
    match spec {
        FilterSpecification::NoFilter => None,
        FilterSpecification::ByOrganismNames {
            names,
            taxonomy_ids,
        } => evaluate_organism(names, Some(taxonomy_ids), &entry.description),
        FilterSpecification::ByOneOrganismName { names } => {
            evaluate_organism(names, None, &entry.description)
        }
        FilterSpecification::ByProteinNames {
            names,
            search_descriptions,
        } => evaluate_protein(names, *search_descriptions, entry),
        FilterSpecification::ByTaxonomyIds { taxonomy_ids } => {
            match_taxonomy(extract_taxonomy_id(&entry.description), taxonomy_ids)
        }
    }
}

fn evaluate_organism(
    names: &NameCriteria,
    taxonomy_ids: Option<&BTreeSet<TaxonomyId>>,
    description: &str,
) -> Option<NameMatch> {
    if let Some(ids) = taxonomy_ids.filter(|ids| !ids.is_empty()) {
        if let Some(m) = match_taxonomy(extract_taxonomy_id(description), ids) {
            return Some(m);
        }
    }

    if let Some(species) = extract_species_tag(description) {
        return match_name(&species, names);
    }

    if let Some(organism) = extract_bracketed_organism(description) {
        if let Some(m) = match_name(&organism, names) {
            return Some(m);
        }
    }

    if description.is_empty() {
        return None;
    }
    match_name(description, names)
}

fn evaluate_protein(
    names: &NameCriteria,
    search_descriptions: bool,
    entry: &ProteinEntry,
) -> Option<NameMatch> {
    if !entry.name.is_empty() {
        if let Some(m) = match_name(&entry.name, names) {
            return Some(m);
        }
    }

    if search_descriptions && !entry.description.is_empty() {
        return match_name(&entry.description, names);
    }
    None
}

/// Counts from one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub entries_read: u64,
    pub entries_kept: u64,
}

/// Stream entries through `spec`, writing kept entries to `output`.
///
/// When `match_info` is given, one row is written per kept entry with the
/// matched text and, for regex matches, the pattern. `on_entry` receives the
/// running entry count after each entry.
///
/// # Errors
///
/// Returns `PipelineError::Read` if the input cannot be parsed, or
/// `PipelineError::Write` if an output cannot be written.
pub fn filter_entries<I, W, M>(
    entries: I,
    spec: &FilterSpecification,
    output: &mut FastaWriter<W>,
    mut match_info: Option<&mut TsvWriter<M>>,
    mut on_entry: impl FnMut(u64),
) -> Result<FilterCounts, PipelineError>
where
    I: IntoIterator<Item = Result<ProteinEntry, ReadError>>,
    W: Write,
    M: Write,
{
    let mut counts = FilterCounts::default();

    for entry in entries {
        let entry = entry?;
        counts.entries_read += 1;

        if let Some(m) = evaluate(spec, &entry) {
            output.write_entry(&entry)?;
            counts.entries_kept += 1;

            if let Some(writer) = match_info.as_deref_mut() {
                debug!(
                    "{} matched '{}'{}",
                    entry.name,
                    m.matched_text,
                    m.pattern()
                        .map(|p| format!(" using RegEx {p}"))
                        .unwrap_or_default()
                );
                writer.write_row(&[
                    entry.name.as_str(),
                    m.matched_text.as_str(),
                    m.pattern().unwrap_or_default(),
                ])?;
            }
        }

        on_entry(counts.entries_read);
    }

    Ok(counts)
}
