use std::collections::BTreeMap;
use std::io::Write;

use tracing::warn;

use crate::core::entry::ProteinEntry;
use crate::core::organism::{ExtractionResult, OrganismInfo};
use crate::core::types::taxonomy_id_column;
use crate::parsing::description::extract_organism;
use crate::parsing::fasta::ReadError;
use crate::pipeline::output::TsvWriter;
use crate::pipeline::PipelineError;

/// Organism census built in a single pass.
///
/// Keyed by organism name, so rows come out sorted and repeated runs over the
/// same input produce identical output.
#[derive(Debug, Default)]
pub struct OrganismSummary {
    organisms: BTreeMap<String, OrganismInfo>,
    entries: u64,
    without_organism: u64,
}

impl OrganismSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entry and return what was extracted from it.
    ///
    /// The taxonomy ID stored for an organism is the one seen with its first entry;
    /// later entries only increase the count.
    pub fn add(&mut self, entry: &ProteinEntry) -> ExtractionResult {
        self.entries += 1;
        let extracted = extract_organism(&entry.description);

        match extracted.organism_name() {
            None => {
                warn!("Could not determine the organism for {}", entry.name);
                self.without_organism += 1;
            }
            Some(name) => {
                if let Some(info) = self.organisms.get_mut(name) {
                    info.count += 1;
                } else {
                    self.organisms.insert(
                        name.to_string(),
                        OrganismInfo::new(name, extracted.taxonomy_id),
                    );
                }
            }
        }

        extracted
    }

    /// Organisms sorted by name
    pub fn organisms(&self) -> impl Iterator<Item = &OrganismInfo> {
        self.organisms.values()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OrganismInfo> {
        self.organisms.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> u64 {
        self.entries
    }

    #[must_use]
    pub fn without_organism(&self) -> u64 {
        self.without_organism
    }

    /// Write one row per organism: name, taxonomy ID, count, genus, species.
    ///
    /// # Errors
    ///
    /// Returns the IO error from the underlying writer.
    pub fn write_table<W: Write>(&self, writer: &mut TsvWriter<W>) -> std::io::Result<()> {
        for info in self.organisms() {
            let taxonomy_id = taxonomy_id_column(info.taxonomy_id);
            let count = info.count.to_string();
            writer.write_row(&[
                info.name.as_str(),
                taxonomy_id.as_str(),
                count.as_str(),
                info.genus(),
                info.species(),
            ])?;
        }
        Ok(())
    }
}

/// Stream entries into `summary`, optionally writing a protein-to-organism row
/// for every entry as it is read.
///
/// # Errors
///
/// Returns `PipelineError::Read` if the input cannot be parsed, or
/// `PipelineError::Write` if the map cannot be written.
pub fn summarize_entries<I, M>(
    entries: I,
    summary: &mut OrganismSummary,
    mut protein_map: Option<&mut TsvWriter<M>>,
    mut on_entry: impl FnMut(u64),
) -> Result<(), PipelineError>
where
    I: IntoIterator<Item = Result<ProteinEntry, ReadError>>,
    M: Write,
{
    for entry in entries {
        let entry = entry?;
        let extracted = summary.add(&entry);

        if let Some(writer) = protein_map.as_deref_mut() {
            let taxonomy_id = taxonomy_id_column(extracted.taxonomy_id);
            writer.write_row(&[
                entry.name.as_str(),
                extracted.organism_name().unwrap_or_default(),
                taxonomy_id.as_str(),
            ])?;
        }

        on_entry(summary.entries());
    }

    Ok(())
}
