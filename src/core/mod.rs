//! Core data types for organism classification.
//!
//! - [`ProteinEntry`](entry::ProteinEntry): one FASTA record (name, description, residues)
//! - [`ExtractionResult`](organism::ExtractionResult): organism and taxonomy candidates for a description
//! - [`OrganismInfo`](organism::OrganismInfo): one row of the organism census
//! - [`TaxonomyId`](types::TaxonomyId), [`FilterMode`](types::FilterMode): shared scalar types
//!
//! ## Description Conventions
//!
//! | Source  | Example description                                   | Organism     |
//! |---------|-------------------------------------------------------|--------------|
//! | UniProt | `Cellular tumor antigen p53 OS=Homo sapiens OX=9606`  | Homo sapiens |
//! | NCBI    | `hypothetical protein [Mus musculus]`                 | Mus musculus |

pub mod entry;
pub mod organism;
pub mod types;
