//! # fasta-organism-filter
//!
//! A library for classifying protein FASTA entries by source organism.
//!
//! Protein archives mix description conventions. UniProt entries carry
//! `OS=`/`OX=` tags, NCBI entries put the organism in trailing brackets, and
//! some entries have neither. `fasta-organism-filter` extracts an organism name
//! and taxonomy ID from each description with a fixed fallback order, then either
//! keeps the entries that match a filter or counts entries per organism.
//!
//! ## Features
//!
//! - **UniProt tags**: `OS=` names bounded by the next tag, `OX=` taxonomy IDs
//! - **Nested brackets**: `[Salmonella enterica serovar 4,[5],12:i:-]` parsed as one name
//! - **Flexible filters**: exact names (case-insensitive), regular expressions, wildcards, taxonomy IDs
//! - **Streaming**: one entry in memory at a time, plain or gzip input
//!
//! ## Example
//!
//! ```rust
//! use fasta_organism_filter::parsing::description::extract_organism;
//! use fasta_organism_filter::parsing::list_file::organism_name_filter;
//! use fasta_organism_filter::pipeline::filter::evaluate;
//! use fasta_organism_filter::ProteinEntry;
//!
//! let entry = ProteinEntry::new(
//!     "sp|P0A7V8|RS4_ECOLI",
//!     "30S ribosomal protein S4 OS=Escherichia coli (strain K12) OX=83333 GN=rpsD",
//!     b"MARYLGPKLK".to_vec(),
//! );
//!
//! let extracted = extract_organism(&entry.description);
//! assert_eq!(extracted.organism_name(), Some("Escherichia coli (strain K12)"));
//! assert_eq!(extracted.taxonomy_id, Some(83333));
//!
//! let spec = organism_name_filter("Escherichia coli*").unwrap();
//! assert!(evaluate(&spec, &entry).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Entry, extraction and census data types
//! - [`parsing`]: FASTA reader, description parser and list file loaders
//! - [`matching`]: Filter specifications and the match engine
//! - [`pipeline`]: Filtering and summarizing passes and their outputs
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::entry::ProteinEntry;
pub use core::organism::{ExtractionResult, OrganismInfo, OrganismSource};
pub use core::types::*;
pub use matching::engine::{MatchRule, NameMatch};
pub use matching::spec::{FilterSpecification, NameCriteria};
pub use pipeline::{run_filter, run_summary, RunStats};
