//! Parsers for FASTA input, description lines and filter list files.
//!
//! This module provides:
//!
//! - **FASTA files**: Stream protein entries from plain or gzip-compressed FASTA
//! - **Description lines**: Extract organism names and taxonomy IDs
//! - **List files**: Load organism, protein and taxonomy filter lists
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_organism_filter::parsing::description::extract_organism;
//! use fasta_organism_filter::parsing::fasta::FastaReader;
//! use std::path::Path;
//!
//! let mut reader = FastaReader::open(Path::new("uniprot_sprot.fasta.gz")).unwrap();
//! for entry in reader.entries() {
//!     let entry = entry.unwrap();
//!     let extracted = extract_organism(&entry.description);
//!     println!("{}\t{:?}", entry.name, extracted.organism_name());
//! }
//! ```
//!
//! ## Supported Description Tags
//!
//! | Tag | Description | Used for |
//! |-----|-------------|----------|
//! | OS  | Organism species | Organism name |
//! | OX  | Organism taxonomy ID | Taxonomy filtering |
//! | `[...]` | Bracketed organism (NCBI) | Organism name when no OS tag |

pub mod description;
pub mod fasta;
pub mod list_file;
