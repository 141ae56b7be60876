//! Filter specifications and the match engine.
//!
//! - [`FilterSpecification`]: the selection mode for a run and its compiled criteria
//! - [`NameCriteria`]: a case-insensitive exact-name set plus compiled regexes
//! - [`match_name`] / [`match_taxonomy`]: decide whether a candidate matches
//!
//! ## Matching Order
//!
//! 1. **Exact name**: case-insensitive set membership
//! 2. **Regular expressions**: tried in the order they were loaded; first hit wins
//!
//! Taxonomy IDs are compared separately by set membership.
//!
//! ## Example
//!
//! ```rust
//! use fasta_organism_filter::matching::{match_name, NameCriteria};
//! use fasta_organism_filter::matching::spec::compile_pattern;
//!
//! let mut names = NameCriteria::new();
//! names.add_exact("Homo sapiens");
//! names.add_regex(compile_pattern("^Mus .+").unwrap());
//!
//! assert!(match_name("homo sapiens", &names).is_some());
//! let m = match_name("Mus musculus", &names).unwrap();
//! assert_eq!(m.pattern(), Some("^Mus .+"));
//! ```

pub mod engine;
pub mod spec;

pub use engine::{match_name, match_taxonomy, MatchRule, NameMatch};
pub use spec::{FilterSpecification, NameCriteria};
