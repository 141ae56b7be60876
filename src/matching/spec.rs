use std::collections::{BTreeSet, HashSet};

use regex::{Regex, RegexBuilder};

use crate::core::types::{FilterMode, TaxonomyId};

/// Compile a case-insensitive pattern
///
/// # Errors
///
/// Returns the regex error if the pattern is invalid or too large.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Exact names and regular expressions to match text against.
///
/// Exact names are stored lowercased; regexes keep insertion order and are
/// compiled case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct NameCriteria {
    exact: HashSet<String>,
    regexes: Vec<Regex>,
}

impl NameCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact name. Returns `false` if it was already present (ignoring case).
    pub fn add_exact(&mut self, name: &str) -> bool {
        self.exact.insert(name.to_lowercase())
    }

    /// Add a compiled regex. Returns `false` if the same pattern was already present.
    pub fn add_regex(&mut self, regex: Regex) -> bool {
        if self.regexes.iter().any(|r| r.as_str() == regex.as_str()) {
            return false;
        }
        self.regexes.push(regex);
        true
    }

    #[must_use]
    pub fn contains_exact(&self, text: &str) -> bool {
        self.exact.contains(&text.to_lowercase())
    }

    #[must_use]
    pub fn regexes(&self) -> &[Regex] {
        &self.regexes
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn regex_count(&self) -> usize {
        self.regexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.regexes.is_empty()
    }
}

/// The selection criterion for one run.
///
/// Exactly one mode is active, so a protein-name run can never carry taxonomy IDs
/// and a taxonomy run can never carry names.
#[derive(Debug, Clone, Default)]
pub enum FilterSpecification {
    /// Keep nothing; build an organism census instead
    #[default]
    NoFilter,

    /// Names, patterns and taxonomy IDs loaded from an organism list file
    ByOrganismNames {
        names: NameCriteria,
        taxonomy_ids: BTreeSet<TaxonomyId>,
    },

    /// A single organism name given on the command line
    ByOneOrganismName { names: NameCriteria },

    /// Protein names (and optionally descriptions) from a protein list file
    ByProteinNames {
        names: NameCriteria,
        search_descriptions: bool,
    },

    /// Taxonomy IDs from a taxonomy list file
    ByTaxonomyIds { taxonomy_ids: BTreeSet<TaxonomyId> },
}

impl FilterSpecification {
    #[must_use]
    pub fn mode(&self) -> FilterMode {
        match self {
            Self::NoFilter => FilterMode::Summarize,
            Self::ByOrganismNames { .. } => FilterMode::OrganismList,
            Self::ByOneOrganismName { .. } => FilterMode::OrganismName,
            Self::ByProteinNames { .. } => FilterMode::ProteinList,
            Self::ByTaxonomyIds { .. } => FilterMode::TaxonomyList,
        }
    }

    /// True when a filtering mode has no criteria at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::NoFilter => false,
            Self::ByOrganismNames {
                names,
                taxonomy_ids,
            } => names.is_empty() && taxonomy_ids.is_empty(),
            Self::ByOneOrganismName { names } | Self::ByProteinNames { names, .. } => {
                names.is_empty()
            }
            Self::ByTaxonomyIds { taxonomy_ids } => taxonomy_ids.is_empty(),
        }
    }

    /// One-line description of the loaded criteria for logging
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::NoFilter => "no filter".to_string(),
            Self::ByOrganismNames {
                names,
                taxonomy_ids,
            } => format!(
                "{} organism names, {} patterns, {} taxonomy IDs",
                names.exact_count(),
                names.regex_count(),
                taxonomy_ids.len()
            ),
            Self::ByOneOrganismName { names } => {
                if let Some(regex) = names.regexes().first() {
                    format!("organism pattern {}", regex.as_str())
                } else {
                    "single organism name".to_string()
                }
            }
            Self::ByProteinNames {
                names,
                search_descriptions,
            } => format!(
                "{} protein names, {} patterns{}",
                names.exact_count(),
                names.regex_count(),
                if *search_descriptions {
                    ", searching descriptions"
                } else {
                    ""
                }
            ),
            Self::ByTaxonomyIds { taxonomy_ids } => {
                format!("{} taxonomy IDs", taxonomy_ids.len())
            }
        }
    }
}
