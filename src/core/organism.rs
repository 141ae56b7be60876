use crate::core::types::TaxonomyId;

/// Where an organism name was found in a description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganismSource {
    /// UniProt `OS=` tag
    SpeciesTag,
    /// Text inside the last bracket pair, e.g. NCBI `[Homo sapiens]`
    Bracketed,
}

/// Organism and taxonomy candidates derived from one description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    /// Organism name and the convention it came from
    pub organism: Option<(String, OrganismSource)>,

    /// Taxonomy ID from the `OX=` tag
    pub taxonomy_id: Option<TaxonomyId>,
}

impl ExtractionResult {
    #[must_use]
    pub fn organism_name(&self) -> Option<&str> {
        self.organism.as_ref().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn source(&self) -> Option<OrganismSource> {
        self.organism.as_ref().map(|(_, source)| *source)
    }
}

/// Census row for one distinct organism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganismInfo {
    pub name: String,

    /// Taxonomy ID seen with the first entry for this organism
    pub taxonomy_id: Option<TaxonomyId>,

    /// Number of entries attributed to this organism
    pub count: usize,
}

impl OrganismInfo {
    pub fn new(name: impl Into<String>, taxonomy_id: Option<TaxonomyId>) -> Self {
        Self {
            name: name.into(),
            taxonomy_id,
            count: 1,
        }
    }

    /// First whitespace-delimited token, without surrounding square brackets.
    ///
    /// This is a heuristic split of the name, not a validated classification.
    #[must_use]
    pub fn genus(&self) -> &str {
        self.name
            .split_whitespace()
            .next()
            .map(|token| token.trim_matches(|c| c == '[' || c == ']'))
            .unwrap_or_default()
    }

    /// Second whitespace-delimited token, or empty
    #[must_use]
    pub fn species(&self) -> &str {
        self.name.split_whitespace().nth(1).unwrap_or_default()
    }
}
