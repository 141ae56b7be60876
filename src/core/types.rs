use serde::Serialize;

/// NCBI taxonomy identifier (the value of a UniProt `OX=` tag)
pub type TaxonomyId = u32;

/// Render an optional taxonomy ID the way report files expect (`0` when absent)
#[must_use]
pub fn taxonomy_id_column(taxonomy_id: Option<TaxonomyId>) -> String {
    taxonomy_id.unwrap_or(0).to_string()
}

/// Which selection criterion governs a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    Summarize,
    OrganismName,
    OrganismList,
    ProteinList,
    TaxonomyList,
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summarize => write!(f, "summarize"),
            Self::OrganismName => write!(f, "organism name"),
            Self::OrganismList => write!(f, "organism list"),
            Self::ProteinList => write!(f, "protein list"),
            Self::TaxonomyList => write!(f, "taxonomy list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_id_column() {
        assert_eq!(taxonomy_id_column(Some(9606)), "9606");
        assert_eq!(taxonomy_id_column(None), "0");
    }
}
