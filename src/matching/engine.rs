use std::collections::BTreeSet;

use crate::core::types::TaxonomyId;
use crate::matching::spec::NameCriteria;

/// Which criterion accepted a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-insensitive exact name
    Exact,
    /// Regular expression, with its source pattern
    Regex(String),
    /// Taxonomy ID from the `OX=` tag
    TaxonomyId(TaxonomyId),
}

/// Result of a successful match, kept for diagnostic reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The candidate for exact matches, the matched substring for regex matches
    pub matched_text: String,

    pub rule: MatchRule,
}

impl NameMatch {
    /// The originating pattern for regex matches
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match &self.rule {
            MatchRule::Regex(pattern) => Some(pattern.as_str()),
            MatchRule::Exact | MatchRule::TaxonomyId(_) => None,
        }
    }
}

/// Match a candidate against exact names first, then each regex in order.
///
/// Callers should not pass empty candidates; an empty string can still match a
/// pattern such as `.*`.
#[must_use]
pub fn match_name(candidate: &str, criteria: &NameCriteria) -> Option<NameMatch> {
    if criteria.contains_exact(candidate) {
        return Some(NameMatch {
            matched_text: candidate.to_string(),
            rule: MatchRule::Exact,
        });
    }

    criteria.regexes().iter().find_map(|regex| {
        regex.find(candidate).map(|m| NameMatch {
            matched_text: m.as_str().to_string(),
            rule: MatchRule::Regex(regex.as_str().to_string()),
        })
    })
}

/// Match an extracted taxonomy ID against a set; a missing ID never matches.
#[must_use]
pub fn match_taxonomy(
    taxonomy_id: Option<TaxonomyId>,
    taxonomy_ids: &BTreeSet<TaxonomyId>,
) -> Option<NameMatch> {
    let id = taxonomy_id.filter(|id| taxonomy_ids.contains(id))?;
    Some(NameMatch {
        matched_text: id.to_string(),
        rule: MatchRule::TaxonomyId(id),
    })
}
