//! Organism and taxonomy extraction from FASTA description lines.
//!
//! Two description conventions are recognized:
//!
//! - UniProt tags: `Cellular tumor antigen p53 OS=Homo sapiens OX=9606 GN=TP53 PE=1 SV=4`
//! - NCBI brackets: `hypothetical protein [Salmonella enterica subsp. enterica serovar 4,[5],12:i:-]`
//!
//! All functions are pure; the tag patterns are compiled once per process.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::organism::{ExtractionResult, OrganismSource};
use crate::core::types::TaxonomyId;

/// Appended before searching so an `OS=` value always has a following tag to stop at
const SENTINEL_TAG: &str = " XX=Ignore";

static SPECIES_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i)OS=(.+)"));
static TAXONOMY_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i)OX=(\d+)"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| compile(r"(?i) [a-z]+="));

#[allow(clippy::expect_used)] // Patterns are literals
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// Extract the UniProt species name (`OS=` tag).
///
/// The value runs until the next ` XX=` style tag; a trailing `OS=` value runs to
/// the end of the description.
///
/// # Examples
///
/// ```
/// use fasta_organism_filter::parsing::description::extract_species_tag;
///
/// let desc = "Cellular tumor antigen p53 OS=Homo sapiens OX=9606 GN=TP53";
/// assert_eq!(extract_species_tag(desc).as_deref(), Some("Homo sapiens"));
/// assert_eq!(extract_species_tag("hypothetical protein [Mus musculus]"), None);
/// ```
#[must_use]
pub fn extract_species_tag(description: &str) -> Option<String> {
    let search_text = format!("{description}{SENTINEL_TAG}");

    let value = SPECIES_TAG.captures(&search_text)?.get(1)?.as_str();
    let end = ANY_TAG.find(value).map_or(value.len(), |m| m.start());

    let name = value[..end].trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Extract the UniProt taxonomy ID (`OX=` tag).
///
/// Returns `None` when the tag is absent or the number does not fit a [`TaxonomyId`].
///
/// # Examples
///
/// ```
/// use fasta_organism_filter::parsing::description::extract_taxonomy_id;
///
/// assert_eq!(extract_taxonomy_id("p53 OS=Homo sapiens OX=9606 GN=TP53"), Some(9606));
/// assert_eq!(extract_taxonomy_id("p53 [Homo sapiens]"), None);
/// ```
#[must_use]
pub fn extract_taxonomy_id(description: &str) -> Option<TaxonomyId> {
    TAXONOMY_TAG
        .captures(description)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Extract the organism from the last bracket pair of a description.
///
/// The closing `]` is the last one in the text; the opening `[` is found by scanning
/// backwards while tracking nesting, so the outermost pair wins:
/// `[Salmonella enterica serovar 4,[5],12:i:-]` yields the whole inner text.
///
/// When no opening bracket balances the last `]`, this returns the description from
/// its start up to, but not including, the character just before that `]`. That
/// prefix is kept for compatibility with existing outputs; it is not a reliable parse.
///
/// # Examples
///
/// ```
/// use fasta_organism_filter::parsing::description::extract_bracketed_organism;
///
/// let desc = "Protein X [Salmonella enterica subsp. enterica serovar 4,[5],12:i:-]";
/// assert_eq!(
///     extract_bracketed_organism(desc).as_deref(),
///     Some("Salmonella enterica subsp. enterica serovar 4,[5],12:i:-")
/// );
/// ```
#[must_use]
pub fn extract_bracketed_organism(description: &str) -> Option<String> {
    let close = description.rfind(']')?;

    let mut depth = 1usize;
    // Brackets are ASCII, so byte offsets from this scan are char boundaries
    for (index, byte) in description.as_bytes()[..close].iter().enumerate().rev() {
        match byte {
            b']' => depth += 1,
            b'[' => {
                depth -= 1;
                if depth == 0 {
                    let name = &description[index + 1..close];
                    return if name.is_empty() {
                        None
                    } else {
                        Some(name.to_string())
                    };
                }
            }
            _ => {}
        }
    }

    // Unbalanced: drop the character before the closing bracket as well
    let end = description[..close]
        .char_indices()
        .next_back()
        .map_or(0, |(index, _)| index);
    let prefix = &description[..end];
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_string())
    }
}

/// Extract the organism name, trying the `OS=` tag before bracketed text.
///
/// The taxonomy ID is extracted independently of which convention supplied the name.
#[must_use]
pub fn extract_organism(description: &str) -> ExtractionResult {
    let organism = extract_species_tag(description)
        .map(|name| (name, OrganismSource::SpeciesTag))
        .or_else(|| {
            extract_bracketed_organism(description).map(|name| (name, OrganismSource::Bracketed))
        });

    ExtractionResult {
        organism,
        taxonomy_id: extract_taxonomy_id(description),
    }
}

/// The organism text to match against, falling back to the whole description
/// when neither convention yields a name.
#[must_use]
pub fn organism_candidate(description: &str) -> String {
    extract_organism(description)
        .organism
        .map_or_else(|| description.to_string(), |(name, _)| name)
}
