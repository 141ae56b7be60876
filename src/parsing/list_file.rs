//! Loaders that turn user input into a [`FilterSpecification`].
//!
//! List files are line oriented:
//!
//! | Line | Meaning |
//! |------|---------|
//! | blank | ignored |
//! | `RegEx:<pattern>` | case-insensitive regular expression |
//! | `TaxId:<integer>` | taxonomy ID (organism and taxonomy lists only) |
//! | anything else | exact name, compared case-insensitively |

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::types::TaxonomyId;
use crate::matching::spec::{compile_pattern, FilterSpecification, NameCriteria};

const REGEX_PREFIX: &str = "RegEx:";
const TAXONOMY_PREFIX: &str = "TaxId:";

#[derive(Error, Debug)]
pub enum ListFileError {
    #[error("Filter file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unable to read filter file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regular expression on line {line} of {path}: {source}")]
    InvalidRegex {
        path: PathBuf,
        line: usize,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid organism name '{name}': {source}")]
    InvalidWildcard {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Which prefixes a name list understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `RegEx:` and `TaxId:` lines are recognized
    Organisms,
    /// Only `RegEx:` lines are recognized; `TaxId:` lines are plain names
    Proteins,
}

/// Build a specification from a single organism name.
///
/// A name containing `*` becomes one regex with every `*` replaced by `.+`; the rest
/// of the name is regex syntax, so `Homo|Mus*` is an alternation. Otherwise the name
/// is an exact match.
///
/// # Errors
///
/// Returns `ListFileError::InvalidWildcard` if the generated pattern cannot be compiled.
pub fn organism_name_filter(name: &str) -> Result<FilterSpecification, ListFileError> {
    let name = name.trim();
    let mut names = NameCriteria::new();

    if name.contains('*') {
        let pattern = name.replace('*', ".+");
        let regex = compile_pattern(&pattern).map_err(|source| ListFileError::InvalidWildcard {
            name: name.to_string(),
            source,
        })?;
        names.add_regex(regex);
    } else if !name.is_empty() {
        names.add_exact(name);
    }

    Ok(FilterSpecification::ByOneOrganismName { names })
}

/// Load an organism list file (names, `RegEx:` and `TaxId:` lines).
///
/// # Errors
///
/// Returns `ListFileError::FileNotFound` or `ListFileError::FileUnreadable` if the
/// file cannot be read, or `ListFileError::InvalidRegex` for a bad pattern.
pub fn load_organism_list(path: &Path) -> Result<FilterSpecification, ListFileError> {
    let text = read_list_file(path)?;
    let (names, taxonomy_ids) = parse_name_list_text(&text, ListKind::Organisms, path)?;

    Ok(FilterSpecification::ByOrganismNames {
        names,
        taxonomy_ids,
    })
}

/// Load a protein name list file (names and `RegEx:` lines).
///
/// # Errors
///
/// Returns `ListFileError::FileNotFound` or `ListFileError::FileUnreadable` if the
/// file cannot be read, or `ListFileError::InvalidRegex` for a bad pattern.
pub fn load_protein_list(
    path: &Path,
    search_descriptions: bool,
) -> Result<FilterSpecification, ListFileError> {
    let text = read_list_file(path)?;
    let (names, _) = parse_name_list_text(&text, ListKind::Proteins, path)?;

    Ok(FilterSpecification::ByProteinNames {
        names,
        search_descriptions,
    })
}

/// Load a taxonomy ID list file (one integer per line, optional header row).
///
/// # Errors
///
/// Returns `ListFileError::FileNotFound` or `ListFileError::FileUnreadable` if the
/// file cannot be read.
pub fn load_taxonomy_list(path: &Path) -> Result<FilterSpecification, ListFileError> {
    let text = read_list_file(path)?;
    let taxonomy_ids = parse_taxonomy_list_text(&text, path);

    Ok(FilterSpecification::ByTaxonomyIds { taxonomy_ids })
}

/// Read a list file; bytes that are not valid UTF-8 (e.g. Latin-1 names) are replaced
fn read_list_file(path: &Path) -> Result<String, ListFileError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ListFileError::FileNotFound(path.to_path_buf())
        } else {
            ListFileError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse the text of a name list.
///
/// `source` is only used in messages.
///
/// # Errors
///
/// Returns `ListFileError::InvalidRegex` if a `RegEx:` pattern does not compile.
pub fn parse_name_list_text(
    text: &str,
    kind: ListKind,
    source: &Path,
) -> Result<(NameCriteria, BTreeSet<TaxonomyId>), ListFileError> {
    let mut names = NameCriteria::new();
    let mut taxonomy_ids = BTreeSet::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Line numbers in messages are 1-based for user friendliness
        let line_num = i + 1;

        if let Some(pattern) = strip_prefix_ignore_case(line, REGEX_PREFIX) {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                warn!(
                    "Empty {REGEX_PREFIX} pattern on line {line_num} of {}; skipping",
                    source.display()
                );
                continue;
            }

            let regex = compile_pattern(pattern).map_err(|e| ListFileError::InvalidRegex {
                path: source.to_path_buf(),
                line: line_num,
                source: e,
            })?;
            names.add_regex(regex);
            continue;
        }

        if kind == ListKind::Organisms {
            if let Some(value) = strip_prefix_ignore_case(line, TAXONOMY_PREFIX) {
                match value.trim().parse::<TaxonomyId>() {
                    Ok(id) => {
                        taxonomy_ids.insert(id);
                    }
                    Err(_) => warn!(
                        "Invalid {TAXONOMY_PREFIX} value '{}' on line {line_num} of {}; skipping",
                        value.trim(),
                        source.display()
                    ),
                }
                continue;
            }
        }

        if !names.add_exact(line) {
            debug!("Duplicate name '{line}' on line {line_num}");
        }
    }

    Ok((names, taxonomy_ids))
}

/// Parse the text of a taxonomy ID list.
///
/// Lines may be bare integers or `TaxId:` entries. A non-numeric first line is
/// taken to be a header; later non-numeric lines are skipped with a warning.
#[must_use]
pub fn parse_taxonomy_list_text(text: &str, source: &Path) -> BTreeSet<TaxonomyId> {
    let mut taxonomy_ids = BTreeSet::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let is_first = first_data_line;
        first_data_line = false;

        let value = strip_prefix_ignore_case(line, TAXONOMY_PREFIX)
            .map_or(line, str::trim);

        if let Ok(id) = value.parse::<TaxonomyId>() {
            taxonomy_ids.insert(id);
        } else if is_first {
            debug!("Skipping header line '{line}' in {}", source.display());
        } else {
            warn!(
                "Invalid taxonomy ID '{line}' on line {} of {}; skipping",
                i + 1,
                source.display()
            );
        }
    }

    taxonomy_ids
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}
