//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

use crate::pipeline::output::DEFAULT_SUFFIX;

/// Descriptions longer than this are truncated when read (and therefore when written)
pub const MAX_DESCRIPTION_LENGTH: usize = 7500;

/// Characters replaced with `_` when an organism name becomes part of a file name
const UNSAFE_FILENAME_CHARS: [char; 10] = [' ', '\\', '/', ':', '*', '?', '.', '<', '>', '|'];

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Organism name '{0}' is empty")]
    EmptyName(String),
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("Output directory {path} is not writable: {reason}")]
    OutputDirNotWritable { path: PathBuf, reason: String },
}

/// Truncate a description in place to at most [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn truncate_description(description: &mut String) {
    if let Some((cut, _)) = description.char_indices().nth(MAX_DESCRIPTION_LENGTH) {
        description.truncate(cut);
    }
}

/// Build a file name suffix from an organism name.
///
/// Each of space, `\`, `/`, `:`, `*`, `?`, `.`, `<`, `>`, `|` becomes `_`, and
/// trailing underscores are removed. A name made only of those characters,
/// such as `*`, gets [`DEFAULT_SUFFIX`].
///
/// # Examples
///
/// ```
/// use fasta_organism_filter::utils::validation::filename_suffix;
///
/// assert_eq!(filename_suffix("Homo sapiens").unwrap(), "Homo_sapiens");
/// assert_eq!(filename_suffix("Escherichia coli*").unwrap(), "Escherichia_coli");
/// assert_eq!(filename_suffix("*").unwrap(), "Filtered");
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if the name is blank.
pub fn filename_suffix(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName(name.to_string()));
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if UNSAFE_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = sanitized.trim_end_matches('_');
    if trimmed.is_empty() {
        return Ok(DEFAULT_SUFFIX.to_string());
    }

    Ok(trimmed.to_string())
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Input file name with any compression extension and its final extension removed.
///
/// `uniprot_sprot.fasta.gz` becomes `uniprot_sprot`.
#[must_use]
pub fn input_base_name(path: &Path) -> String {
    let without_gz = if is_gzipped(path) {
        path.file_stem().map(PathBuf::from).unwrap_or_default()
    } else {
        path.file_name().map(PathBuf::from).unwrap_or_default()
    };

    without_gz
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Check that the input FASTA exists and is a regular file.
///
/// # Errors
///
/// Returns `ValidationError::InputNotFound` otherwise.
pub fn validate_input_file(path: &Path) -> Result<(), ValidationError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ValidationError::InputNotFound(path.to_path_buf()))
    }
}

/// Resolve the output directory, creating it if needed.
///
/// Defaults to the directory containing `input` when `requested` is `None`.
///
/// # Errors
///
/// Returns `ValidationError::OutputDirNotWritable` if the directory cannot be
/// created, is not a directory, or is read-only.
pub fn prepare_output_dir(
    requested: Option<&Path>,
    input: &Path,
) -> Result<PathBuf, ValidationError> {
    let dir = match requested {
        Some(dir) => dir.to_path_buf(),
        None => match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    let not_writable = |reason: String| ValidationError::OutputDirNotWritable {
        path: dir.clone(),
        reason,
    };

    std::fs::create_dir_all(&dir).map_err(|e| not_writable(e.to_string()))?;

    let metadata = std::fs::metadata(&dir).map_err(|e| not_writable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(not_writable("not a directory".to_string()));
    }
    if metadata.permissions().readonly() {
        return Err(not_writable("directory is read-only".to_string()));
    }

    Ok(dir)
}
