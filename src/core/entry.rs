use crate::utils::validation::truncate_description;

/// A single protein record read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinEntry {
    /// Entry name (header text up to the first space)
    pub name: String,

    /// Free-text description (remainder of the header line)
    pub description: String,

    /// Residues with line breaks removed
    pub sequence: Vec<u8>,
}

impl ProteinEntry {
    /// Create an entry, truncating over-long descriptions.
    pub fn new(name: impl Into<String>, description: impl Into<String>, sequence: Vec<u8>) -> Self {
        let mut description = description.into();
        truncate_description(&mut description);

        Self {
            name: name.into(),
            description,
            sequence,
        }
    }

    /// The header line as written to FASTA output (without the leading `>`)
    #[must_use]
    pub fn header(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.description)
        }
    }
}
