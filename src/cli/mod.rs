//! Command-line interface for fasta-organism-filter.
//!
//! This module implements the CLI using clap. One selection option chooses the
//! mode; with none, the input is summarized by organism:
//!
//! - **--organism**: keep entries from one organism (`*` is a wildcard)
//! - **--organism-list**: keep entries from any organism in a list file
//! - **--protein-list**: keep entries named in a list file
//! - **--taxonomy-list**: keep entries whose `OX=` taxonomy ID is in a list file
//!
//! ## Usage
//!
//! ```text
//! # Count proteins per organism
//! fasta-organism-filter uniprot_trembl.fasta.gz
//!
//! # Keep all E. coli strains, writing uniprot_sprot_Escherichia_coli.fasta
//! fasta-organism-filter uniprot_sprot.fasta --organism "Escherichia coli*"
//!
//! # Keep proteins listed in a file, also searching descriptions
//! fasta-organism-filter proteins.fasta --protein-list wanted.txt --search-descriptions
//!
//! # JSON run report for scripting
//! fasta-organism-filter proteins.fasta --taxonomy-list taxa.txt --format json
//! ```

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub mod run;

#[derive(Parser)]
#[command(name = "fasta-organism-filter")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Filter or summarize protein FASTA files by organism")]
#[command(
    long_about = "fasta-organism-filter reads a protein FASTA file and classifies each entry by source organism.\n\nThe organism is taken from the UniProt OS= tag, else from the last [bracketed] text in the description. Given a selection option it writes a filtered FASTA file; otherwise it writes a per-organism summary.\n\nList files contain one entry per line. Lines starting with RegEx: are regular expressions; lines starting with TaxId: are taxonomy IDs (organism and taxonomy lists only); other lines are names matched without regard to case."
)]
#[command(group(
    ArgGroup::new("selection")
        .args(["organism", "organism_list", "protein_list", "taxonomy_list"])
        .multiple(false)
))]
pub struct Cli {
    /// Input protein FASTA file (.fasta, .fasta.gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Keep entries from this organism; '*' matches one or more characters
    #[arg(long, value_name = "NAME")]
    pub organism: Option<String>,

    /// Keep entries from organisms listed in this file
    #[arg(long, value_name = "FILE")]
    pub organism_list: Option<PathBuf>,

    /// Keep entries whose names are listed in this file
    #[arg(long, value_name = "FILE")]
    pub protein_list: Option<PathBuf>,

    /// With --protein-list, also match list entries against descriptions
    #[arg(long, requires = "protein_list")]
    pub search_descriptions: bool,

    /// Keep entries whose OX= taxonomy ID is listed in this file
    #[arg(long, value_name = "FILE")]
    pub taxonomy_list: Option<PathBuf>,

    /// When summarizing, also write a protein-to-organism map
    #[arg(
        long,
        conflicts_with_all = ["organism", "organism_list", "protein_list", "taxonomy_list"]
    )]
    pub protein_map: bool,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output, including a MatchInfo file when filtering
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the end-of-run report
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
