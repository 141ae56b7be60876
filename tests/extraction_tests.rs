//! Organism extraction against awkward real-world descriptions
//!
//! These exercise the public library API with inputs seen in UniProt and NCBI
//! downloads: nested and unbalanced brackets, lower-case tags, oversized
//! descriptions and non-ASCII text.

use std::path::Path;

use fasta_organism_filter::parsing::description::{
    extract_bracketed_organism, extract_organism, extract_species_tag, extract_taxonomy_id,
    organism_candidate,
};
use fasta_organism_filter::parsing::list_file::{parse_name_list_text, ListKind};
use fasta_organism_filter::pipeline::filter::evaluate;
use fasta_organism_filter::utils::validation::MAX_DESCRIPTION_LENGTH;
use fasta_organism_filter::{FilterSpecification, OrganismSource, ProteinEntry};

fn organism_list(text: &str) -> FilterSpecification {
    let (names, taxonomy_ids) =
        parse_name_list_text(text, ListKind::Organisms, Path::new("organisms.txt")).unwrap();
    FilterSpecification::ByOrganismNames {
        names,
        taxonomy_ids,
    }
}

#[test]
fn test_uniprot_description() {
    let description =
        "Alcohol dehydrogenase 1 OS=Saccharomyces cerevisiae (strain ATCC 204508 / S288c) OX=559292 GN=ADH1 PE=1 SV=5";

    let extracted = extract_organism(description);
    assert_eq!(
        extracted.organism_name(),
        Some("Saccharomyces cerevisiae (strain ATCC 204508 / S288c)")
    );
    assert_eq!(extracted.source(), Some(OrganismSource::SpeciesTag));
    assert_eq!(extracted.taxonomy_id, Some(559292));
}

#[test]
fn test_species_tag_at_end_of_description() {
    assert_eq!(
        extract_species_tag("Protein kinase OS=Arabidopsis thaliana").as_deref(),
        Some("Arabidopsis thaliana")
    );
    assert_eq!(extract_taxonomy_id("Protein kinase OS=Arabidopsis thaliana"), None);
}

#[test]
fn test_lower_case_tags() {
    let description = "Putative protein os=Danio rerio ox=7955 gn=foo";
    assert_eq!(extract_species_tag(description).as_deref(), Some("Danio rerio"));
    assert_eq!(extract_taxonomy_id(description), Some(7955));
}

#[test]
fn test_nested_brackets() {
    let description = "MULTISPECIES: transporter [Salmonella enterica subsp. enterica serovar 4,[5],12:i:-]";
    assert_eq!(
        extract_bracketed_organism(description).as_deref(),
        Some("Salmonella enterica subsp. enterica serovar 4,[5],12:i:-")
    );
}

#[test]
fn test_last_bracket_wins() {
    let description = "protein [fragment] from [Bacillus subtilis]";
    assert_eq!(
        extract_bracketed_organism(description).as_deref(),
        Some("Bacillus subtilis")
    );
}

#[test]
fn test_no_organism_falls_back_to_description() {
    let description = "Uncharacterized protein";
    let extracted = extract_organism(description);
    assert!(extracted.organism_name().is_none());
    assert!(extracted.taxonomy_id.is_none());
    assert_eq!(organism_candidate(description), description);
}

#[test]
fn test_multibyte_organism_name() {
    let description = "hypothetical protein [Trichoderma reesei QM6a Ørsted]";
    assert_eq!(
        extract_bracketed_organism(description).as_deref(),
        Some("Trichoderma reesei QM6a Ørsted")
    );
}

#[test]
fn test_oversized_description_is_truncated() {
    let long = format!("{} [Homo sapiens]", "x".repeat(MAX_DESCRIPTION_LENGTH * 2));
    let entry = ProteinEntry::new("big", long, b"MKV".to_vec());
    assert_eq!(entry.description.len(), MAX_DESCRIPTION_LENGTH);

    // The trailing bracket is lost with the rest of the overflow
    assert!(extract_bracketed_organism(&entry.description).is_none());
}

#[test]
fn test_truncation_counts_characters() {
    let entry = ProteinEntry::new("wide", "é".repeat(5000), Vec::new());
    assert_eq!(entry.description.chars().count(), 5000);

    let entry = ProteinEntry::new("wider", "é".repeat(MAX_DESCRIPTION_LENGTH + 10), Vec::new());
    assert_eq!(entry.description.chars().count(), MAX_DESCRIPTION_LENGTH);
    assert!(entry.description.chars().all(|c| c == 'é'));
}

#[test]
fn test_taxonomy_id_checked_before_names() {
    let spec = organism_list("TaxId:10090\nHomo sapiens\n");

    let mouse = ProteinEntry::new("m", "Protein OS=Mus musculus OX=10090", Vec::new());
    let m = evaluate(&spec, &mouse).unwrap();
    assert_eq!(m.matched_text, "10090");

    let human = ProteinEntry::new("h", "Protein OS=Homo sapiens OX=9606", Vec::new());
    let m = evaluate(&spec, &human).unwrap();
    assert_eq!(m.matched_text, "Homo sapiens");
}

#[test]
fn test_bracketed_name_then_description_fallback() {
    let spec = organism_list("RegEx:coli\n");

    let bracketed = ProteinEntry::new("b", "protein [Escherichia coli]", Vec::new());
    assert_eq!(evaluate(&spec, &bracketed).unwrap().matched_text, "coli");

    // No tag and no brackets, so the whole description is searched
    let plain = ProteinEntry::new("p", "colicin immunity protein", Vec::new());
    assert_eq!(evaluate(&spec, &plain).unwrap().matched_text, "coli");

    let other = ProteinEntry::new("o", "protein [Bacillus subtilis]", Vec::new());
    assert!(evaluate(&spec, &other).is_none());
}
