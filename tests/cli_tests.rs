//! End-to-end tests of the `fasta-organism-filter` binary
//!
//! Each test writes a small FASTA file into a temporary directory, runs the
//! binary against it and checks the files it leaves behind.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROTEINS: &str = "\
>sp|P0A7V8|RS4_ECOLI 30S ribosomal protein S4 OS=Escherichia coli (strain K12) OX=83333 GN=rpsD PE=1 SV=2
MARYLGPKLKLSRREGTDLFLKSGVRAIDTKCKIEQAPGQHGARKPRLSDYGVQLREKQK
VRRIYGVLERQFRNYYKEAARLKGNTGENLLALLEGRLDNVVYRMGFGATRAEARQLVSH
>sp|P04637|P53_HUMAN Cellular tumor antigen p53 OS=Homo sapiens OX=9606 GN=TP53 PE=1 SV=4
MEEPQSDPSVEPPLSQETFSDLWKLLPENNVLSPLPSQAMDDLMLSPDDIEQWFTEDP
>WP_000001 serine/threonine kinase [Escherichia coli O157:H7]
MKKLLVAG
>XP_002 hypothetical protein [Salmonella enterica subsp. enterica serovar 4,[5],12:i:-]
MSTNPKPQRKTKRNTNRRPQDVKFPGG
>orphan Uncharacterized protein
MKVL
";

fn setup() -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("proteins.fasta");
    fs::write(&input, PROTEINS).unwrap();
    (temp, input)
}

fn write_list(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn headers(fasta: &Path) -> Vec<String> {
    fs::read_to_string(fasta)
        .unwrap()
        .lines()
        .filter(|l| l.starts_with('>'))
        .map(ToString::to_string)
        .collect()
}

fn binary() -> Command {
    Command::cargo_bin("fasta-organism-filter").unwrap()
}

#[test]
fn test_summarize_writes_organism_table() {
    let (temp, input) = setup();

    binary()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries read: 5"))
        .stdout(predicate::str::contains("Organisms: 4"))
        .stdout(predicate::str::contains("Entries without organism: 1"));

    let table = fs::read_to_string(temp.path().join("proteins_OrganismSummary.txt")).unwrap();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows[0], "Organism\tTaxonomyID\tProteins\tGenus\tSpecies");
    assert_eq!(rows.len(), 5);
    assert!(rows.contains(&"Homo sapiens\t9606\t1\tHomo\tsapiens"));
    assert!(rows.contains(&"Escherichia coli O157:H7\t0\t1\tEscherichia\tcoli"));
    assert!(rows
        .iter()
        .any(|r| r.starts_with("Salmonella enterica subsp. enterica serovar 4,[5],12:i:-\t0\t1")));

    assert!(!temp.path().join("proteins_ProteinOrganismMap.txt").exists());
}

#[test]
fn test_summarize_with_protein_map() {
    let (temp, input) = setup();

    binary().arg(&input).arg("--protein-map").assert().success();

    let map = fs::read_to_string(temp.path().join("proteins_ProteinOrganismMap.txt")).unwrap();
    let rows: Vec<&str> = map.lines().collect();
    assert_eq!(rows[0], "Protein\tOrganism\tTaxonomyID");
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[2], "sp|P04637|P53_HUMAN\tHomo sapiens\t9606");
    assert_eq!(rows[5], "orphan\t\t0");
}

#[test]
fn test_organism_wildcard_filter() {
    let (temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", "Escherichia coli*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries kept: 2"));

    let output = temp.path().join("proteins_Escherichia_coli.fasta");
    let kept = headers(&output);
    assert_eq!(kept.len(), 2);
    assert!(kept[0].starts_with(">sp|P0A7V8|RS4_ECOLI"));
    assert!(kept[1].starts_with(">WP_000001"));

    // Sequence lines are rewrapped, not altered
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.lines().all(|l| l.starts_with('>') || l.len() <= 60));
    assert!(text.contains("MARYLGPKLKLSRREGTDLFLKSGVRAIDTKCKIEQAPGQHGARKPRLSDYGVQLREKQK\n"));
}

#[test]
fn test_bare_wildcard_uses_default_suffix() {
    let (temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", "*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries kept: 5"));

    assert_eq!(headers(&temp.path().join("proteins_Filtered.fasta")).len(), 5);
}

#[test]
fn test_blank_organism_name_fails() {
    let (_temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn test_organism_wildcard_keeps_regex_syntax() {
    let (temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", "Homo|Mus*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries kept: 1"));

    let kept = headers(&temp.path().join("proteins_Homo_Mus.fasta"));
    assert_eq!(kept.len(), 1);
    assert!(kept[0].contains("P53_HUMAN"));
}

#[test]
fn test_organism_name_is_case_insensitive() {
    let (temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", "homo SAPIENS"])
        .assert()
        .success();

    let kept = headers(&temp.path().join("proteins_homo_SAPIENS.fasta"));
    assert_eq!(kept.len(), 1);
    assert!(kept[0].contains("P53_HUMAN"));
}

#[test]
fn test_organism_list_with_taxonomy_and_regex() {
    let (temp, input) = setup();
    let list = write_list(
        temp.path(),
        "organisms.txt",
        "TaxId:9606\nRegEx:^Salmonella\n",
    );
    let out_dir = temp.path().join("filtered");

    binary()
        .arg(&input)
        .arg("--organism-list")
        .arg(&list)
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--verbose")
        .assert()
        .success();

    let kept = headers(&out_dir.join("proteins_Filtered.fasta"));
    assert_eq!(kept.len(), 2);
    assert!(kept[0].contains("P53_HUMAN"));
    assert!(kept[1].contains("XP_002"));

    let info = fs::read_to_string(out_dir.join("proteins_Filtered_MatchInfo.txt")).unwrap();
    let rows: Vec<&str> = info.lines().collect();
    assert_eq!(rows[0], "Protein\tFilterMatch\tRegEx");
    assert_eq!(rows[1], "sp|P04637|P53_HUMAN\t9606\t");
    // Regex rows carry the matched substring, not the whole organism name
    assert_eq!(rows[2], "XP_002\tSalmonella\t^Salmonella");
}

#[test]
fn test_protein_list_searching_descriptions() {
    let (temp, input) = setup();
    let list = write_list(temp.path(), "proteins.txt", "orphan\nRegEx:kinase\n");

    binary()
        .arg(&input)
        .arg("--protein-list")
        .arg(&list)
        .assert()
        .success();
    let kept = headers(&temp.path().join("proteins_Filtered.fasta"));
    assert_eq!(kept, vec![">orphan Uncharacterized protein".to_string()]);

    binary()
        .arg(&input)
        .arg("--protein-list")
        .arg(&list)
        .arg("--search-descriptions")
        .assert()
        .success();
    let kept = headers(&temp.path().join("proteins_Filtered.fasta"));
    assert_eq!(kept.len(), 2);
    assert!(kept[0].starts_with(">WP_000001"));
    assert!(kept[1].starts_with(">orphan"));
}

#[test]
fn test_taxonomy_list_with_header() {
    let (temp, input) = setup();
    let list = write_list(temp.path(), "taxa.txt", "TaxonomyID\n83333\n9606\n");

    binary()
        .arg(&input)
        .arg("--taxonomy-list")
        .arg(&list)
        .assert()
        .success();

    let kept = headers(&temp.path().join("proteins_Filtered.fasta"));
    assert_eq!(kept.len(), 2);
    assert!(kept[0].contains("RS4_ECOLI"));
    assert!(kept[1].contains("P53_HUMAN"));
}

#[test]
fn test_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("proteins.fasta.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder.write_all(PROTEINS.as_bytes()).unwrap();
    encoder.finish().unwrap();

    binary()
        .arg(&input)
        .args(["--organism", "Homo sapiens"])
        .assert()
        .success();

    let kept = headers(&temp.path().join("proteins_Homo_sapiens.fasta"));
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_json_report() {
    let (_temp, input) = setup();

    let output = binary()
        .arg(&input)
        .args(["--organism", "Homo sapiens", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "organism-name");
    assert_eq!(report["entries_read"], 5);
    assert_eq!(report["entries_kept"], 1);
}

#[test]
fn test_empty_list_fails() {
    let (temp, input) = setup();
    let list = write_list(temp.path(), "empty.txt", "\n\n");

    binary()
        .arg(&input)
        .arg("--organism-list")
        .arg(&list)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable entries"));

    assert!(!temp.path().join("proteins_Filtered.fasta").exists());
}

#[test]
fn test_invalid_regex_fails() {
    let (temp, input) = setup();
    let list = write_list(temp.path(), "bad.txt", "RegEx:Homo (sapiens\n");

    binary()
        .arg(&input)
        .arg("--organism-list")
        .arg(&list)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_missing_input_fails() {
    let temp = tempfile::tempdir().unwrap();

    binary()
        .arg(temp.path().join("absent.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_conflicting_selections_rejected() {
    let (_temp, input) = setup();

    binary()
        .arg(&input)
        .args(["--organism", "Homo sapiens", "--taxonomy-list", "taxa.txt"])
        .assert()
        .failure();
}
