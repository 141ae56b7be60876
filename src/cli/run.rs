use anyhow::{bail, Context};

use crate::cli::{Cli, OutputFormat};
use crate::matching::spec::FilterSpecification;
use crate::parsing::list_file::{
    load_organism_list, load_protein_list, load_taxonomy_list, organism_name_filter,
};
use crate::pipeline::output::{OutputPaths, DEFAULT_SUFFIX};
use crate::pipeline::{run_filter, run_summary, RunStats};
use crate::utils::validation::{
    filename_suffix, input_base_name, prepare_output_dir, validate_input_file,
};

/// Execute one filter or summary run
///
/// # Errors
///
/// Returns an error if the input or a list file cannot be read, the filter is
/// empty, or an output cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    validate_input_file(&cli.input)?;
    let (spec, suffix) = build_specification(cli)?;

    let output_dir = prepare_output_dir(cli.output_dir.as_deref(), &cli.input)?;
    let paths = OutputPaths::new(output_dir, input_base_name(&cli.input));

    let stats = if let FilterSpecification::NoFilter = spec {
        run_summary(&cli.input, &paths, cli.protein_map)
            .with_context(|| format!("Failed to summarize {}", cli.input.display()))?
    } else {
        run_filter(&cli.input, &spec, &paths, &suffix, cli.verbose)
            .with_context(|| format!("Failed to filter {}", cli.input.display()))?
    };

    print_report(&stats, cli.format)
}

/// Build the filter for the selected mode and the suffix for its output file
fn build_specification(cli: &Cli) -> anyhow::Result<(FilterSpecification, String)> {
    let default_suffix = || DEFAULT_SUFFIX.to_string();

    let (spec, suffix, list_path) = if let Some(name) = &cli.organism {
        (organism_name_filter(name)?, filename_suffix(name)?, None)
    } else if let Some(path) = &cli.organism_list {
        (load_organism_list(path)?, default_suffix(), Some(path))
    } else if let Some(path) = &cli.protein_list {
        (
            load_protein_list(path, cli.search_descriptions)?,
            default_suffix(),
            Some(path),
        )
    } else if let Some(path) = &cli.taxonomy_list {
        (load_taxonomy_list(path)?, default_suffix(), Some(path))
    } else {
        (FilterSpecification::NoFilter, default_suffix(), None)
    };

    if spec.is_empty() {
        match list_path {
            Some(path) => bail!("Filter file {} has no usable entries", path.display()),
            None => bail!("No organism name given"),
        }
    }

    Ok((spec, suffix))
}

fn print_report(stats: &RunStats, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_report(stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Tsv => print_tsv_report(stats),
    }
    Ok(())
}

fn print_text_report(stats: &RunStats) {
    println!("Mode: {}", stats.mode);
    println!("Input: {}", stats.input.display());
    println!("Entries read: {}", stats.entries_read);
    if let Some(kept) = stats.entries_kept {
        println!("Entries kept: {kept}");
    }
    if let Some(organisms) = stats.distinct_organisms {
        println!("Organisms: {organisms}");
    }
    if let Some(missing) = stats.entries_without_organism {
        println!("Entries without organism: {missing}");
    }
    for output in &stats.outputs {
        println!("Wrote {}", output.display());
    }
}

fn print_tsv_report(stats: &RunStats) {
    let optional = |value: Option<String>| value.unwrap_or_default();
    let outputs: Vec<String> = stats
        .outputs
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    println!("mode\tinput\tentries_read\tentries_kept\tdistinct_organisms\tentries_without_organism\toutputs");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        stats.mode,
        stats.input.display(),
        stats.entries_read,
        optional(stats.entries_kept.map(|n| n.to_string())),
        optional(stats.distinct_organisms.map(|n| n.to_string())),
        optional(stats.entries_without_organism.map(|n| n.to_string())),
        outputs.join(",")
    );
}
