use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Parser, Subcommand, error::ErrorKind};
use rand::Rng;
use tracing::info;

use crate::config::{ManifestConfig, SamplerConfig};
use crate::constants::manifest::{DEFAULT_DESIGN_COUNT, DEFAULT_OUTPUTS_DIR, PREVIEW_DESIGNS};
use crate::constants::sampler::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_DISTANCE};
use crate::constants::status::{
    FAILURE_PREVIEW_LIMIT, NEXT_PENDING_LIMIT, PROGRESS_BAR_WIDTH, UNKNOWN_FAILURE,
};
use crate::heuristics::{format_capacity, space_utilization};
use crate::manifest::{GeneratedBatch, generate_batch};
use crate::metrics::value_balance;
use crate::naming::RuleBasedNamer;
use crate::status::{BatchStatus, progress_bar};
use crate::taxonomy::{CoverageMode, Taxonomy};
use crate::types::DesignId;

/// Dimensions shown in the balance summary after a manifest run.
const BALANCE_PREVIEW: usize = 5;

#[derive(Debug, Parser)]
#[command(
    name = "design_vibes",
    disable_help_subcommand = true,
    about = "Sample unique design-vibe combinations into a manifest",
    long_about = "Draw weighted, deduplicated, diversity-constrained combinations of design dimensions and write them to a dated batch manifest.",
    after_help = "Set RUST_LOG=info (or debug) to see sampler progress."
)]
struct DesignVibesCli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample combinations and write `manifest.json` into a new batch folder.
    Manifest(ManifestArgs),
    /// Report generation progress of a batch folder.
    Status(StatusArgs),
    /// List dimensions, value counts, and combination capacity.
    Dimensions(DimensionsArgs),
}

/// CLI for `design_vibes manifest`.
///
/// Common usage:
/// - Default batch of 20 under `outputs/<date>`: `design_vibes manifest`
/// - Named, reproducible batch: `design_vibes manifest -n 50 --name spring --seed 7`
/// - Only the core dimensions: `design_vibes manifest --core-only`
#[derive(Debug, Args)]
struct ManifestArgs {
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_DESIGN_COUNT,
        value_parser = parse_positive_usize,
        help = "Number of designs to sample"
    )]
    count: usize,
    #[arg(long, help = "Optional suffix for the batch folder name")]
    name: Option<String>,
    #[arg(long = "core-only", help = "Sample only the core dimensions")]
    core_only: bool,
    #[arg(
        long = "min-distance",
        default_value_t = DEFAULT_MIN_DISTANCE,
        help = "Minimum differing dimensions against the recent window (0 disables)"
    )]
    min_distance: usize,
    #[arg(
        long = "max-attempts",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = parse_positive_usize,
        help = "Rejected draws per slot before the relaxed fallback runs"
    )]
    max_attempts: usize,
    #[arg(long, help = "Optional deterministic seed (random when omitted)")]
    seed: Option<u64>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional JSON taxonomy to use instead of the built-in dimensions"
    )]
    taxonomy: Option<PathBuf>,
    #[arg(
        long = "outputs-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUTS_DIR,
        help = "Directory that holds batch folders"
    )]
    outputs_dir: PathBuf,
}

#[derive(Debug, Args)]
struct StatusArgs {
    #[arg(value_name = "BATCH_DIR", help = "Batch folder created by the manifest command")]
    batch: PathBuf,
}

#[derive(Debug, Args)]
struct DimensionsArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Optional JSON taxonomy to use instead of the built-in dimensions"
    )]
    taxonomy: Option<PathBuf>,
    #[arg(long = "core-only", help = "List only the core dimensions")]
    core_only: bool,
}

/// Entry point shared by the `design_vibes` binary; `args_iter` excludes the program name.
pub fn run<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<DesignVibesCli, _>(
        std::iter::once("design_vibes".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    match cli.command {
        Command::Manifest(args) => run_manifest(args),
        Command::Status(args) => run_status(args),
        Command::Dimensions(args) => run_dimensions(args),
    }
}

fn run_manifest(args: ManifestArgs) -> Result<(), Box<dyn Error>> {
    let taxonomy = load_taxonomy(args.taxonomy.as_ref())?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    if args.seed.is_none() {
        info!("[design_vibes:apps] using random seed {}", seed);
    }
    let config = ManifestConfig {
        count: args.count,
        name: args.name,
        outputs_dir: args.outputs_dir,
        sampler: SamplerConfig {
            seed,
            min_distance: args.min_distance,
            max_attempts: args.max_attempts,
            coverage: coverage_mode(args.core_only),
            ..SamplerConfig::default()
        },
    };

    let batch = generate_batch(&config, &taxonomy, &RuleBasedNamer, Local::now())?;
    print_manifest_summary(&config, &taxonomy, &batch);
    Ok(())
}

fn run_status(args: StatusArgs) -> Result<(), Box<dyn Error>> {
    let status = BatchStatus::scan(&args.batch)?;
    print_status(&status);
    Ok(())
}

fn run_dimensions(args: DimensionsArgs) -> Result<(), Box<dyn Error>> {
    let taxonomy = load_taxonomy(args.taxonomy.as_ref())?;
    let mode = coverage_mode(args.core_only);
    println!(
        "=== dimensions (taxonomy v{}, {:?}) ===",
        taxonomy.version(),
        mode
    );
    for dimension in taxonomy.active(mode) {
        println!(
            "{:<28} values={:<3} core={}",
            dimension.name,
            dimension.len(),
            if dimension.core { "yes" } else { "no" }
        );
    }
    println!(
        "capacity (full)     : {}",
        format_capacity(taxonomy.capacity(CoverageMode::Full))
    );
    println!(
        "capacity (core-only): {}",
        format_capacity(taxonomy.capacity(CoverageMode::CoreOnly))
    );
    Ok(())
}

fn load_taxonomy(path: Option<&PathBuf>) -> Result<Taxonomy, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!("[design_vibes:apps] loading taxonomy from {}", path.display());
            Ok(Taxonomy::from_json_file(path)?)
        }
        None => Ok(Taxonomy::builtin()),
    }
}

fn coverage_mode(core_only: bool) -> CoverageMode {
    if core_only {
        CoverageMode::CoreOnly
    } else {
        CoverageMode::Full
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn print_manifest_summary(config: &ManifestConfig, taxonomy: &Taxonomy, batch: &GeneratedBatch) {
    let capacity = taxonomy.capacity(config.sampler.coverage);
    let report = &batch.report;
    println!("=== manifest ===");
    println!("path          : {}", batch.manifest_path.display());
    println!("designs       : {}", batch.manifest.total_designs);
    println!("seed          : {}", config.sampler.seed);
    println!("coverage      : {:?}", config.sampler.coverage);
    println!(
        "capacity      : {} ({:.6}% used)",
        format_capacity(capacity),
        space_utilization(batch.manifest.total_designs, capacity) * 100.0
    );
    println!(
        "draws         : attempts={} fallback={} relaxed_slots={}",
        report.attempts,
        report.fallback_draws,
        report.relaxed_slots.len()
    );

    let balances = value_balance(&report.usage);
    if !balances.is_empty() {
        println!("--- least balanced dimensions ---");
        for balance in balances.iter().take(BALANCE_PREVIEW) {
            println!(
                "{}: values={} min={} max={} mean={:.2} cv={:.2} most_used={}",
                balance.dimension,
                balance.values,
                balance.min,
                balance.max,
                balance.mean,
                balance.coefficient_of_variation,
                balance.most_used.as_deref().unwrap_or("-")
            );
        }
    }

    println!("--- first designs ---");
    for design in batch.manifest.designs.iter().take(PREVIEW_DESIGNS) {
        println!("#{} {} [{}]", design.id, design.name, design.seed);
        println!("    {}", design.tagline);
        for (dimension, value) in design.dimensions.iter().take(4) {
            println!("    {dimension}: {value}");
        }
    }
    println!();
    println!(
        "Next: generate design-<id>.html files into {}/designs, then run `design_vibes status {}`",
        batch.folder.display(),
        batch.folder.display()
    );
}

fn print_status(status: &BatchStatus) {
    let total = status.total;
    println!("=== batch status: {} ===", status.batch.display());
    println!("total     : {total}");
    print_status_row("completed", status.completed.len(), total);
    print_status_row("staging", status.staging.len(), total);
    print_status_row("failed", status.failed(), total);
    print_status_row("pending", status.pending(), total);

    let next = status.next_pending(NEXT_PENDING_LIMIT);
    if !next.is_empty() {
        println!("next pending: {}", format_design_ids(&next));
    }
    if !status.failures.is_empty() {
        println!("--- failures ---");
        for failure in status.failures.iter().take(FAILURE_PREVIEW_LIMIT) {
            println!(
                "#{}: {}",
                failure.id,
                failure.error.as_deref().unwrap_or(UNKNOWN_FAILURE)
            );
        }
        if status.failures.len() > FAILURE_PREVIEW_LIMIT {
            println!(
                "... and {} more",
                status.failures.len() - FAILURE_PREVIEW_LIMIT
            );
        }
    }
    if status.is_complete() {
        println!("All designs complete.");
    }
}

/// `[6, 7]` -> `#6, #7`.
fn format_design_ids(ids: &[DesignId]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_status_row(label: &str, count: usize, total: usize) {
    let percent = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    println!(
        "{:<10}{} {}/{} ({:.1}%)",
        label,
        progress_bar(count, total, PROGRESS_BAR_WIDTH),
        count,
        total,
        percent
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_flags() {
        let cli = DesignVibesCli::try_parse_from([
            "design_vibes",
            "manifest",
            "-n",
            "5",
            "--name",
            "spring",
            "--core-only",
            "--seed",
            "9",
        ])
        .unwrap();
        let Command::Manifest(args) = cli.command else {
            panic!("expected manifest command");
        };
        assert_eq!(args.count, 5);
        assert_eq!(args.name.as_deref(), Some("spring"));
        assert!(args.core_only);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.min_distance, DEFAULT_MIN_DISTANCE);
        assert_eq!(args.outputs_dir, PathBuf::from(DEFAULT_OUTPUTS_DIR));
    }

    #[test]
    fn rejects_zero_count() {
        assert!(DesignVibesCli::try_parse_from(["design_vibes", "manifest", "-n", "0"]).is_err());
        assert!(parse_positive_usize("abc").is_err());
        assert_eq!(parse_positive_usize("3"), Ok(3));
    }

    #[test]
    fn pending_ids_are_hash_prefixed() {
        assert_eq!(format_design_ids(&[6, 7]), "#6, #7");
        assert_eq!(format_design_ids(&[]), "");
    }

    #[test]
    fn help_is_not_an_error() {
        let parsed = parse_cli::<DesignVibesCli, _>(["design_vibes", "--help"]).unwrap();
        assert!(parsed.is_none());
    }
}
