use std::path::PathBuf;

use clap::Parser;
use parts_seed_core::{
    DEFAULT_OUTPUT_PATH, DEFAULT_PARTS_PATH, DEFAULT_VEHICLES_PATH, SeedConfig, SeedReport,
    generate,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed-db")]
#[command(version)]
#[command(about = "Generate idempotent seed SQL from the vehicle and parts taxonomies")]
struct Cli {
    /// Vehicle taxonomy JSON (make -> year -> model -> engines).
    #[arg(long, default_value = DEFAULT_VEHICLES_PATH)]
    vehicles: PathBuf,
    /// Parts taxonomy JSON (category -> subcategories).
    #[arg(long, default_value = DEFAULT_PARTS_PATH)]
    parts: PathBuf,
    /// SQL output file, overwritten on every run.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = SeedConfig {
        vehicles_path: cli.vehicles,
        parts_path: cli.parts,
        output_path: cli.output,
    };
    let report = generate(&config).map_err(|e| e.to_string())?;
    print_summary(&config, &report);
    Ok(())
}

fn print_summary(config: &SeedConfig, report: &SeedReport) {
    println!(
        "Seed SQL written to '{}' ({} statements):",
        config.output_path.display(),
        report.statements
    );
    println!("  Makes: {}", report.makes);
    println!("  Years: {}", report.years);
    println!("  Models: {}", report.models);
    println!("  Engines: {}", report.engines);
    println!("  Cars: {}", report.cars);
    println!("  Part categories: {}", report.part_categories);
    println!("  Part subcategories: {}", report.part_subcategories);
}
