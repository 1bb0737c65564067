//! The end-to-end seed pipeline: load both taxonomies, render, write.
//!
//! # Example
//!
//! ```no_run
//! use parts_seed_core::{SeedConfig, generate};
//!
//! let report = generate(&SeedConfig::default()).unwrap();
//! println!("{} statements written", report.statements);
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::VehicleCatalog;
use crate::error::{Result, SeedError};
use crate::load::{load_part_taxonomy, load_vehicle_taxonomy};
use crate::sql::SeedScript;
use crate::types::PartTaxonomy;

/// Default vehicle taxonomy path, relative to the working directory.
pub const DEFAULT_VEHICLES_PATH: &str = "make-year-model.json";
/// Default parts taxonomy path, relative to the working directory.
pub const DEFAULT_PARTS_PATH: &str = "part.json";
/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "seed_db.sql";

/// Input and output locations for a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub vehicles_path: PathBuf,
    pub parts_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            vehicles_path: PathBuf::from(DEFAULT_VEHICLES_PATH),
            parts_path: PathBuf::from(DEFAULT_PARTS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Row counts for a rendered seed script.
///
/// Counts are distinct entities, so they equal the rows the script creates
/// in an empty database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub makes: usize,
    pub years: usize,
    pub models: usize,
    pub engines: usize,
    pub cars: usize,
    pub part_categories: usize,
    pub part_subcategories: usize,
    /// Total statements written.
    pub statements: usize,
}

impl SeedReport {
    pub fn new(catalog: &VehicleCatalog, parts: &PartTaxonomy, script: &SeedScript) -> Self {
        Self {
            makes: catalog.makes.len(),
            years: catalog.years.len(),
            models: catalog.models.len(),
            engines: catalog.engines.len(),
            cars: catalog.cars.len(),
            part_categories: parts.categories().len(),
            part_subcategories: parts.subcategory_count(),
            statements: script.len(),
        }
    }
}

/// Renders the seed script for the configured inputs without writing it.
///
/// # Errors
///
/// Propagates load failures and [`SeedError::InvalidYear`].
pub fn render(config: &SeedConfig) -> Result<(SeedScript, SeedReport)> {
    let vehicles = load_vehicle_taxonomy(&config.vehicles_path)?;
    let catalog = VehicleCatalog::from_taxonomy(&vehicles)?;
    let parts = load_part_taxonomy(&config.parts_path)?;

    let script = SeedScript::render(&catalog, &parts);
    let report = SeedReport::new(&catalog, &parts, &script);
    Ok((script, report))
}

/// Runs the full pipeline and overwrites the configured output file.
///
/// The script is rendered completely before the output is opened, so a bad
/// input leaves any existing output untouched.
///
/// # Errors
///
/// Returns the load and parse errors of [`render`], or
/// [`SeedError::WriteOutput`] if the output cannot be written.
pub fn generate(config: &SeedConfig) -> Result<SeedReport> {
    let (script, report) = render(config)?;
    write_script(&script, &config.output_path)?;

    info!(
        output = %config.output_path.display(),
        makes = report.makes,
        years = report.years,
        models = report.models,
        engines = report.engines,
        cars = report.cars,
        part_categories = report.part_categories,
        part_subcategories = report.part_subcategories,
        "Wrote seed SQL"
    );
    Ok(report)
}

fn write_script(script: &SeedScript, path: &Path) -> Result<()> {
    let write_error = |source| SeedError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    script.write_to(BufWriter::new(file)).map_err(write_error)
}
