//! Idempotent SQL seed generation for the vehicle and parts taxonomies.
//!
//! This crate turns two JSON documents into a script of `INSERT OR IGNORE`
//! statements:
//!
//! - [`VehicleTaxonomy`] — `{ make: { year: { model: [engine, ...] } } }`,
//!   reduced into a deduplicated [`VehicleCatalog`] of makes, years, models,
//!   engines and [`Car`] tuples.
//! - [`PartTaxonomy`] — `{ category: [subcategory, ...] }`, kept in
//!   document order.
//!
//! [`SeedScript`] renders both into statements that resolve foreign keys
//! with sub-selects on names and years, so the script can be replayed
//! against a partially seeded database. [`generate`] runs the whole
//! pipeline from files on disk.
//!
//! # Example
//!
//! ```
//! use parts_seed_core::*;
//!
//! let vehicles = parse_vehicle_taxonomy(r#"{"Ford": {"2020": {"F150": ["V6"]}}}"#).unwrap();
//! let parts = parse_part_taxonomy(r#"{"Engine": ["Pistons", "Gaskets"]}"#).unwrap();
//!
//! let catalog = VehicleCatalog::from_taxonomy(&vehicles).unwrap();
//! let script = SeedScript::render(&catalog, &parts);
//!
//! assert_eq!(script.statements()[0], "INSERT OR IGNORE INTO Make (name) VALUES ('Ford');");
//! assert_eq!(script.len(), 8);
//! ```

mod catalog;
mod error;
mod generate;
mod load;
mod sql;
mod types;

pub use catalog::VehicleCatalog;
pub use error::{Result, SeedError};
pub use generate::{
    DEFAULT_OUTPUT_PATH, DEFAULT_PARTS_PATH, DEFAULT_VEHICLES_PATH, SeedConfig, SeedReport,
    generate, render,
};
pub use load::{load_part_taxonomy, load_vehicle_taxonomy, parse_part_taxonomy, parse_vehicle_taxonomy};
pub use sql::{
    SeedScript, insert_car, insert_engine, insert_make, insert_model, insert_part_category,
    insert_part_subcategory, insert_year, quote_literal,
};
pub use types::*;
