//! Reading the taxonomy documents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SeedError};
use crate::types::{PartTaxonomy, VehicleTaxonomy};

/// Path reported for documents parsed from memory.
const MEMORY_SOURCE: &str = "<memory>";

/// Loads the vehicle taxonomy (`make-year-model.json`) from disk.
///
/// # Errors
///
/// Returns [`SeedError::MissingInput`] if the file does not exist,
/// [`SeedError::ReadInput`] for any other I/O failure, and
/// [`SeedError::MalformedInput`] if the content is not the expected shape.
pub fn load_vehicle_taxonomy(path: impl AsRef<Path>) -> Result<VehicleTaxonomy> {
    let path = path.as_ref();
    let taxonomy: VehicleTaxonomy = load_json(path)?;
    debug!(path = %path.display(), makes = taxonomy.make_count(), "Loaded vehicle taxonomy");
    Ok(taxonomy)
}

/// Loads the parts taxonomy (`part.json`) from disk.
///
/// # Errors
///
/// Same classification as [`load_vehicle_taxonomy`].
pub fn load_part_taxonomy(path: impl AsRef<Path>) -> Result<PartTaxonomy> {
    let path = path.as_ref();
    let taxonomy: PartTaxonomy = load_json(path)?;
    debug!(
        path = %path.display(),
        categories = taxonomy.categories().len(),
        subcategories = taxonomy.subcategory_count(),
        "Loaded part taxonomy"
    );
    Ok(taxonomy)
}

/// Parses a vehicle taxonomy from JSON text.
///
/// # Examples
///
/// ```
/// use parts_seed_core::parse_vehicle_taxonomy;
///
/// let taxonomy = parse_vehicle_taxonomy(r#"{"Ford": {"2020": {"F150": ["V6"]}}}"#).unwrap();
/// assert_eq!(taxonomy.make_count(), 1);
/// assert!(parse_vehicle_taxonomy("not json").is_err());
/// ```
pub fn parse_vehicle_taxonomy(json: &str) -> Result<VehicleTaxonomy> {
    parse_json(json)
}

/// Parses a parts taxonomy from JSON text, keeping category order.
pub fn parse_part_taxonomy(json: &str) -> Result<PartTaxonomy> {
    parse_json(json)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SeedError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => SeedError::ReadInput {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_str(&content).map_err(|source| SeedError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| SeedError::MalformedInput {
        path: PathBuf::from(MEMORY_SOURCE),
        source,
    })
}
