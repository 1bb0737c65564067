//! Deduplicated entity sets derived from a vehicle taxonomy.
//!
//! Makes, models and engines are global dictionaries: a model or engine
//! name shared by two makes is one row.

use std::collections::BTreeSet;

use crate::error::{Result, SeedError};
use crate::types::{Car, VehicleTaxonomy};

/// Every distinct entity and car tuple in a vehicle taxonomy.
///
/// All sets are ordered, so iteration yields the emission order directly:
/// names lexicographically, years numerically, cars by
/// `(make, year, model, engine)`.
///
/// # Examples
///
/// ```
/// use parts_seed_core::{VehicleCatalog, VehicleTaxonomy};
///
/// let taxonomy: VehicleTaxonomy = serde_json::from_str(
///     r#"{"Ford": {"2020": {"F150": ["V6", "V8"]}}, "Ram": {"2020": {"1500": ["V8"]}}}"#,
/// ).unwrap();
/// let catalog = VehicleCatalog::from_taxonomy(&taxonomy).unwrap();
/// assert_eq!(catalog.years.len(), 1);
/// assert_eq!(catalog.engines.len(), 2);
/// assert_eq!(catalog.cars.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleCatalog {
    pub makes: BTreeSet<String>,
    pub years: BTreeSet<i64>,
    pub models: BTreeSet<String>,
    pub engines: BTreeSet<String>,
    pub cars: BTreeSet<Car>,
}

impl VehicleCatalog {
    /// Walks the taxonomy and collects every entity it mentions.
    ///
    /// A make with no years, a year with no models, or a model with no
    /// engines still contributes its own name but produces no car.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidYear`] if a year key is not an integer.
    pub fn from_taxonomy(taxonomy: &VehicleTaxonomy) -> Result<Self> {
        let mut catalog = Self::default();

        for (make, years) in &taxonomy.makes {
            catalog.makes.insert(make.clone());

            for (year_token, models) in years {
                let year = parse_year(make, year_token)?;
                catalog.years.insert(year);

                for (model, engines) in models {
                    catalog.models.insert(model.clone());

                    for engine in engines {
                        catalog.engines.insert(engine.clone());
                        catalog
                            .cars
                            .insert(Car::new(make.as_str(), year, model.as_str(), engine.as_str()));
                    }
                }
            }
        }

        Ok(catalog)
    }
}

/// Parses a year key, ignoring surrounding whitespace.
fn parse_year(make: &str, token: &str) -> Result<i64> {
    token.trim().parse().map_err(|_| SeedError::InvalidYear {
        make: make.to_string(),
        year: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy(json: &str) -> VehicleTaxonomy {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_path() {
        let catalog =
            VehicleCatalog::from_taxonomy(&taxonomy(r#"{"Ford": {"2020": {"F150": ["V6"]}}}"#))
                .unwrap();
        assert_eq!(catalog.makes, BTreeSet::from(["Ford".to_string()]));
        assert_eq!(catalog.years, BTreeSet::from([2020]));
        assert_eq!(catalog.models, BTreeSet::from(["F150".to_string()]));
        assert_eq!(catalog.engines, BTreeSet::from(["V6".to_string()]));
        assert_eq!(
            catalog.cars,
            BTreeSet::from([Car::new("Ford", 2020, "F150", "V6")])
        );
    }

    #[test]
    fn test_shared_names_dedupe_across_makes() {
        let catalog = VehicleCatalog::from_taxonomy(&taxonomy(
            r#"{
                "Ford": {"2020": {"Transit": ["V6"]}, "2021": {"Transit": ["V6"]}},
                "Mercedes": {"2021": {"Transit": ["V6", "I4"]}}
            }"#,
        ))
        .unwrap();
        assert_eq!(catalog.makes.len(), 2);
        assert_eq!(catalog.years, BTreeSet::from([2020, 2021]));
        assert_eq!(catalog.models.len(), 1);
        assert_eq!(catalog.engines.len(), 2);
        assert_eq!(catalog.cars.len(), 4);
    }

    #[test]
    fn test_years_sort_numerically() {
        let catalog = VehicleCatalog::from_taxonomy(&taxonomy(
            r#"{"Ford": {"2020": {}, "999": {}, "1999": {}}}"#,
        ))
        .unwrap();
        let years: Vec<i64> = catalog.years.iter().copied().collect();
        assert_eq!(years, [999, 1999, 2020]);
    }

    #[test]
    fn test_year_whitespace_and_duplicates() {
        let catalog = VehicleCatalog::from_taxonomy(&taxonomy(
            r#"{"Ford": {" 2020": {"F150": ["V6"]}, "2020": {"F150": ["V6"]}}}"#,
        ))
        .unwrap();
        assert_eq!(catalog.years, BTreeSet::from([2020]));
        assert_eq!(catalog.cars.len(), 1);
    }

    #[test]
    fn test_empty_branches_produce_no_cars() {
        let catalog = VehicleCatalog::from_taxonomy(&taxonomy(
            r#"{"Ford": {}, "Ram": {"2020": {}}, "Kia": {"2021": {"Rio": []}}}"#,
        ))
        .unwrap();
        assert_eq!(catalog.makes.len(), 3);
        assert_eq!(catalog.years, BTreeSet::from([2020, 2021]));
        assert_eq!(catalog.models, BTreeSet::from(["Rio".to_string()]));
        assert!(catalog.engines.is_empty());
        assert!(catalog.cars.is_empty());
    }

    #[test]
    fn test_empty_taxonomy() {
        let catalog = VehicleCatalog::from_taxonomy(&VehicleTaxonomy::default()).unwrap();
        assert_eq!(catalog, VehicleCatalog::default());
    }

    #[test]
    fn test_year_wider_than_32_bits() {
        let catalog = VehicleCatalog::from_taxonomy(&taxonomy(
            r#"{"Ford": {"3000000000": {"F150": ["V6"]}}}"#,
        ))
        .unwrap();
        assert_eq!(catalog.years, BTreeSet::from([3_000_000_000]));
        assert_eq!(
            catalog.cars,
            BTreeSet::from([Car::new("Ford", 3_000_000_000, "F150", "V6")])
        );
    }

    #[test]
    fn test_invalid_year() {
        let err = VehicleCatalog::from_taxonomy(&taxonomy(r#"{"Ford": {"twenty": {}}}"#))
            .unwrap_err();
        match err {
            SeedError::InvalidYear { make, year } => {
                assert_eq!(make, "Ford");
                assert_eq!(year, "twenty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
