//! Taxonomy type definitions.
//!
//! [`VehicleTaxonomy`] and [`PartTaxonomy`] mirror the two JSON input
//! documents. [`Car`] is the association row derived from one
//! make/year/model/engine path through the vehicle document.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Model name to the engines offered for it.
pub type ModelEngines = BTreeMap<String, Vec<String>>;

/// Year token (as written in the document) to the models of that year.
pub type YearModels = BTreeMap<String, ModelEngines>;

/// Vehicle taxonomy document: `{ make: { year: { model: [engine, ...] } } }`.
///
/// Year keys stay as raw strings here; they are parsed into integers when
/// the document is reduced into a [`VehicleCatalog`](crate::VehicleCatalog).
///
/// # Examples
///
/// ```
/// use parts_seed_core::VehicleTaxonomy;
///
/// let taxonomy: VehicleTaxonomy =
///     serde_json::from_str(r#"{"Ford": {"2020": {"F150": ["V6"]}}}"#).unwrap();
/// assert_eq!(taxonomy.makes["Ford"]["2020"]["F150"], vec!["V6".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VehicleTaxonomy {
    pub makes: BTreeMap<String, YearModels>,
}

impl VehicleTaxonomy {
    /// Number of top-level makes in the document.
    pub fn make_count(&self) -> usize {
        self.makes.len()
    }
}

/// A part category and its subcategories, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCategory {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl PartCategory {
    pub fn new(name: impl Into<String>, subcategories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            subcategories,
        }
    }
}

/// Parts taxonomy document: `{ category: [subcategory, ...] }`.
///
/// Categories keep the order they appear in the document. A repeated
/// category key replaces the earlier subcategory list but keeps the
/// category's first position.
///
/// # Examples
///
/// ```
/// use parts_seed_core::PartTaxonomy;
///
/// let parts: PartTaxonomy =
///     serde_json::from_str(r#"{"Engine": ["Pistons"], "Brakes": ["Pads", "Rotors"]}"#).unwrap();
/// let names: Vec<&str> = parts.categories().iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Engine", "Brakes"]);
/// assert_eq!(parts.subcategory_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartTaxonomy {
    categories: Vec<PartCategory>,
}

impl PartTaxonomy {
    /// Adds a category, replacing the subcategories of an existing one
    /// with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, subcategories: Vec<String>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.subcategories = subcategories,
            None => self.categories.push(PartCategory::new(name, subcategories)),
        }
    }

    pub fn categories(&self) -> &[PartCategory] {
        &self.categories
    }

    /// Iterates `(category, subcategory)` pairs in document order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|category| {
            category
                .subcategories
                .iter()
                .map(move |sub| (category.name.as_str(), sub.as_str()))
        })
    }

    pub fn subcategory_count(&self) -> usize {
        self.categories.iter().map(|c| c.subcategories.len()).sum()
    }
}

impl<'de> Deserialize<'de> for PartTaxonomy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PartTaxonomyVisitor;

        impl<'de> Visitor<'de> for PartTaxonomyVisitor {
            type Value = PartTaxonomy;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of part category names to lists of subcategory names")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut taxonomy = PartTaxonomy::default();
                while let Some((name, subcategories)) = map.next_entry::<String, Vec<String>>()? {
                    taxonomy.insert(name, subcategories);
                }
                Ok(taxonomy)
            }
        }

        deserializer.deserialize_map(PartTaxonomyVisitor)
    }
}

/// One vehicle configuration: a make, year, model and engine together.
///
/// Ordering is by `(make, year, model, engine)`, which is the order car
/// inserts are emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Car {
    pub make: String,
    pub year: i64,
    pub model: String,
    pub engine: String,
}

impl Car {
    pub fn new(
        make: impl Into<String>,
        year: i64,
        model: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            year,
            model: model.into(),
            engine: engine.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_taxonomy_keeps_document_order() {
        let parts: PartTaxonomy =
            serde_json::from_str(r#"{"Suspension": ["Shocks"], "Brakes": [], "Audio": ["Radio"]}"#)
                .unwrap();
        let names: Vec<&str> = parts.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Suspension", "Brakes", "Audio"]);
    }

    #[test]
    fn test_part_taxonomy_duplicate_key_replaces_in_place() {
        let parts: PartTaxonomy =
            serde_json::from_str(r#"{"Engine": ["Old"], "Body": ["Doors"], "Engine": ["New"]}"#)
                .unwrap();
        assert_eq!(
            parts.categories(),
            &[
                PartCategory::new("Engine", vec!["New".into()]),
                PartCategory::new("Body", vec!["Doors".into()]),
            ]
        );
    }

    #[test]
    fn test_part_taxonomy_pairs() {
        let parts: PartTaxonomy =
            serde_json::from_str(r#"{"Engine": ["Pistons", "Gaskets"], "Body": ["Doors"]}"#)
                .unwrap();
        let pairs: Vec<_> = parts.pairs().collect();
        assert_eq!(
            pairs,
            [
                ("Engine", "Pistons"),
                ("Engine", "Gaskets"),
                ("Body", "Doors")
            ]
        );
    }

    #[test]
    fn test_part_taxonomy_rejects_non_map() {
        assert!(serde_json::from_str::<PartTaxonomy>(r#"["Engine"]"#).is_err());
        assert!(serde_json::from_str::<PartTaxonomy>(r#"{"Engine": "Pistons"}"#).is_err());
    }

    #[test]
    fn test_vehicle_taxonomy_rejects_wrong_shape() {
        assert!(serde_json::from_str::<VehicleTaxonomy>(r#"{"Ford": ["2020"]}"#).is_err());
        assert!(
            serde_json::from_str::<VehicleTaxonomy>(r#"{"Ford": {"2020": {"F150": "V6"}}}"#)
                .is_err()
        );
    }

    #[test]
    fn test_car_ordering() {
        let mut cars = vec![
            Car::new("Ford", 2021, "F150", "V6"),
            Car::new("Chevy", 2022, "Silverado", "V8"),
            Car::new("Ford", 2020, "Mustang", "V8"),
            Car::new("Ford", 2020, "F150", "V8"),
        ];
        cars.sort();
        assert_eq!(cars[0].make, "Chevy");
        assert_eq!((cars[1].year, cars[1].model.as_str()), (2020, "F150"));
        assert_eq!(cars[2].model, "Mustang");
        assert_eq!(cars[3].year, 2021);
    }
}
