//! SQL statement rendering for the seed script.
//!
//! Every statement uses `INSERT OR IGNORE`, so the script can be replayed
//! against a database that already holds some or all of the rows. Foreign
//! keys are resolved at insert time with sub-selects on the natural key
//! instead of tracking generated ids.
//!
//! # Statement order
//!
//! 1. `Make`, `Year`, `Model`, `Engine` (each sorted)
//! 2. `Car` (sorted by make, year, model, engine)
//! 3. `PartCategory` (document order)
//! 4. `PartSubCategory` (document order)

use std::io::{self, Write};

use crate::catalog::VehicleCatalog;
use crate::types::{Car, PartTaxonomy};

/// Quotes a string as a SQL literal, doubling embedded single quotes.
///
/// # Examples
///
/// ```
/// use parts_seed_core::quote_literal;
///
/// assert_eq!(quote_literal("Ford"), "'Ford'");
/// assert_eq!(quote_literal("O'Reilly"), "'O''Reilly'");
/// ```
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn insert_make(name: &str) -> String {
    format!(
        "INSERT OR IGNORE INTO Make (name) VALUES ({});",
        quote_literal(name)
    )
}

pub fn insert_year(year: i64) -> String {
    format!("INSERT OR IGNORE INTO Year (year) VALUES ({year});")
}

pub fn insert_model(name: &str) -> String {
    format!(
        "INSERT OR IGNORE INTO Model (name) VALUES ({});",
        quote_literal(name)
    )
}

pub fn insert_engine(name: &str) -> String {
    format!(
        "INSERT OR IGNORE INTO Engine (name) VALUES ({});",
        quote_literal(name)
    )
}

/// Renders a `Car` insert whose four foreign keys are sub-selects.
pub fn insert_car(car: &Car) -> String {
    format!(
        "INSERT OR IGNORE INTO Car (make_id, year_id, model_id, engine_id) VALUES \
         ((SELECT id FROM Make WHERE name={make}), \
         (SELECT id FROM Year WHERE year={year}), \
         (SELECT id FROM Model WHERE name={model}), \
         (SELECT id FROM Engine WHERE name={engine}));",
        make = quote_literal(&car.make),
        year = car.year,
        model = quote_literal(&car.model),
        engine = quote_literal(&car.engine),
    )
}

pub fn insert_part_category(name: &str) -> String {
    format!(
        "INSERT OR IGNORE INTO PartCategory (name) VALUES ({});",
        quote_literal(name)
    )
}

/// Renders a `PartSubCategory` insert that looks up its parent by name.
pub fn insert_part_subcategory(category: &str, name: &str) -> String {
    format!(
        "INSERT OR IGNORE INTO PartSubCategory (category_id, name) VALUES \
         ((SELECT id FROM PartCategory WHERE name={}), {});",
        quote_literal(category),
        quote_literal(name)
    )
}

/// An ordered list of seed statements, one per output line.
///
/// # Examples
///
/// ```
/// use parts_seed_core::{PartTaxonomy, SeedScript, VehicleCatalog, VehicleTaxonomy};
///
/// let vehicles: VehicleTaxonomy =
///     serde_json::from_str(r#"{"Ford": {"2020": {"F150": ["V6"]}}}"#).unwrap();
/// let parts: PartTaxonomy = serde_json::from_str(r#"{"Engine": ["Pistons"]}"#).unwrap();
///
/// let catalog = VehicleCatalog::from_taxonomy(&vehicles).unwrap();
/// let script = SeedScript::render(&catalog, &parts);
/// assert_eq!(script.len(), 7);
/// assert!(script.to_sql().ends_with(";\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedScript {
    statements: Vec<String>,
}

impl SeedScript {
    /// Renders the full script for a vehicle catalog and a parts taxonomy.
    pub fn render(catalog: &VehicleCatalog, parts: &PartTaxonomy) -> Self {
        let mut script = Self::default();

        script.statements.extend(catalog.makes.iter().map(|m| insert_make(m)));
        script.statements.extend(catalog.years.iter().map(|&y| insert_year(y)));
        script.statements.extend(catalog.models.iter().map(|m| insert_model(m)));
        script.statements.extend(catalog.engines.iter().map(|e| insert_engine(e)));
        script.statements.extend(catalog.cars.iter().map(insert_car));

        script.statements.extend(
            parts
                .categories()
                .iter()
                .map(|c| insert_part_category(&c.name)),
        );
        script.statements.extend(
            parts
                .pairs()
                .map(|(category, sub)| insert_part_subcategory(category, sub)),
        );

        script
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Joins the statements into script text, one per line.
    pub fn to_sql(&self) -> String {
        let mut sql = String::with_capacity(self.statements.iter().map(|s| s.len() + 1).sum());
        for statement in &self.statements {
            sql.push_str(statement);
            sql.push('\n');
        }
        sql
    }

    /// Writes the script text to `writer`, one statement per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for statement in &self.statements {
            writeln!(writer, "{statement}")?;
        }
        writer.flush()
    }
}
