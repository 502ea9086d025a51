//! Sample rows inserted on first bootstrap.
//!
//! Each table is seeded only while it is empty, so re-running against a
//! populated store inserts nothing and never touches existing rows.

use rusqlite::{params, Connection};

use super::StoreResult;
use crate::models::Season;

const SAMPLE_FLAVORS: &[(&str, Season)] = &[
    ("Dark Chocolate", Season::AllSeason),
    ("Hazelnut Chocolate", Season::Autumn),
    ("Apple Blend", Season::Winter),
];

const SAMPLE_INGREDIENTS: &[(&str, f64, &str, bool)] = &[
    ("Cocoa Powder", 100.0, "kg", false),
    ("Milk Powder", 50.0, "kg", true),
    ("Walnuts", 25.0, "kg", true),
    ("Salt", 1.0, "kg", false),
];

/// Rows inserted per table by one seed pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub flavors: usize,
    pub ingredients: usize,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.flavors + self.ingredients
    }
}

/// Seed every empty table with its sample rows
pub fn seed(conn: &Connection) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    if is_empty(conn, "flavors")? {
        let mut stmt =
            conn.prepare("INSERT INTO flavors (name, season, available) VALUES (?1, ?2, 1)")?;
        for (name, season) in SAMPLE_FLAVORS {
            report.flavors += stmt.execute(params![name, season])?;
        }
    }

    if is_empty(conn, "ingredients")? {
        let mut stmt = conn.prepare(
            "INSERT INTO ingredients (name, quantity, unit, allergen) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (name, quantity, unit, allergen) in SAMPLE_INGREDIENTS {
            report.ingredients += stmt.execute(params![name, quantity, unit, allergen])?;
        }
    }

    Ok(report)
}

fn is_empty(conn: &Connection, table: &str) -> StoreResult<bool> {
    // Table names come from the constants above, never from input
    let sql = format!("SELECT NOT EXISTS (SELECT 1 FROM {})", table);
    let empty: bool = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(empty)
}
