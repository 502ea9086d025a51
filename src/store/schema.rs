//! Table definitions.
//!
//! Tables:
//! - `flavors`: named products with a season tag
//! - `ingredients`: stocked raw materials, quantity mutable
//! - `customer_suggestions`: append-only customer requests

use rusqlite::Connection;

use super::StoreResult;

/// DDL for all tables. Every statement is create-if-absent.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS flavors (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
    season      TEXT NOT NULL
                CHECK (season IN ('Spring', 'Summer', 'Autumn', 'Winter', 'All-Season')),
    available   INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS ingredients (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
    quantity    REAL NOT NULL CHECK (quantity >= 0),
    unit        TEXT NOT NULL,
    allergen    INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS customer_suggestions (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    flavor_name     TEXT NOT NULL,
    allergies       TEXT NOT NULL DEFAULT '',
    submitted_date  TEXT NOT NULL
);
"#;

/// Ensure every table exists
pub fn migrate(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
