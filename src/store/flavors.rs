//! Flavor statements

use rusqlite::{params, Connection, Row};

use super::StoreResult;
use crate::models::{Flavor, NewFlavor};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Flavor> {
    Ok(Flavor {
        id: row.get(0)?,
        name: row.get(1)?,
        season: row.get(2)?,
        available: row.get(3)?,
    })
}

/// Every flavor, in storage order
pub fn list(conn: &Connection) -> StoreResult<Vec<Flavor>> {
    let mut stmt = conn.prepare("SELECT id, name, season, available FROM flavors")?;
    let rows = stmt.query_map([], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Insert a flavor, returning its assigned id
pub fn insert(conn: &Connection, flavor: &NewFlavor) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO flavors (name, season, available) VALUES (?1, ?2, ?3)",
        params![flavor.name, flavor.season, flavor.available],
    )?;
    Ok(conn.last_insert_rowid())
}
