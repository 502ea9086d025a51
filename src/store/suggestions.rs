//! Customer suggestion statements

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::StoreResult;
use crate::models::{CustomerSuggestion, NewSuggestion};

fn from_row(row: &Row<'_>) -> rusqlite::Result<CustomerSuggestion> {
    Ok(CustomerSuggestion {
        id: row.get(0)?,
        flavor_name: row.get(1)?,
        allergies: row.get(2)?,
        submitted_date: row.get(3)?,
    })
}

/// Every suggestion, in storage order
pub fn list(conn: &Connection) -> StoreResult<Vec<CustomerSuggestion>> {
    let mut stmt = conn.prepare(
        "SELECT id, flavor_name, allergies, submitted_date FROM customer_suggestions",
    )?;
    let rows = stmt.query_map([], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Record a suggestion stamped with `submitted_date`
pub fn insert(
    conn: &Connection,
    suggestion: &NewSuggestion,
    submitted_date: DateTime<Utc>,
) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO customer_suggestions (flavor_name, allergies, submitted_date) \
         VALUES (?1, ?2, ?3)",
        params![suggestion.flavor_name, suggestion.allergies, submitted_date],
    )?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::migrate;
    use chrono::TimeZone;

    #[test]
    fn test_insert_then_list_keeps_timestamp() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();

        let input = NewSuggestion {
            flavor_name: "Rose Caramel".to_string(),
            allergies: "nuts".to_string(),
        };
        let id = insert(&conn, &input, at).unwrap();

        let all = list(&conn).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].flavor_name, "Rose Caramel");
        assert_eq!(all[0].allergies, "nuts");
        assert_eq!(all[0].submitted_date, at);
    }
}
