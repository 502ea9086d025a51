//! Ingredient statements

use rusqlite::{params, Connection, Row};

use super::{StoreError, StoreResult};
use crate::models::{Ingredient, NewIngredient};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
    Ok(Ingredient {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        unit: row.get(3)?,
        allergen: row.get(4)?,
    })
}

/// Every ingredient, in storage order
pub fn list(conn: &Connection) -> StoreResult<Vec<Ingredient>> {
    let mut stmt = conn.prepare("SELECT id, name, quantity, unit, allergen FROM ingredients")?;
    let rows = stmt.query_map([], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Insert an ingredient, returning its assigned id
pub fn insert(conn: &Connection, ingredient: &NewIngredient) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO ingredients (name, quantity, unit, allergen) VALUES (?1, ?2, ?3, ?4)",
        params![
            ingredient.name,
            ingredient.quantity,
            ingredient.unit,
            ingredient.allergen
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the stock quantity of one ingredient.
///
/// Last writer wins; there is no version check.
pub fn update_quantity(conn: &Connection, id: i64, quantity: f64) -> StoreResult<()> {
    let changed = conn.execute(
        "UPDATE ingredients SET quantity = ?1 WHERE id = ?2",
        params![quantity, id],
    )?;

    if changed == 0 {
        return Err(StoreError::NotFound {
            entity: "Ingredient",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::migrate;

    fn fresh() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn
    }

    fn cocoa() -> NewIngredient {
        NewIngredient {
            name: "Cocoa Powder".to_string(),
            quantity: 100.0,
            unit: "kg".to_string(),
            allergen: false,
        }
    }

    #[test]
    fn test_insert_keeps_exact_quantity() {
        let conn = fresh();
        let mut input = cocoa();
        input.quantity = 0.125;
        insert(&conn, &input).unwrap();

        assert_eq!(list(&conn).unwrap()[0].quantity, 0.125);
    }

    #[test]
    fn test_duplicate_name_is_constraint() {
        let conn = fresh();
        insert(&conn, &cocoa()).unwrap();

        assert!(insert(&conn, &cocoa()).unwrap_err().is_constraint());
        assert_eq!(list(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_negative_quantity_rejected_by_storage() {
        let conn = fresh();
        let mut input = cocoa();
        input.quantity = -5.0;

        assert!(insert(&conn, &input).unwrap_err().is_constraint());
        assert!(list(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_update_changes_only_quantity() {
        let conn = fresh();
        let id = insert(&conn, &cocoa()).unwrap();

        update_quantity(&conn, id, 42.0).unwrap();

        let row = &list(&conn).unwrap()[0];
        assert_eq!(row.quantity, 42.0);
        assert_eq!(row.name, "Cocoa Powder");
        assert_eq!(row.unit, "kg");
        assert!(!row.allergen);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let conn = fresh();
        insert(&conn, &cocoa()).unwrap();

        let err = update_quantity(&conn, 999, 10.0).unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(list(&conn).unwrap()[0].quantity, 100.0);
    }
}
