use rusqlite::Row;

use super::FromSqliteRow;

/// A workout inside a collection. `collection_id` is nullable in the store,
/// so an orphaned workout is representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub collection_id: Option<i64>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            collection_id: row.get("collection_id")?,
        })
    }
}
