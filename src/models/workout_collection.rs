use rusqlite::Row;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutCollection {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl FromSqliteRow for WorkoutCollection {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
        })
    }
}
