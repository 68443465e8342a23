use rusqlite::Row;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub workout_id: i64,
}

impl FromSqliteRow for WorkoutPlan {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            workout_id: row.get("workout_id")?,
        })
    }
}
