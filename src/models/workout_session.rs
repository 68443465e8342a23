use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

/// One completed run of a plan by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub completed_at: DateTime<Utc>,
}

impl FromSqliteRow for WorkoutSession {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            plan_id: row.get("plan_id")?,
            completed_at: row.get("completed_at")?,
        })
    }
}
