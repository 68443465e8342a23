use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

/// A stored account. `password_hash` is a PHC string and never leaves the
/// server; see `schemas::UserOut` for the outward shape.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            email: row.get("email")?,
            password_hash: row.get("password_hash")?,
            full_name: row.get("full_name")?,
            created_at: row.get("created_at")?,
        })
    }
}
