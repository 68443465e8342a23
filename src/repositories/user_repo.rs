use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::db::{unit_of_work, DbPool};
use crate::error::Result;
use crate::models::{FromSqliteRow, User, WorkoutSession};
use crate::schemas::UserCreate;

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Absent is `Ok(None)`, not an error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM users WHERE email = ?")?;
            let user = stmt.query_row([&email], User::from_row).optional()?;
            Ok(user)
        })
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM users WHERE id = ?")?;
            let user = stmt.query_row([id], User::from_row).optional()?;
            Ok(user)
        })
        .await
    }

    /// Inserts a user with an already computed password hash. A duplicate
    /// email surfaces as `AppError::Integrity` from the store's constraint.
    pub async fn create(&self, input: &UserCreate, password_hash: &str) -> Result<User> {
        let email = input.email.clone();
        let full_name = input.full_name.clone();
        let password_hash = password_hash.to_string();
        let now = Utc::now();

        let user = unit_of_work(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO users (email, password_hash, full_name, created_at) VALUES (?, ?, ?, ?)",
                rusqlite::params![email, password_hash, full_name, now],
            )?;
            let id = tx.last_insert_rowid();
            let user = tx.query_row("SELECT * FROM users WHERE id = ?", [id], User::from_row)?;
            Ok(user)
        })
        .await?;

        tracing::info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Sessions the user completed, newest first.
    pub async fn find_sessions(&self, user_id: i64) -> Result<Vec<WorkoutSession>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare(
                "SELECT * FROM workout_sessions WHERE user_id = ? ORDER BY completed_at DESC, id DESC",
            )?;
            let sessions = stmt
                .query_map([user_id], WorkoutSession::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sessions)
        })
        .await
    }
}
