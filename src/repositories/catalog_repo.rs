use rusqlite::OptionalExtension;

use crate::db::{unit_of_work, DbPool};
use crate::error::Result;
use crate::models::{FromSqliteRow, Workout, WorkoutPlan, WorkoutSession};

/// Read-only navigation over workouts, plans and sessions. Rows in these
/// tables are only ever followed by foreign key; nothing here writes.
#[derive(Clone)]
pub struct CatalogRepository {
    pool: DbPool,
}

impl CatalogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_workout(&self, id: i64) -> Result<Option<Workout>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM workouts WHERE id = ?")?;
            let workout = stmt.query_row([id], Workout::from_row).optional()?;
            Ok(workout)
        })
        .await
    }

    pub async fn find_plan(&self, id: i64) -> Result<Option<WorkoutPlan>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM workout_plans WHERE id = ?")?;
            let plan = stmt.query_row([id], WorkoutPlan::from_row).optional()?;
            Ok(plan)
        })
        .await
    }

    pub async fn find_plans(&self, workout_id: i64) -> Result<Vec<WorkoutPlan>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt =
                tx.prepare("SELECT * FROM workout_plans WHERE workout_id = ? ORDER BY id")?;
            let plans = stmt
                .query_map([workout_id], WorkoutPlan::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(plans)
        })
        .await
    }

    pub async fn find_sessions_for_plan(&self, plan_id: i64) -> Result<Vec<WorkoutSession>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare(
                "SELECT * FROM workout_sessions WHERE plan_id = ? ORDER BY completed_at DESC, id DESC",
            )?;
            let sessions = stmt
                .query_map([plan_id], WorkoutSession::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sessions)
        })
        .await
    }
}
