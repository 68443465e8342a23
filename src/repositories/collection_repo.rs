use rusqlite::OptionalExtension;

use crate::db::{unit_of_work, DbPool};
use crate::error::Result;
use crate::models::{FromSqliteRow, Workout, WorkoutCollection};
use crate::schemas::WorkoutCollectionCreate;

#[derive(Clone)]
pub struct CollectionRepository {
    pool: DbPool,
}

impl CollectionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<WorkoutCollection>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM workout_collections WHERE id = ?")?;
            let collection = stmt
                .query_row([id], WorkoutCollection::from_row)
                .optional()?;
            Ok(collection)
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<WorkoutCollection>> {
        unit_of_work(&self.pool, |tx| {
            let mut stmt = tx.prepare("SELECT * FROM workout_collections ORDER BY id")?;
            let collections = stmt
                .query_map([], WorkoutCollection::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(collections)
        })
        .await
    }

    pub async fn create(&self, input: &WorkoutCollectionCreate) -> Result<WorkoutCollection> {
        let name = input.name.clone();
        let description = input.description.clone();

        let collection = unit_of_work(&self.pool, move |tx| {
            tx.execute(
                "INSERT INTO workout_collections (name, description) VALUES (?, ?)",
                rusqlite::params![name, description],
            )?;
            let id = tx.last_insert_rowid();
            let collection = tx.query_row(
                "SELECT * FROM workout_collections WHERE id = ?",
                [id],
                WorkoutCollection::from_row,
            )?;
            Ok(collection)
        })
        .await?;

        tracing::info!("Created workout collection {} ({})", collection.id, collection.name);
        Ok(collection)
    }

    /// Workouts that reference the collection, in insertion order.
    pub async fn find_workouts(&self, collection_id: i64) -> Result<Vec<Workout>> {
        unit_of_work(&self.pool, move |tx| {
            let mut stmt = tx.prepare("SELECT * FROM workouts WHERE collection_id = ? ORDER BY id")?;
            let workouts = stmt
                .query_map([collection_id], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
    }
}
