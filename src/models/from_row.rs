use rusqlite::Row;

/// Maps a `SELECT *` row of the entity's table.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
