//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TrackerError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before modification tracking lack updated_at
        let has_updated_at_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('progress') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect progress table")?;

        if !has_updated_at_column {
            self.connection
                .execute("ALTER TABLE progress ADD COLUMN updated_at TEXT", [])
                .map_err(|e| {
                    TrackerError::database("Failed to add updated_at column to progress table")
                        .with_source(e)
                })?;
        }

        Ok(())
    }
}
