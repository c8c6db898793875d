//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, StoreError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created before the current schema.
    fn apply_migrations(&self) -> Result<()> {
        // Early databases stored kv rows without a bookkeeping timestamp
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('kv') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            self.connection
                .execute(
                    "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .map_err(|e| {
                    StoreError::database_error("Failed to add updated_at column to kv table", e)
                })?;
        }

        Ok(())
    }
}
