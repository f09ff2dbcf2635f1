//! Progress record queries.

use std::collections::{BTreeSet, HashMap};

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, StoreResultExt},
    models::ProgressRecord,
    store::ProgressStore,
};

const SELECT_PROGRESS_SQL: &str =
    "SELECT plan_id, started_at, current_week, completed_weeks FROM progress WHERE plan_id = ?1";
const SELECT_ALL_PROGRESS_SQL: &str =
    "SELECT plan_id, started_at, current_week, completed_weeks FROM progress ORDER BY plan_id";
const UPSERT_PROGRESS_SQL: &str = "INSERT INTO progress (plan_id, started_at, current_week, completed_weeks, updated_at) VALUES (?1, ?2, ?3, ?4, ?5) \
     ON CONFLICT(plan_id) DO UPDATE SET started_at = excluded.started_at, current_week = excluded.current_week, \
     completed_weeks = excluded.completed_weeks, updated_at = excluded.updated_at";
const DELETE_PROGRESS_SQL: &str = "DELETE FROM progress WHERE plan_id = ?1";

/// Maps a `progress` row to its plan ID and record.
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<(String, ProgressRecord)> {
    let plan_id: String = row.get(0)?;

    let started_at = row
        .get::<_, Option<String>>(1)?
        .map(|s| s.parse::<Timestamp>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    let current_week = u32::try_from(row.get::<_, i64>(2)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))?;

    let completed_str: String = row.get(3)?;
    let completed_weeks = serde_json::from_str::<BTreeSet<u32>>(&completed_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok((
        plan_id,
        ProgressRecord {
            started_at,
            current_week,
            completed_weeks,
        },
    ))
}

impl super::Database {
    /// Retrieves the stored progress record for a plan.
    pub fn get_progress(&self, plan_id: &str) -> Result<Option<ProgressRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROGRESS_SQL)
            .db_context("Failed to prepare query")?;

        let record = stmt
            .query_row(params![plan_id], row_to_record)
            .optional()
            .db_context("Failed to query progress")?;

        Ok(record.map(|(_, record)| record))
    }

    /// Retrieves every stored progress record keyed by plan ID.
    pub fn list_progress(&self) -> Result<HashMap<String, ProgressRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PROGRESS_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map([], row_to_record)
            .db_context("Failed to query progress")?
            .collect::<rusqlite::Result<HashMap<_, _>>>()
            .db_context("Failed to read progress rows")?;

        Ok(records)
    }

    /// Inserts or replaces the progress record for a plan.
    pub fn upsert_progress(&mut self, plan_id: &str, record: &ProgressRecord) -> Result<()> {
        let completed_weeks = serde_json::to_string(&record.completed_weeks)?;
        let started_at = record.started_at.map(|ts| ts.to_string());
        let now_str = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_PROGRESS_SQL,
            params![
                plan_id,
                started_at,
                i64::from(record.current_week),
                completed_weeks,
                now_str
            ],
        )
        .db_context("Failed to save progress")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Deletes the progress record for a plan. Missing rows are not an error.
    pub fn delete_progress(&mut self, plan_id: &str) -> Result<()> {
        self.connection
            .execute(DELETE_PROGRESS_SQL, params![plan_id])
            .db_context("Failed to delete progress")?;
        Ok(())
    }
}

impl ProgressStore for super::Database {
    fn load(&self, plan_id: &str) -> Result<Option<ProgressRecord>> {
        self.get_progress(plan_id).store_context("load")
    }

    fn save(&mut self, plan_id: &str, record: &ProgressRecord) -> Result<()> {
        self.upsert_progress(plan_id, record).store_context("save")
    }

    fn remove(&mut self, plan_id: &str) -> Result<()> {
        self.delete_progress(plan_id).store_context("remove")
    }

    fn load_all(&self) -> Result<HashMap<String, ProgressRecord>> {
        self.list_progress().store_context("load_all")
    }
}
