//! Plan catalog: immutable lookup of plan definitions.
//!
//! A catalog is loaded once, validated, and then only read. The built-in
//! catalog ships embedded in the binary; a JSON file with the same shape can
//! replace it:
//!
//! ```json
//! {
//!   "plans": [
//!     {
//!       "id": "couch-to-5k",
//!       "title": "Couch to 5K",
//!       "total_weeks": 9,
//!       "stages": [{ "week": 1, "title": "First steps", "description": "..." }]
//!     }
//!   ]
//! }
//! ```

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::Plan,
};

#[cfg(test)]
mod tests;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// On-disk shape of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    plans: Vec<Plan>,
}

/// A validated, read-only collection of plans.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Creates a catalog from plan definitions after validating them.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if any plan is malformed or two
    /// plans share an ID.
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        let mut seen = HashSet::new();
        for plan in &plans {
            validate_plan(plan)?;
            if !seen.insert(plan.id.as_str()) {
                return Err(TrackerError::invalid_input("id")
                    .with_reason(format!("duplicate plan id '{}'", plan.id)));
            }
        }

        Ok(Self { plans })
    }

    /// Returns the catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.plans)
    }

    /// Reads and validates a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Looks up a plan by ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if no plan has this ID.
    pub fn get_plan(&self, id: &str) -> Result<&Plan> {
        self.plans
            .iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| TrackerError::PlanNotFound { id: id.to_string() })
    }

    /// Iterates plans in catalog order.
    pub fn plans(&self) -> std::slice::Iter<'_, Plan> {
        self.plans.iter()
    }

    /// Number of plans in the catalog.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Returns true if the catalog has no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn validate_plan(plan: &Plan) -> Result<()> {
    if plan.id.trim().is_empty() {
        return Err(TrackerError::invalid_input("id").with_reason("plan id must not be empty"));
    }

    if plan.total_weeks == 0 {
        return Err(TrackerError::invalid_input("total_weeks")
            .with_reason(format!("plan '{}' must have at least one week", plan.id)));
    }

    let mut weeks = HashSet::new();
    for stage in &plan.stages {
        if !plan.contains_week(stage.week) {
            return Err(TrackerError::invalid_input("stages").with_reason(format!(
                "plan '{}' has a stage for week {} outside 1..={}",
                plan.id, stage.week, plan.total_weeks
            )));
        }
        if !weeks.insert(stage.week) {
            return Err(TrackerError::invalid_input("stages").with_reason(format!(
                "plan '{}' has more than one stage for week {}",
                plan.id, stage.week
            )));
        }
    }

    Ok(())
}
