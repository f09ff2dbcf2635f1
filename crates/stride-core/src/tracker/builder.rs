//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    catalog::PlanCatalog,
    db::Database,
    error::{Result, TrackerError},
};

const APP_PREFIX: &str = "stride";
const DATABASE_FILE: &str = "stride.db";
const CATALOG_FILE: &str = "catalog.json";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    catalog: Option<PlanCatalog>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a catalog file to load plans from.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/stride/catalog.json` is used when
    /// it exists, otherwise the built-in catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog, bypassing file lookup.
    pub fn with_catalog(mut self, catalog: PlanCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created or the catalog file cannot be read.
    /// Returns `TrackerError::Database` if database initialization fails.
    /// Returns `TrackerError::InvalidInput` if the catalog is malformed.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => PlanCatalog::from_path(path)?,
            (None, None) => Self::default_catalog()?,
        };

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!(
            "Tracker ready with {} plans at {}",
            catalog.len(),
            db_path.display()
        );

        Ok(Tracker::new(db_path, Arc::new(catalog)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(DATABASE_FILE)
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }

    /// Loads the user catalog from the XDG config directory if present,
    /// otherwise the built-in catalog.
    fn default_catalog() -> Result<PlanCatalog> {
        match xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CATALOG_FILE) {
            Some(path) => {
                debug!("Loading catalog from {}", path.display());
                PlanCatalog::from_path(path)
            }
            None => PlanCatalog::builtin(),
        }
    }
}
