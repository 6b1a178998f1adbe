use super::TableStore;
use crate::config::EngineConfig;
use crate::core::{DbError, Outcome, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Database manager: maps database names to directories under the root.
///
/// A database exists exactly when its directory exists; there is no other
/// metadata.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: EngineConfig,
}

impl Catalog {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn database_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.config.root.join(name))
    }

    pub fn database_exists(&self, name: &str) -> Result<bool> {
        Ok(self.database_path(name)?.is_dir())
    }

    pub fn create_database(&self, name: &str) -> Result<Outcome> {
        let path = self.database_path(name)?;
        if path.is_dir() {
            return Ok(Outcome::AlreadyExists);
        }

        fs::create_dir_all(&path).map_err(|e| {
            DbError::IoError(format!("Failed to create database '{}': {}", name, e))
        })?;
        info!(database = name, "created database");
        Ok(Outcome::Created)
    }

    pub fn drop_database(&self, name: &str) -> Result<()> {
        let path = self.database_path(name)?;
        if !path.is_dir() {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }

        fs::remove_dir_all(&path).map_err(|e| {
            DbError::IoError(format!("Failed to drop database '{}': {}", name, e))
        })?;
        info!(database = name, "dropped database");
        Ok(())
    }

    /// Table store for an existing database.
    pub fn table_store(&self, database: &str) -> Result<TableStore> {
        let path = self.database_path(database)?;
        if !path.is_dir() {
            return Err(DbError::DatabaseNotFound(database.to_string()));
        }
        Ok(TableStore::new(path, &self.config.extension, self.config.pretty))
    }
}

/// Database and table names become path components, so they must stay a
/// single plain component.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
        || name.contains("..")
        || name.trim() != name;

    if invalid {
        return Err(DbError::InvalidName(name.to_string()));
    }
    Ok(())
}
