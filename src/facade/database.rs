use super::confirm::{Confirm, StdinConfirm};
use crate::config::EngineConfig;
use crate::core::{DbError, Filter, Outcome, Projection, Result, Row};
use crate::result::QueryResult;
use crate::storage::{Catalog, Table, TableStore, build_table, validate_name};
use std::fs;
use tracing::{info, warn};

/// What an unconditional or filtered row delete did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(usize),
    Aborted,
}

/// What a database drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    Aborted,
}

/// Explicit context for every engine operation: configuration, the active
/// database and the confirmation gate.
///
/// Table operations load the table file, mutate it in memory and write the
/// whole table back before returning. They all take `&mut self`, so one
/// session never has two operations on a table in flight.
pub struct Session {
    catalog: Catalog,
    active: Option<String>,
    confirm: Box<dyn Confirm>,
}

impl Session {
    /// Open a session over `config.root`, creating the root directory if
    /// needed. Destructive operations prompt on stdin.
    pub fn open(config: EngineConfig) -> Result<Self> {
        Self::with_confirm(config, Box::new(StdinConfirm))
    }

    pub fn with_confirm(config: EngineConfig, confirm: Box<dyn Confirm>) -> Result<Self> {
        config.validate().map_err(DbError::ParseError)?;
        fs::create_dir_all(&config.root).map_err(|e| {
            DbError::IoError(format!(
                "Failed to create root '{}': {}",
                config.root.display(),
                e
            ))
        })?;

        Ok(Self {
            catalog: Catalog::new(config),
            active: None,
            confirm,
        })
    }

    pub fn set_confirm(&mut self, confirm: Box<dyn Confirm>) {
        self.confirm = confirm;
    }

    pub fn config(&self) -> &EngineConfig {
        self.catalog.config()
    }

    pub fn active_database(&self) -> Option<&str> {
        self.active.as_deref()
    }

    // ========================================================================
    // Database management
    // ========================================================================

    pub fn create_database(&mut self, name: &str) -> Result<Outcome> {
        self.catalog.create_database(name)
    }

    pub fn use_database(&mut self, name: &str) -> Result<()> {
        if !self.catalog.database_exists(name)? {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn list_tables(&self) -> Result<Vec<String>> {
        self.active_store()?.list()
    }

    /// Remove a database and all of its tables after confirmation. Clears
    /// the active database if it was the one dropped.
    pub fn drop_database(&mut self, name: &str) -> Result<DropOutcome> {
        if !self.catalog.database_exists(name)? {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }

        let prompt = format!("Are you sure you want to delete the database {}?", name);
        if !self.confirm.confirm(&prompt) {
            warn!(database = name, "database drop aborted");
            return Ok(DropOutcome::Aborted);
        }

        self.catalog.drop_database(name)?;
        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
        Ok(DropOutcome::Dropped)
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Create an empty table. An existing table is left alone and reported
    /// as `Outcome::AlreadyExists`.
    pub fn create_table<S: AsRef<str>>(
        &mut self,
        name: &str,
        column_specs: &[S],
    ) -> Result<Outcome> {
        let store = self.active_store()?;
        validate_name(name)?;
        if store.exists(name) {
            return Ok(Outcome::AlreadyExists);
        }

        let table = build_table(column_specs)?;
        store.save(name, &table)?;
        info!(table = name, primary_key = table.primary_key(), "created table");
        Ok(Outcome::Created)
    }

    pub fn delete_table(&mut self, name: &str) -> Result<()> {
        let store = self.active_store()?;
        validate_name(name)?;
        store.remove(name)?;
        info!(table = name, "deleted table");
        Ok(())
    }

    pub fn insert(&mut self, table_name: &str, values: Row) -> Result<()> {
        let (store, mut table) = self.load(table_name)?;
        table.insert(values)?;
        store.save(table_name, &table)
    }

    pub fn select(
        &self,
        table_name: &str,
        projection: &Projection,
        filter: Option<&Filter>,
    ) -> Result<QueryResult> {
        let (_, table) = self.load(table_name)?;
        table.select(projection, filter)
    }

    /// Returns the number of rows matching `filter`.
    pub fn update(
        &mut self,
        table_name: &str,
        assignments: &[(String, String)],
        filter: &Filter,
    ) -> Result<usize> {
        let (store, mut table) = self.load(table_name)?;
        let matched = table.update(assignments, filter)?;
        store.save(table_name, &table)?;
        Ok(matched)
    }

    /// With a filter, removes the rows equal to it. Without one, asks for
    /// confirmation and then clears the table.
    pub fn delete_rows(
        &mut self,
        table_name: &str,
        filter: Option<&Filter>,
    ) -> Result<DeleteOutcome> {
        let (store, mut table) = self.load(table_name)?;

        let removed = match filter {
            Some(filter) => table.delete_matching(filter)?,
            None => {
                let prompt = format!(
                    "Are you sure you want to delete all rows from {}?",
                    table_name
                );
                if !self.confirm.confirm(&prompt) {
                    warn!(table = table_name, "delete of all rows aborted");
                    return Ok(DeleteOutcome::Aborted);
                }
                table.clear()
            }
        };

        store.save(table_name, &table)?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    fn active_store(&self) -> Result<TableStore> {
        let database = self.active.as_deref().ok_or(DbError::NoActiveDatabase)?;
        self.catalog.table_store(database)
    }

    fn load(&self, table_name: &str) -> Result<(TableStore, Table)> {
        let store = self.active_store()?;
        validate_name(table_name)?;
        let table = store.load(table_name)?;
        Ok((store, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;
    use crate::facade::AutoConfirm;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir, answer: bool) -> Session {
        let mut session = Session::with_confirm(
            EngineConfig::new(temp_dir.path()),
            Box::new(AutoConfirm::new(answer)),
        )
        .unwrap();
        session.create_database("shop").unwrap();
        session.use_database("shop").unwrap();
        session
            .create_table("users", &["id int PRIMARY", "name text"])
            .unwrap();
        session
    }

    #[test]
    fn test_table_operations_need_active_database() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = Session::with_confirm(
            EngineConfig::new(temp_dir.path()),
            Box::new(AutoConfirm::new(true)),
        )
        .unwrap();

        assert!(matches!(session.list_tables(), Err(DbError::NoActiveDatabase)));
        assert!(matches!(
            session.create_table("t", &["id int primary"]),
            Err(DbError::NoActiveDatabase)
        ));
        assert!(matches!(
            session.insert("t", vec![Value::Integer(1)]),
            Err(DbError::NoActiveDatabase)
        ));
    }

    #[test]
    fn test_failed_insert_does_not_touch_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir, true);
        session
            .insert("users", vec![Value::Integer(1), "Alice".into()])
            .unwrap();

        let path = temp_dir.path().join("shop").join("users.json");
        let before = fs::read_to_string(&path).unwrap();

        assert!(session.insert("users", vec![Value::Integer(1), "Bob".into()]).is_err());
        assert!(session.insert("users", vec![Value::Integer(2)]).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_declined_clear_keeps_rows() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir, false);
        session
            .insert("users", vec![Value::Integer(1), "Alice".into()])
            .unwrap();

        assert_eq!(session.delete_rows("users", None).unwrap(), DeleteOutcome::Aborted);
        let result = session.select("users", &Projection::All, None).unwrap();
        assert_eq!(result.row_count(), 1);
    }

    #[test]
    fn test_drop_active_database_clears_pointer() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir, true);

        assert_eq!(session.drop_database("shop").unwrap(), DropOutcome::Dropped);
        assert_eq!(session.active_database(), None);
        assert!(matches!(session.list_tables(), Err(DbError::NoActiveDatabase)));
    }

    #[test]
    fn test_declined_drop_keeps_database_active() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir, false);

        assert_eq!(session.drop_database("shop").unwrap(), DropOutcome::Aborted);
        assert_eq!(session.active_database(), Some("shop"));
        assert_eq!(session.list_tables().unwrap(), vec!["users"]);
    }

    #[test]
    fn test_rejects_path_like_table_names() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir, true);
        assert!(matches!(
            session.create_table("../escape", &["id int primary"]),
            Err(DbError::InvalidName(_))
        ));
    }
}
