//! Table file persistence: one JSON document per table.

use crate::core::{DbError, Result};
use crate::storage::table::Table;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads and writes the table files of one database directory.
pub struct TableStore {
    dir: PathBuf,
    extension: String,
    pretty: bool,
}

impl TableStore {
    pub fn new<P: AsRef<Path>>(dir: P, extension: &str, pretty: bool) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: extension.to_string(),
            pretty,
        }
    }

    pub fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.table_path(name).is_file()
    }

    pub fn load(&self, name: &str) -> Result<Table> {
        let path = self.table_path(name);
        if !path.is_file() {
            return Err(DbError::TableNotFound(name.to_string()));
        }

        let file = File::open(&path)
            .map_err(|e| DbError::IoError(format!("Failed to open table '{}': {}", name, e)))?;
        let table: Table =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| DbError::CorruptTable {
                table: name.to_string(),
                reason: e.to_string(),
            })?;
        table.validate(name)?;

        debug!(table = name, rows = table.row_count(), "loaded table");
        Ok(table)
    }

    /// Write the whole table to a temp file in the same directory, then
    /// rename it over the old file.
    pub fn save(&self, name: &str, table: &Table) -> Result<()> {
        let path = self.table_path(name);
        let mut temp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| DbError::IoError(format!("Failed to create temp file: {}", e)))?;

        {
            let mut writer = BufWriter::new(&mut temp);
            if self.pretty {
                serde_json::to_writer_pretty(&mut writer, table)?;
            } else {
                serde_json::to_writer(&mut writer, table)?;
            }
            writer
                .write_all(b"\n")
                .map_err(|e| DbError::IoError(format!("Failed to write table '{}': {}", name, e)))?;
            writer
                .flush()
                .map_err(|e| DbError::IoError(format!("Failed to flush table '{}': {}", name, e)))?;
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| DbError::IoError(format!("Failed to sync table '{}': {}", name, e)))?;
        temp.persist(&path).map_err(|e| {
            DbError::IoError(format!("Failed to replace table '{}': {}", name, e.error))
        })?;

        debug!(table = name, rows = table.row_count(), "saved table");
        Ok(())
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.table_path(name);
        if !path.is_file() {
            return Err(DbError::TableNotFound(name.to_string()));
        }
        fs::remove_file(&path)
            .map_err(|e| DbError::IoError(format!("Failed to delete table '{}': {}", name, e)))
    }

    /// Names of every table file in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            DbError::IoError(format!("Failed to read '{}': {}", self.dir.display(), e))
        })?;

        let mut tables = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| DbError::IoError(e.to_string()))?.path();
            let extension = path.extension().and_then(|e| e.to_str());
            if !path.is_file() || extension != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                tables.push(stem.to_string());
            }
        }
        tables.sort();
        Ok(tables)
    }
}
