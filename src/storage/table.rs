use crate::core::{ColumnDefinition, DbError, Filter, Projection, Result, Row, Value};
use crate::result::QueryResult;
use serde::{Deserialize, Serialize};

/// One table: a fixed column list plus rows in insertion order.
///
/// Every operation here is purely in memory. Callers load a table, run one
/// operation, and write the whole table back; an operation that returns an
/// error leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<ColumnDefinition>,
    rows: Vec<Row>,
    primary_key: String,
}

impl Table {
    /// Build an empty table. Exactly one column must be primary.
    pub fn new(columns: Vec<ColumnDefinition>) -> Result<Self> {
        let primaries: Vec<String> = columns
            .iter()
            .filter(|c| c.primary)
            .map(|c| c.name.clone())
            .collect();

        let primary_key = match primaries.len() {
            0 => return Err(DbError::MissingPrimaryKey),
            1 => primaries[0].clone(),
            _ => return Err(DbError::MultiplePrimaryKeys(primaries)),
        };

        Ok(Self {
            columns,
            rows: Vec::new(),
            primary_key,
        })
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Exact, case-sensitive lookup.
    pub fn find_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Case-insensitive lookup after trimming.
    pub fn resolve_column(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn primary_key_index(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.primary && c.name == self.primary_key)
    }

    /// Check the structural invariants of a table read from disk.
    pub fn validate(&self, table_name: &str) -> Result<()> {
        let corrupt = |reason: String| DbError::CorruptTable {
            table: table_name.to_string(),
            reason,
        };

        let primaries = self.columns.iter().filter(|c| c.primary).count();
        if primaries != 1 || self.primary_key_index().is_none() {
            return Err(corrupt(format!(
                "primary key '{}' does not name the single primary column",
                self.primary_key
            )));
        }

        if let Some((pos, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.columns.len())
        {
            return Err(corrupt(format!(
                "row {} has {} values, expected {}",
                pos,
                row.len(),
                self.columns.len()
            )));
        }

        Ok(())
    }

    pub fn insert(&mut self, values: Row) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(DbError::ArityMismatch {
                expected: self.columns.len(),
                found: values.len(),
            });
        }

        let pk_idx = self.primary_key_index().ok_or_else(|| DbError::CorruptTable {
            table: String::new(),
            reason: format!("primary key '{}' not found in columns", self.primary_key),
        })?;

        // Uniqueness is on the string form, so 1 and "1" collide.
        let key = values[pk_idx].to_string();
        if self.rows.iter().any(|row| row[pk_idx].to_string() == key) {
            return Err(DbError::DuplicateKey {
                column: self.primary_key.clone(),
                value: key,
            });
        }

        self.rows.push(values);
        Ok(())
    }

    /// Projection plus optional equality filter.
    ///
    /// Column names are case-insensitive here. On `int`/`float` columns the
    /// filter compares numerically; elsewhere it compares trimmed,
    /// lower-cased string forms.
    pub fn select(&self, projection: &Projection, filter: Option<&Filter>) -> Result<QueryResult> {
        let indices: Vec<usize> = match projection {
            Projection::All => (0..self.columns.len()).collect(),
            Projection::Columns(names) => {
                let mut found = Vec::with_capacity(names.len());
                let mut missing = Vec::new();
                for name in names {
                    match self.resolve_column(name) {
                        Some(idx) => found.push(idx),
                        None => missing.push(name.trim().to_string()),
                    }
                }
                if !missing.is_empty() {
                    return Err(DbError::UnknownColumn(missing));
                }
                found
            }
        };

        let matcher = match filter {
            Some(filter) => Some(self.select_matcher(filter)?),
            None => None,
        };

        let rows = self
            .rows
            .iter()
            .filter(|row| matcher.as_ref().is_none_or(|m| m.matches(row)))
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        let columns = indices.iter().map(|&i| self.columns[i].name.clone()).collect();
        Ok(QueryResult::new(columns, rows))
    }

    fn select_matcher(&self, filter: &Filter) -> Result<SelectMatcher> {
        let idx = self
            .resolve_column(&filter.column)
            .ok_or_else(|| DbError::unknown_column(filter.column.trim()))?;
        let column = &self.columns[idx];

        if column.is_numeric() {
            let literal = filter
                .value
                .trim()
                .parse::<f64>()
                .map_err(|_| DbError::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.data_type.clone(),
                    value: filter.value.clone(),
                })?;
            Ok(SelectMatcher::Numeric { idx, literal })
        } else {
            Ok(SelectMatcher::Text {
                idx,
                literal: filter.value.trim().to_lowercase(),
            })
        }
    }

    /// Overwrite assigned columns on every row whose filter column's string
    /// form equals the literal exactly. Assignments naming unknown columns
    /// are skipped. Returns the number of matching rows.
    pub fn update(&mut self, assignments: &[(String, String)], filter: &Filter) -> Result<usize> {
        let filter_idx = self
            .find_column_index(&filter.column)
            .ok_or_else(|| DbError::unknown_column(&filter.column))?;

        let targets: Vec<(usize, &str)> = assignments
            .iter()
            .filter_map(|(name, value)| {
                self.find_column_index(name).map(|idx| (idx, value.as_str()))
            })
            .collect();

        let mut matched = 0;
        for row in self.rows.iter_mut() {
            if row[filter_idx].to_string() != filter.value {
                continue;
            }
            for (idx, value) in &targets {
                row[*idx] = Value::Text((*value).to_string());
            }
            matched += 1;
        }

        Ok(matched)
    }

    /// Remove rows whose filter column's string form equals the literal.
    /// Returns the number removed.
    pub fn delete_matching(&mut self, filter: &Filter) -> Result<usize> {
        let idx = self
            .find_column_index(&filter.column)
            .ok_or_else(|| DbError::unknown_column(&filter.column))?;

        let before = self.rows.len();
        self.rows.retain(|row| row[idx].to_string() != filter.value);
        Ok(before - self.rows.len())
    }

    /// Drop every row, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.rows.len();
        self.rows.clear();
        count
    }
}

enum SelectMatcher {
    Numeric { idx: usize, literal: f64 },
    Text { idx: usize, literal: String },
}

impl SelectMatcher {
    fn matches(&self, row: &Row) -> bool {
        match self {
            Self::Numeric { idx, literal } => row[*idx].as_f64() == Some(*literal),
            Self::Text { idx, literal } => row[*idx].to_string().trim().to_lowercase() == *literal,
        }
    }
}
