use super::{DbError, Result, Value};
use serde::{Deserialize, Serialize};

pub type Row = Vec<Value>;

/// Declared type tags that switch filters to numeric comparison.
const NUMERIC_TYPES: [&str; 2] = ["int", "float"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub primary: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn is_numeric(&self) -> bool {
        NUMERIC_TYPES
            .iter()
            .any(|t| self.data_type.eq_ignore_ascii_case(t))
    }
}

/// Result of an idempotent create: a second create is a notice, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
}

/// Equality condition `column = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Parse a raw `column = value` clause. The value is trimmed and one
    /// layer of matching quotes is removed.
    pub fn parse(clause: &str) -> Result<Self> {
        let parts: Vec<&str> = clause.split('=').collect();
        if parts.len() != 2 {
            return Err(DbError::InvalidFilterSyntax(clause.trim().to_string()));
        }

        let column = parts[0].trim();
        if column.is_empty() || column.contains(char::is_whitespace) {
            return Err(DbError::InvalidFilterSyntax(clause.trim().to_string()));
        }

        Ok(Self::new(column, unquote(parts[1])))
    }
}

/// Columns requested by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Columns(Vec<String>),
}

impl Projection {
    /// `*` (or an empty list) selects every column; otherwise a comma
    /// separated list of names.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Self::All;
        }
        Self::Columns(
            raw.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        )
    }
}

/// Trim and strip one layer of matching single or double quotes.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['\'', '"'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_type_tags() {
        assert!(ColumnDefinition::new("id", "int").is_numeric());
        assert!(ColumnDefinition::new("price", "FLOAT").is_numeric());
        assert!(!ColumnDefinition::new("name", "text").is_numeric());
        assert!(!ColumnDefinition::new("n", "integer").is_numeric());
    }

    #[test]
    fn test_column_json_shape() {
        let col = ColumnDefinition::new("id", "int").primary_key();
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(json, r#"{"name":"id","type":"int","primary":true}"#);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("id = 1").unwrap(), Filter::new("id", "1"));
        assert_eq!(
            Filter::parse(" name='Alice' ").unwrap(),
            Filter::new("name", "Alice")
        );
        assert!(matches!(
            Filter::parse("id == 1"),
            Err(DbError::InvalidFilterSyntax(_))
        ));
        assert!(matches!(
            Filter::parse("id 1"),
            Err(DbError::InvalidFilterSyntax(_))
        ));
        assert!(matches!(
            Filter::parse(" = 1"),
            Err(DbError::InvalidFilterSyntax(_))
        ));
    }

    #[test]
    fn test_projection_parse() {
        assert_eq!(Projection::parse("*"), Projection::All);
        assert_eq!(Projection::parse(""), Projection::All);
        assert_eq!(
            Projection::parse("id, name"),
            Projection::Columns(vec!["id".into(), "name".into()])
        );
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote(" 'Bob' "), "Bob");
        assert_eq!(unquote("\"Bob\""), "Bob");
        assert_eq!(unquote("'Bob\""), "'Bob\"");
        assert_eq!(unquote("'"), "'");
    }
}
