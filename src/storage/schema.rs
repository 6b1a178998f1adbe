use super::Table;
use crate::core::{ColumnDefinition, DbError, Result};

/// Parse one raw column spec: `name type` or `name type PRIMARY`.
pub fn parse_column_spec(spec: &str) -> Result<ColumnDefinition> {
    let parts: Vec<&str> = spec.split_whitespace().collect();

    let column = match parts.as_slice() {
        [name, data_type] => ColumnDefinition::new(*name, *data_type),
        [name, data_type, marker] if marker.eq_ignore_ascii_case("primary") => {
            ColumnDefinition::new(*name, *data_type).primary_key()
        }
        _ => return Err(DbError::MalformedColumnSpec(spec.trim().to_string())),
    };

    if !is_valid_type_tag(&column.data_type) {
        return Err(DbError::MalformedColumnSpec(spec.trim().to_string()));
    }

    Ok(column)
}

fn is_valid_type_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build the empty table described by `specs`. Column names must be
/// unique, ignoring case.
pub fn build_table<S: AsRef<str>>(specs: &[S]) -> Result<Table> {
    let mut columns: Vec<ColumnDefinition> = Vec::with_capacity(specs.len());
    for spec in specs {
        let column = parse_column_spec(spec.as_ref())?;
        if columns
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&column.name))
        {
            return Err(DbError::MalformedColumnSpec(spec.as_ref().trim().to_string()));
        }
        columns.push(column);
    }
    Table::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_primary() {
        let col = parse_column_spec("name text").unwrap();
        assert_eq!(col, ColumnDefinition::new("name", "text"));

        let col = parse_column_spec("  id int Primary ").unwrap();
        assert_eq!(col, ColumnDefinition::new("id", "int").primary_key());
    }

    #[test]
    fn test_malformed_specs() {
        for spec in ["id", "id int key", "id int primary extra", "", "id in-t"] {
            assert!(
                matches!(parse_column_spec(spec), Err(DbError::MalformedColumnSpec(_))),
                "spec {:?} should be rejected",
                spec
            );
        }
    }

    #[test]
    fn test_build_table() {
        let table = build_table(&["id int PRIMARY", "name text"]).unwrap();
        assert_eq!(table.primary_key(), "id");
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row_count(), 0);

        assert!(matches!(
            build_table(&["id int", "name text"]),
            Err(DbError::MissingPrimaryKey)
        ));
        assert!(matches!(
            build_table(&["id int primary", "name text PRIMARY"]),
            Err(DbError::MultiplePrimaryKeys(_))
        ));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        assert!(matches!(
            build_table(&["id int PRIMARY", "id text"]),
            Err(DbError::MalformedColumnSpec(_))
        ));
        assert!(matches!(
            build_table(&["id int PRIMARY", "Name text", "name text"]),
            Err(DbError::MalformedColumnSpec(_))
        ));
    }
}
