use crate::core::Row;

/// Outcome of one command: tabular rows, a status message, or both empty.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    pub message: Option<String>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            message: None,
        }
    }

    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            message: None,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Self::empty()
        }
    }

    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as a boxed, left-aligned text table. Each column is as wide as
    /// its longest value or header.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if !self.columns.is_empty() {
            let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
            for row in &self.rows {
                for (i, value) in row.iter().enumerate() {
                    widths[i] = widths[i].max(value.to_string().chars().count());
                }
            }

            let separator = format!(
                "+{}+",
                widths
                    .iter()
                    .map(|w| "-".repeat(w + 2))
                    .collect::<Vec<_>>()
                    .join("+")
            );

            let line = |cells: Vec<String>| {
                let padded: Vec<String> = cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| format!(" {:width$} ", cell, width = widths[i]))
                    .collect();
                format!("|{}|", padded.join("|"))
            };

            out.push_str(&separator);
            out.push('\n');
            out.push_str(&line(self.columns.clone()));
            out.push('\n');
            out.push_str(&separator);
            out.push('\n');
            for row in &self.rows {
                out.push_str(&line(row.iter().map(|v| v.to_string()).collect()));
                out.push('\n');
            }
            out.push_str(&separator);
            out.push('\n');
        }

        if let Some(message) = &self.message {
            out.push_str(message);
            out.push('\n');
        }

        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_render_aligns_columns() {
        let result = QueryResult::new(
            vec!["id".into(), "name".into()],
            vec![
                vec![Value::Integer(1), "Alice".into()],
                vec![Value::Integer(10), "Bo".into()],
            ],
        );

        let expected = "\
+----+-------+
| id | name  |
+----+-------+
| 1  | Alice |
| 10 | Bo    |
+----+-------+
";
        assert_eq!(result.render(), expected);
    }

    #[test]
    fn test_render_message_only() {
        let result = QueryResult::message("Database shop created.");
        assert_eq!(result.render(), "Database shop created.\n");
        assert!(result.is_empty());
    }
}
