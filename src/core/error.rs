use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("No database selected. Use 'USE db_name' first")]
    NoActiveDatabase,

    #[error("Database '{0}' not found")]
    DatabaseNotFound(String),

    #[error("Table '{0}' not found")]
    TableNotFound(String),

    #[error("Invalid name '{0}'")]
    InvalidName(String),

    #[error("Invalid column definition '{0}'")]
    MalformedColumnSpec(String),

    #[error("Only one primary key is allowed, found: {}", .0.join(", "))]
    MultiplePrimaryKeys(Vec<String>),

    #[error("A table must have one primary key")]
    MissingPrimaryKey,

    #[error("Value count {found} does not match column count {expected}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Duplicate value '{value}' for primary key '{column}'")]
    DuplicateKey { column: String, value: String },

    #[error("Unknown column(s): {}", .0.join(", "))]
    UnknownColumn(Vec<String>),

    #[error("Invalid value '{value}' for column '{column}', expected type {expected}")]
    TypeMismatch {
        column: String,
        expected: String,
        value: String,
    },

    #[error("Invalid WHERE clause '{0}'. Use 'column = value'")]
    InvalidFilterSyntax(String),

    #[error("Table '{table}' is corrupt: {reason}")]
    CorruptTable { table: String, reason: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(vec![name.into()])
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
