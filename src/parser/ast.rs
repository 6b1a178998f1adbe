use crate::core::{Filter, Projection, Row};

/// One parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateDatabase(String),
    UseDatabase(String),
    ShowTables,
    CreateTable(CreateTableStmt),
    Insert(InsertStmt),
    Select(SelectStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
    DeleteTable(String),
    DropDatabase(String),
    Exit,
}

/// CREATE TABLE statement. Column specs stay raw (`name type [PRIMARY]`);
/// the schema engine parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStmt {
    pub table_name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    pub table_name: String,
    pub values: Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStmt {
    pub table_name: String,
    pub projection: Projection,
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStmt {
    pub table_name: String,
    pub assignments: Vec<(String, String)>,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStmt {
    pub table_name: String,
    pub filter: Option<Filter>,
}
