use super::{ExecutionContext, Executor};
use crate::core::{Outcome, Result, Value};
use crate::facade::DropOutcome;
use crate::parser::ast::{Command, CreateTableStmt};
use crate::result::QueryResult;
use crate::storage::parse_column_spec;

/// CREATE DATABASE, USE, SHOW TABLES and DROP DATABASE.
pub struct DatabaseExecutor;

impl Executor for DatabaseExecutor {
    fn name(&self) -> &'static str {
        "DATABASE"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(
            cmd,
            Command::CreateDatabase(_)
                | Command::UseDatabase(_)
                | Command::ShowTables
                | Command::DropDatabase(_)
        )
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        match cmd {
            Command::CreateDatabase(name) => match ctx.session.create_database(name)? {
                Outcome::Created => Ok(QueryResult::message(format!("Database {} created.", name))),
                Outcome::AlreadyExists => Ok(QueryResult::message(format!(
                    "Database {} already exists.",
                    name
                ))),
            },
            Command::UseDatabase(name) => {
                ctx.session.use_database(name)?;
                Ok(QueryResult::message(format!("Using database {}.", name)))
            }
            Command::ShowTables => {
                let tables = ctx.session.list_tables()?;
                if tables.is_empty() {
                    return Ok(QueryResult::message("No tables found in the current database."));
                }
                let rows = tables.into_iter().map(|t| vec![Value::Text(t)]).collect();
                Ok(QueryResult::new(vec!["Tables".to_string()], rows))
            }
            Command::DropDatabase(name) => match ctx.session.drop_database(name)? {
                DropOutcome::Dropped => Ok(QueryResult::message(format!(
                    "Database {} deleted successfully.",
                    name
                ))),
                DropOutcome::Aborted => Ok(QueryResult::message("Database deletion aborted.")),
            },
            _ => unreachable!(),
        }
    }
}

pub struct CreateTableExecutor;

impl Executor for CreateTableExecutor {
    fn name(&self) -> &'static str {
        "CREATE_TABLE"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::CreateTable(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::CreateTable(create) = cmd else {
            unreachable!();
        };

        self.execute_create_table(create, ctx)
    }
}

impl CreateTableExecutor {
    fn execute_create_table(
        &self,
        create: &CreateTableStmt,
        ctx: &mut ExecutionContext<'_>,
    ) -> Result<QueryResult> {
        match ctx.session.create_table(&create.table_name, &create.columns)? {
            Outcome::Created => {
                let primary = create
                    .columns
                    .iter()
                    .filter_map(|spec| parse_column_spec(spec).ok())
                    .find(|column| column.primary)
                    .map(|column| column.name)
                    .unwrap_or_default();
                Ok(QueryResult::message(format!(
                    "Table {} created with primary key {}.",
                    create.table_name, primary
                )))
            }
            Outcome::AlreadyExists => Ok(QueryResult::message(format!(
                "Table {} already exists.",
                create.table_name
            ))),
        }
    }
}

pub struct DeleteTableExecutor;

impl Executor for DeleteTableExecutor {
    fn name(&self) -> &'static str {
        "DELETE_TABLE"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::DeleteTable(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::DeleteTable(name) = cmd else {
            unreachable!();
        };

        ctx.session.delete_table(name)?;
        Ok(QueryResult::message(format!("Table {} deleted successfully.", name)))
    }
}
