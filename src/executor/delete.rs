use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::facade::DeleteOutcome;
use crate::parser::ast::{Command, DeleteStmt};
use crate::result::QueryResult;

pub struct DeleteExecutor;

impl Executor for DeleteExecutor {
    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::Delete(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::Delete(delete) = cmd else {
            unreachable!();
        };

        self.execute_delete(delete, ctx)
    }
}

impl DeleteExecutor {
    fn execute_delete(
        &self,
        delete: &DeleteStmt,
        ctx: &mut ExecutionContext<'_>,
    ) -> Result<QueryResult> {
        let outcome = ctx
            .session
            .delete_rows(&delete.table_name, delete.filter.as_ref())?;

        let message = match (outcome, &delete.filter) {
            (DeleteOutcome::Aborted, _) => "Deletion aborted.".to_string(),
            (DeleteOutcome::Deleted(_), None) => {
                format!("All rows deleted from {}.", delete.table_name)
            }
            (DeleteOutcome::Deleted(0), Some(_)) => "No rows matched the condition.".to_string(),
            (DeleteOutcome::Deleted(n), Some(_)) => {
                format!("{} row(s) deleted from {}.", n, delete.table_name)
            }
        };
        Ok(QueryResult::message(message))
    }
}
