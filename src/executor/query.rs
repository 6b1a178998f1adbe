use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::parser::ast::Command;
use crate::result::QueryResult;

pub struct QueryExecutor;

impl Executor for QueryExecutor {
    fn name(&self) -> &'static str {
        "SELECT"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::Select(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::Select(select) = cmd else {
            unreachable!();
        };

        let result = ctx
            .session
            .select(&select.table_name, &select.projection, select.filter.as_ref())?;
        let summary = format!("{} row(s)", result.row_count());
        Ok(result.with_message(summary))
    }
}
