use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::parser::ast::Command;
use crate::result::QueryResult;

pub struct InsertExecutor;

impl Executor for InsertExecutor {
    fn name(&self) -> &'static str {
        "INSERT"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::Insert(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::Insert(insert) = cmd else {
            unreachable!();
        };

        ctx.session.insert(&insert.table_name, insert.values.clone())?;
        Ok(QueryResult::message(format!("Data inserted into {}.", insert.table_name)))
    }
}
