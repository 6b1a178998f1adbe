use super::{ExecutionContext, Executor};
use crate::core::Result;
use crate::parser::ast::Command;
use crate::result::QueryResult;

pub struct UpdateExecutor;

impl Executor for UpdateExecutor {
    fn name(&self) -> &'static str {
        "UPDATE"
    }

    fn can_handle(&self, cmd: &Command) -> bool {
        matches!(cmd, Command::Update(_))
    }

    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        let Command::Update(update) = cmd else {
            unreachable!();
        };

        let matched = ctx
            .session
            .update(&update.table_name, &update.assignments, &update.filter)?;

        if matched > 0 {
            Ok(QueryResult::message(format!(
                "{} row(s) updated successfully in {}.",
                matched, update.table_name
            )))
        } else {
            Ok(QueryResult::message(format!(
                "No rows matched the condition in {}.",
                update.table_name
            )))
        }
    }
}
