use super::ExecutionContext;
use crate::core::{DbError, Result};
use crate::parser::ast::Command;
use crate::result::QueryResult;

pub trait Executor {
    /// Name for logs
    fn name(&self) -> &'static str;

    fn can_handle(&self, cmd: &Command) -> bool;
    fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult>;
}

/// Routes each command to the first registered executor that handles it.
pub struct ExecutorPipeline {
    executors: Vec<Box<dyn Executor>>,
}

impl ExecutorPipeline {
    pub fn new() -> Self {
        Self {
            executors: Vec::new(),
        }
    }

    /// Pipeline with an executor for every shell command except `EXIT`,
    /// which the caller's loop handles.
    pub fn with_default_executors() -> Self {
        use super::ddl::{CreateTableExecutor, DatabaseExecutor, DeleteTableExecutor};
        use super::delete::DeleteExecutor;
        use super::dml::InsertExecutor;
        use super::query::QueryExecutor;
        use super::update::UpdateExecutor;

        let mut pipeline = Self::new();
        pipeline.register(Box::new(DatabaseExecutor));
        pipeline.register(Box::new(CreateTableExecutor));
        pipeline.register(Box::new(DeleteTableExecutor));
        pipeline.register(Box::new(InsertExecutor));
        pipeline.register(Box::new(QueryExecutor));
        pipeline.register(Box::new(UpdateExecutor));
        pipeline.register(Box::new(DeleteExecutor));
        pipeline
    }

    pub fn register(&mut self, executor: Box<dyn Executor>) {
        self.executors.push(executor);
    }

    pub fn execute(&self, cmd: &Command, ctx: &mut ExecutionContext<'_>) -> Result<QueryResult> {
        for executor in &self.executors {
            if executor.can_handle(cmd) {
                tracing::debug!(executor = executor.name(), "dispatching command");
                return executor.execute(cmd, ctx);
            }
        }

        Err(DbError::ParseError(format!("No executor found for {:?}", cmd)))
    }
}

impl Default for ExecutorPipeline {
    fn default() -> Self {
        Self::new()
    }
}
