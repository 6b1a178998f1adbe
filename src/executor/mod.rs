pub mod context;
pub mod executor;
pub mod ddl;
pub mod dml;
pub mod query;
pub mod update;
pub mod delete;

pub use context::ExecutionContext;
pub use executor::{Executor, ExecutorPipeline};
