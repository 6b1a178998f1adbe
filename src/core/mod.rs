pub mod error;
pub mod types;
pub mod value;

pub use error::{DbError, Result};
pub use types::{ColumnDefinition, Filter, Outcome, Projection, Row, unquote};
pub use value::Value;
