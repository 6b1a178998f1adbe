pub mod catalog;
pub mod persistence;
pub mod schema;
pub mod table;

pub use catalog::{Catalog, validate_name};
pub use persistence::TableStore;
pub use schema::{build_table, parse_column_spec};
pub use table::Table;
