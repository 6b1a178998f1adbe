pub mod confirm;
pub mod database;

pub use confirm::{AutoConfirm, Confirm, StdinConfirm};
pub use database::{DeleteOutcome, DropOutcome, Session};
