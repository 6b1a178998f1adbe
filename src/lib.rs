// ============================================================================
// ShelfDB Library
// ============================================================================

pub mod config;
pub mod core;
pub mod executor;
pub mod facade;
pub mod parser;
pub mod result;
pub mod storage;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use core::{ColumnDefinition, DbError, Filter, Outcome, Projection, Result, Row, Value};
pub use facade::{AutoConfirm, Confirm, DeleteOutcome, DropOutcome, Session, StdinConfirm};
pub use parser::{Command, CommandParser};
pub use result::QueryResult;

use executor::{ExecutionContext, ExecutorPipeline};

// ============================================================================
// Command-line API
// ============================================================================

/// Text front end over a [`Session`]
///
/// Parses one command line at a time and runs it through the executor
/// pipeline.
///
/// # Examples
///
/// ```
/// use shelfdb::{AutoConfirm, EngineConfig, Shell};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let mut shell = Shell::with_confirm(
///     EngineConfig::new(dir.path()),
///     Box::new(AutoConfirm::new(true)),
/// )?;
///
/// shell.execute("CREATE DATABASE shop")?;
/// shell.execute("USE shop")?;
/// shell.execute("CREATE TABLE users (id int PRIMARY, name text)")?;
/// shell.execute("INSERT INTO users VALUES (1, 'Alice')")?;
///
/// let result = shell.execute("SELECT name FROM users WHERE id = 1")?;
/// assert_eq!(result.row_count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Shell {
    session: Session,
    parser: CommandParser,
    pipeline: ExecutorPipeline,
}

impl Shell {
    /// Shell whose destructive commands prompt on stdin
    pub fn open(config: EngineConfig) -> Result<Self> {
        Ok(Self::from_session(Session::open(config)?))
    }

    /// Shell with a custom confirmation gate
    pub fn with_confirm(config: EngineConfig, confirm: Box<dyn Confirm>) -> Result<Self> {
        Ok(Self::from_session(Session::with_confirm(config, confirm)?))
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            session,
            parser: CommandParser::new(),
            pipeline: ExecutorPipeline::with_default_executors(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        self.parser.parse(line)
    }

    /// Parse and run one command line. `EXIT` yields an empty result; the
    /// caller decides whether to stop.
    pub fn execute(&mut self, line: &str) -> Result<QueryResult> {
        let command = self.parser.parse(line)?;
        self.run(&command)
    }

    pub fn run(&mut self, command: &Command) -> Result<QueryResult> {
        if matches!(command, Command::Exit) {
            return Ok(QueryResult::empty());
        }
        let mut ctx = ExecutionContext::new(&mut self.session);
        self.pipeline.execute(command, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell(temp_dir: &TempDir) -> Shell {
        Shell::with_confirm(
            EngineConfig::new(temp_dir.path()),
            Box::new(AutoConfirm::new(true)),
        )
        .unwrap()
    }

    #[test]
    fn test_shell_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut shell = shell(&temp_dir);

        shell.execute("CREATE DATABASE shop").unwrap();
        shell.execute("USE shop").unwrap();
        shell
            .execute("CREATE TABLE users (id int PRIMARY, name text)")
            .unwrap();
        shell.execute("INSERT INTO users VALUES (1, 'Alice')").unwrap();

        let result = shell.execute("SELECT * FROM users").unwrap();
        assert_eq!(result.columns, vec!["id", "name"]);
        assert_eq!(result.rows, vec![vec![Value::Integer(1), Value::Text("Alice".into())]]);
    }

    #[test]
    fn test_shell_messages() {
        let temp_dir = TempDir::new().unwrap();
        let mut shell = shell(&temp_dir);

        let result = shell.execute("CREATE DATABASE shop").unwrap();
        assert_eq!(result.message.as_deref(), Some("Database shop created."));
        let result = shell.execute("CREATE DATABASE shop").unwrap();
        assert_eq!(result.message.as_deref(), Some("Database shop already exists."));

        shell.execute("USE shop").unwrap();
        let result = shell
            .execute("CREATE TABLE users (id int PRIMARY, name text)")
            .unwrap();
        assert_eq!(
            result.message.as_deref(),
            Some("Table users created with primary key id.")
        );

        let result = shell.execute("SHOW TABLES").unwrap();
        assert_eq!(result.rows, vec![vec![Value::Text("users".into())]]);
    }

    #[test]
    fn test_exit_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let mut shell = shell(&temp_dir);
        let result = shell.execute("exit;").unwrap();
        assert!(result.is_empty());
        assert!(result.message.is_none());
    }
}
