//! ShelfDB shell
//!
//! ```bash
//! # Interactive session over ./data
//! shelfdb --root data
//!
//! # One command and exit
//! shelfdb --root data -c "SHOW TABLES"
//!
//! # Run a script, auto-confirming destructive commands
//! shelfdb --root data --yes -f setup.sql
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use shelfdb::{AutoConfirm, Command, Confirm, EngineConfig, Shell, StdinConfirm};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "shelfdb",
    version,
    about = "SQL-like shell over a directory-per-database record store"
)]
struct Args {
    /// Directory holding one sub-directory per database
    #[arg(short, long, default_value = ".", env = "SHELFDB_ROOT")]
    root: PathBuf,

    /// Database to select on startup
    #[arg(short, long)]
    database: Option<String>,

    /// Execute a single command and exit
    #[arg(short, long)]
    command: Option<String>,

    /// Execute commands from a file (one per line) and exit
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Answer "yes" to every confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Write compact JSON table files instead of indented ones
    #[arg(long)]
    compact: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::new(&args.root).pretty(!args.compact);
    let confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AutoConfirm::new(true))
    } else {
        Box::new(StdinConfirm)
    };
    let mut shell = Shell::with_confirm(config, confirm)
        .with_context(|| format!("failed to open store at '{}'", args.root.display()))?;
    info!(root = %args.root.display(), "store opened");

    if let Some(database) = &args.database {
        shell
            .session_mut()
            .use_database(database)
            .with_context(|| format!("failed to select database '{}'", database))?;
    }

    if let Some(command) = &args.command {
        run_line(&mut shell, command);
        return Ok(());
    }

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        for line in script.lines() {
            if !run_line(&mut shell, line) {
                break;
            }
        }
        return Ok(());
    }

    repl(&mut shell)
}

fn repl(shell: &mut Shell) -> Result<()> {
    println!("Welcome to ShelfDB. Type EXIT to quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }

        if !run_line(shell, &line) {
            break;
        }
    }

    println!("Exiting. Goodbye!");
    Ok(())
}

/// Run one line, printing its result or error. Returns false on EXIT.
fn run_line(shell: &mut Shell, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with("--") {
        return true;
    }

    let command = match shell.parse(line) {
        Ok(command) => command,
        Err(e) => {
            println!("Error: {}", e);
            return true;
        }
    };
    if command == Command::Exit {
        return false;
    }

    debug!(?command, "executing");
    match shell.run(&command) {
        Ok(result) => result.print(),
        Err(e) => println!("Error: {}", e),
    }
    true
}
