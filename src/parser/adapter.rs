// ============================================================================
// src/parser/adapter.rs - text command -> Command
// ============================================================================

use crate::core::{DbError, Filter, Projection, Result, Value, unquote};
use crate::parser::ast::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CREATE_DATABASE: Regex = Regex::new(r"(?is)^create\s+database\s+(\S+)$").unwrap();
    static ref USE_DATABASE: Regex = Regex::new(r"(?is)^use\s+(\S+)$").unwrap();
    static ref SHOW_TABLES: Regex = Regex::new(r"(?is)^show\s+tables$").unwrap();
    static ref CREATE_TABLE: Regex =
        Regex::new(r"(?is)^create\s+table\s+([^\s(]+)\s*\((.*)\)$").unwrap();
    static ref INSERT: Regex =
        Regex::new(r"(?is)^insert\s+into\s+(\S+)\s+values\s*\((.*)\)$").unwrap();
    static ref SELECT: Regex =
        Regex::new(r"(?is)^select\s+(.*?)\s+from\s+(\S+)(?:\s+where\s+(.+))?$").unwrap();
    static ref UPDATE: Regex =
        Regex::new(r"(?is)^update\s+(\S+)\s+set\s+(.+?)\s+where\s+(.+)$").unwrap();
    static ref DELETE_ROWS: Regex =
        Regex::new(r"(?is)^delete\s+from\s+(\S+)(?:\s+where\s+(.+))?$").unwrap();
    static ref DELETE_TABLE: Regex = Regex::new(r"(?is)^delete\s+table\s+(\S+)$").unwrap();
    static ref DROP_DATABASE: Regex = Regex::new(r"(?is)^drop\s+database\s+(\S+)$").unwrap();
    static ref EXIT: Regex = Regex::new(r"(?i)^(exit|quit)$").unwrap();
}

/// Turns one command line into a [`Command`]. Verbs are case-insensitive
/// and a trailing `;` is ignored.
#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, input: &str) -> Result<Command> {
        let text = input.trim().trim_end_matches(';').trim();
        let lower = text.to_ascii_lowercase();
        let mut words = lower.split_whitespace();
        let verb = words.next().unwrap_or("");
        let object = words.next().unwrap_or("");

        if EXIT.is_match(text) {
            return Ok(Command::Exit);
        }

        if verb == "create" && object == "database" {
            let caps = CREATE_DATABASE
                .captures(text)
                .ok_or_else(|| usage("CREATE DATABASE db_name;"))?;
            return Ok(Command::CreateDatabase(caps[1].to_string()));
        }

        if verb == "create" && object == "table" {
            let caps = CREATE_TABLE.captures(text).ok_or_else(|| {
                usage("CREATE TABLE table_name (column1 datatype PRIMARY, column2 datatype, ...);")
            })?;
            let columns = split_outside_quotes(&caps[2], ',')
                .into_iter()
                .map(|c| c.trim().to_string())
                .collect();
            return Ok(Command::CreateTable(CreateTableStmt {
                table_name: caps[1].to_string(),
                columns,
            }));
        }

        if verb == "use" {
            let caps = USE_DATABASE
                .captures(text)
                .ok_or_else(|| usage("USE db_name;"))?;
            return Ok(Command::UseDatabase(caps[1].to_string()));
        }

        if SHOW_TABLES.is_match(text) {
            return Ok(Command::ShowTables);
        }

        if verb == "insert" {
            let caps = INSERT
                .captures(text)
                .ok_or_else(|| usage("INSERT INTO table_name VALUES (value1, value2, ...);"))?;
            return Ok(Command::Insert(InsertStmt {
                table_name: caps[1].to_string(),
                values: parse_values(&caps[2]),
            }));
        }

        if verb == "select" {
            let caps = SELECT.captures(text).ok_or_else(|| {
                usage("SELECT column1, column2 FROM table_name [WHERE column = value];")
            })?;
            let filter = caps.get(3).map(|m| Filter::parse(m.as_str())).transpose()?;
            return Ok(Command::Select(SelectStmt {
                table_name: caps[2].to_string(),
                projection: Projection::parse(&caps[1]),
                filter,
            }));
        }

        if verb == "update" {
            let caps = UPDATE.captures(text).ok_or_else(|| usage(UPDATE_USAGE))?;
            return Ok(Command::Update(UpdateStmt {
                table_name: caps[1].to_string(),
                assignments: parse_assignments(&caps[2])?,
                filter: Filter::parse(&caps[3])?,
            }));
        }

        if verb == "delete" && object == "from" {
            let caps = DELETE_ROWS
                .captures(text)
                .ok_or_else(|| usage("DELETE FROM table_name [WHERE column = value];"))?;
            let filter = caps.get(2).map(|m| Filter::parse(m.as_str())).transpose()?;
            return Ok(Command::Delete(DeleteStmt {
                table_name: caps[1].to_string(),
                filter,
            }));
        }

        if verb == "delete" && object == "table" {
            let caps = DELETE_TABLE
                .captures(text)
                .ok_or_else(|| usage("DELETE TABLE table_name;"))?;
            return Ok(Command::DeleteTable(caps[1].to_string()));
        }

        if verb == "drop" && object == "database" {
            let caps = DROP_DATABASE
                .captures(text)
                .ok_or_else(|| usage("DROP DATABASE db_name;"))?;
            return Ok(Command::DropDatabase(caps[1].to_string()));
        }

        Err(DbError::ParseError(format!(
            "Unknown command or syntax error: '{}'",
            text
        )))
    }
}

const UPDATE_USAGE: &str =
    "UPDATE table_name SET column1 = value1, column2 = value2 WHERE column = value;";

fn usage(hint: &str) -> DbError {
    DbError::ParseError(format!("Syntax: {}", hint))
}

/// Quoted literals become text verbatim; bare literals go through
/// [`Value::from_literal`].
fn parse_values(raw: &str) -> Vec<Value> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    split_outside_quotes(raw, ',')
        .into_iter()
        .map(|token| {
            let trimmed = token.trim();
            let inner = unquote(trimmed);
            if inner.len() != trimmed.len() {
                Value::Text(inner.to_string())
            } else {
                Value::from_literal(trimmed)
            }
        })
        .collect()
}

fn parse_assignments(raw: &str) -> Result<Vec<(String, String)>> {
    split_outside_quotes(raw, ',')
        .into_iter()
        .map(|pair| {
            let parts = split_outside_quotes(pair, '=');
            match parts.as_slice() {
                [column, value] if !column.trim().is_empty() => {
                    Ok((column.trim().to_string(), unquote(value).to_string()))
                }
                _ => Err(usage(UPDATE_USAGE)),
            }
        })
        .collect()
}

/// Split on `sep`, ignoring separators inside single or double quotes.
fn split_outside_quotes(raw: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == sep => {
                parts.push(&raw[start..i]);
                start = i + c.len_utf8();
            }
            None => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}
