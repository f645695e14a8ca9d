use std::fmt;
use std::io;

// global constants
pub const MAX_CONDITIONS: usize = 10;
pub const DATA_FILE: &str = "1.csv";
pub const JOIN_SEPARATOR: &str = " | ";

// global result alias
pub type DbResult<T> = Result<T, DbError>;

/// Crate-wide error type. Every variant is local to one command except
/// ConfigUnavailable and InvalidSchema, which can only occur at startup.
#[derive(Debug)]
pub enum DbError {
    ConfigUnavailable(String),
    InvalidSchema(String),
    TableNotFound(String),
    TablesNotFound(Vec<String>),
    SyntaxError(String),
    RowLimitExceeded(String),
    UnknownCommand(String),
    Io(io::Error),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::ConfigUnavailable(msg) => write!(f, "Cannot open schema file: {msg}"),
            DbError::InvalidSchema(msg) => write!(f, "Invalid schema: {msg}"),
            DbError::TableNotFound(name) => write!(f, "Table not found: {name}"),
            DbError::TablesNotFound(names) => {
                // one report per missing table
                let reports: Vec<String> = names
                    .iter()
                    .map(|name| format!("Table not found: {name}"))
                    .collect();
                write!(f, "{}", reports.join("\n"))
            }
            DbError::SyntaxError(msg) => write!(f, "Syntax error: {msg}"),
            DbError::RowLimitExceeded(name) => write!(f, "Row limit exceeded for table: {name}"),
            DbError::UnknownCommand(token) => write!(f, "Unknown command: {token}"),
            DbError::Io(err) => write!(f, "File write failed: {err}"),
        }
    }
}

impl std::error::Error for DbError {}

impl From<io::Error> for DbError {
    fn from(err: io::Error) -> Self {
        DbError::Io(err)
    }
}
