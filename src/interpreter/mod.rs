pub mod catalog;
pub mod database;
pub mod executor;

use std::path::Path;

use catalog::{DuplicateTablePolicy, Schema};
use database::Database;
use executor::Executor;

use crate::compiler::ast::Command;
use crate::types::DbResult;

/// Outcome of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    AffectedRows(usize, String),
    QueryResult(Vec<String>),
}

pub struct Interpreter {
    pub database: Database,
}

impl Interpreter {

    /// Open the database described by the schema under `root`, creating the
    /// directory structure and loading existing mirror files.
    pub fn new(schema: Schema, root: impl AsRef<Path>) -> DbResult<Self> {
        Self::with_policy(schema, root, DuplicateTablePolicy::FirstMatch)
    }

    pub fn with_policy(
        schema: Schema,
        root: impl AsRef<Path>,
        policy: DuplicateTablePolicy,
    ) -> DbResult<Self> {
        Ok(Self {
            database: Database::open(schema, root, policy)?,
        })
    }

    /// Entry point for command execution
    pub fn execute(&mut self, command: Command) -> DbResult<ExecResult> {
        let executor = Executor::new(&self.database);
        executor.execute(command)
    }
}
