mod expression_executor;
mod mutation_executor;
mod select_executor;

pub use expression_executor::evaluate_conditions;

use crate::compiler::ast::Command;
use crate::interpreter::database::{Database, Table};
use crate::interpreter::ExecResult;
use crate::types::{DbError, DbResult};

/// Stateless per-command executor: each command is dispatched, run to
/// completion and persisted before the next one is parsed.
pub struct Executor<'a> {
    pub database: &'a Database,
}

impl<'a> Executor<'a> {

    pub fn new(database: &'a Database) -> Self {
        Self { database }
    }

    pub fn execute(&self, command: Command) -> DbResult<ExecResult> {
        match command {
            Command::Select { columns, table, condition } => {
                self.select(&table, &columns, &condition)
            }
            Command::CrossJoin { table1, table2, columns } => {
                self.cross_join(&table1, &table2, &columns)
            }
            Command::Insert { table, values } => self.insert(&table, &values),
            Command::Delete { table, condition } => self.delete(&table, &condition),
        }
    }

    fn table(&self, name: &str) -> DbResult<&Table> {
        self.database
            .find_table(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_string()))
    }
}
