use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::interpreter::catalog::{DuplicateTablePolicy, Schema};
use crate::storage::{FileMirrorStore, MirrorStore};
use crate::types::{DbError, DbResult};

/// Mutable part of a table, guarded as one unit so the check-mutate-persist
/// sequence of every statement runs under a single lock.
pub struct TableState {
    pub rows: Vec<String>,
    pub sequence: u64,
}

pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    state: Mutex<TableState>,
}

impl Table {

    fn new(name: String, columns: Vec<String>) -> Self {
        Self {
            name,
            columns,
            state: Mutex::new(TableState { rows: Vec::new(), sequence: 1 }),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, TableState> {
        self.state.lock().unwrap()
    }

    /// Snapshot of the row list, in insertion order.
    pub fn rows(&self) -> Vec<String> {
        self.lock().rows.clone()
    }

    pub fn row_count(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }
}

/// The table store: owns every table and the mirror store that persists them.
/// Shape (table set, column lists) is fixed after `open`.
pub struct Database {
    pub name: String,
    pub tuples_limit: usize,
    tables: Vec<Table>,
    storage: Box<dyn MirrorStore>,
}

impl Database {

    /// Build the database from a schema, create the on-disk file structure
    /// under `root/<name>/` and load existing rows from the mirror files.
    pub fn open(
        schema: Schema,
        root: impl AsRef<Path>,
        policy: DuplicateTablePolicy,
    ) -> DbResult<Database> {
        let storage = FileMirrorStore::new(root.as_ref().join(&schema.name));
        Self::open_with_storage(schema, policy, Box::new(storage))
    }

    pub fn open_with_storage(
        schema: Schema,
        policy: DuplicateTablePolicy,
        storage: Box<dyn MirrorStore>,
    ) -> DbResult<Database> {
        let mut database = Database {
            name: schema.name,
            tuples_limit: schema.tuples_limit,
            tables: Vec::new(),
            storage,
        };

        for (table_name, columns) in schema.structure {
            database.create_table(table_name, columns, policy)?;
        }

        for table in &database.tables {
            database.storage.ensure_table_file(&table.name, &table.columns)?;
            let rows = database.storage.load_rows(&table.name)?;
            table.lock().rows = rows;
        }

        Ok(database)
    }

    /// Append a table with zero rows and sequence 1. Under `FirstMatch` a
    /// duplicate name is kept but shadowed by lookup order.
    pub fn create_table(
        &mut self,
        name: String,
        columns: Vec<String>,
        policy: DuplicateTablePolicy,
    ) -> DbResult<()> {
        if policy == DuplicateTablePolicy::Reject && self.find_table(&name).is_some() {
            return Err(DbError::InvalidSchema(format!("duplicate table name: {name}")));
        }
        self.tables.push(Table::new(name, columns));
        Ok(())
    }

    /// Linear scan by name, first match wins.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn storage(&self) -> &dyn MirrorStore {
        self.storage.as_ref()
    }
}
