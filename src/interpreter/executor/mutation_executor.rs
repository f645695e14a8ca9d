use crate::compiler::condition::parse_conditions;
use crate::interpreter::executor::{evaluate_conditions, Executor};
use crate::interpreter::ExecResult;
use crate::types::{DbError, DbResult};

impl Executor<'_> {

    /// INSERT INTO: append one row at the tail of the table, mirrored by an
    /// append to the table's file. The whole check-mutate-persist sequence
    /// runs under the table lock.
    pub fn insert(&self, table_name: &str, values: &str) -> DbResult<ExecResult> {
        let table = self.table(table_name)?;
        let mut state = table.lock();

        if state.rows.len() >= self.database.tuples_limit {
            return Err(DbError::RowLimitExceeded(table_name.to_string()));
        }

        let row = clean_values(values);

        // file append comes first so a failed write leaves memory untouched
        self.database.storage().append_row(&table.name, &row)?;
        state.rows.push(row);
        state.sequence += 1;

        Ok(ExecResult::AffectedRows(1, format!("Inserted into {table_name}")))
    }

    /// DELETE FROM: drop every matching row, keeping the relative order of
    /// the survivors, then rewrite the mirror file completely. An empty
    /// condition matches every row.
    pub fn delete(&self, table_name: &str, condition: &str) -> DbResult<ExecResult> {
        let table = self.table(table_name)?;
        let conditions = parse_conditions(condition);

        let mut state = table.lock();
        let before = state.rows.len();
        state.rows.retain(|row| !evaluate_conditions(row, &conditions));
        let removed = before - state.rows.len();

        self.database
            .storage()
            .rewrite(&table.name, &table.columns, &state.rows)?;

        Ok(ExecResult::AffectedRows(removed, format!("Deleted from {table_name}")))
    }
}

/// Normalize the raw VALUES text into stored row form: strip the outer
/// parens/quotes/spaces, trim each field of spaces and single quotes, rejoin
/// with commas. Field count is not validated against the column count.
fn clean_values(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c| c == ' ' || c == '(' || c == ')' || c == '\'');

    trimmed
        .split(',')
        .map(|field| field.trim_matches(|c| c == ' ' || c == '\''))
        .collect::<Vec<_>>()
        .join(",")
}
