use crate::compiler::condition::parse_conditions;
use crate::interpreter::executor::{evaluate_conditions, Executor};
use crate::interpreter::ExecResult;
use crate::types::{DbError, DbResult, JOIN_SEPARATOR};

impl Executor<'_> {

    /// SELECT: emit the raw text of every matching row, in list order.
    ///
    /// The column list is accepted syntactically but not used to project the
    /// output; the full row text is always emitted.
    pub fn select(&self, table_name: &str, _columns: &str, condition: &str) -> DbResult<ExecResult> {
        let table = self.table(table_name)?;
        let conditions = parse_conditions(condition);

        let state = table.lock();
        let result = state
            .rows
            .iter()
            .filter(|row| evaluate_conditions(row, &conditions))
            .cloned()
            .collect();

        Ok(ExecResult::QueryResult(result))
    }

    /// Cartesian product of two tables, one line per pair, table1-row-major.
    /// No ON clause, no filtering.
    pub fn cross_join(
        &self,
        table_name1: &str,
        table_name2: &str,
        _columns: &str,
    ) -> DbResult<ExecResult> {
        let table1 = self.database.find_table(table_name1);
        let table2 = self.database.find_table(table_name2);

        let (table1, table2) = match (table1, table2) {
            (Some(t1), Some(t2)) => (t1, t2),
            (t1, t2) => {
                // one report per missing table, not only the first
                let mut missing = Vec::new();
                if t1.is_none() {
                    missing.push(table_name1.to_string());
                }
                if t2.is_none() {
                    missing.push(table_name2.to_string());
                }
                return Err(DbError::TablesNotFound(missing));
            }
        };

        // snapshot each side under its own lock, taken one after the other:
        // the two names may resolve to the same table
        let rows1 = table1.rows();
        let rows2 = table2.rows();

        let mut result = Vec::with_capacity(rows1.len() * rows2.len());
        for row1 in &rows1 {
            for row2 in &rows2 {
                result.push(format!("{row1}{JOIN_SEPARATOR}{row2}"));
            }
        }

        Ok(ExecResult::QueryResult(result))
    }
}
