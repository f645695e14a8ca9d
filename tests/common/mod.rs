use tempfile::TempDir;

use mirror_db::compiler::parser::parse_command;
use mirror_db::interpreter::catalog::Schema;
use mirror_db::interpreter::{ExecResult, Interpreter};
use mirror_db::types::DbResult;

pub fn test_schema(tuples_limit: usize) -> Schema {
    let json = format!(
        r#"{{
            "name": "testdb",
            "tuples_limit": {tuples_limit},
            "structure": {{
                "Orders": ["id", "amount"],
                "Users": ["id", "name"]
            }}
        }}"#
    );
    Schema::from_json(&json).expect("valid test schema")
}

pub fn setup_interpreter(tuples_limit: usize) -> (TempDir, Interpreter) {
    let tmpdir = TempDir::new().expect("create temp dir");
    let interpreter =
        Interpreter::new(test_schema(tuples_limit), tmpdir.path()).expect("open database");
    (tmpdir, interpreter)
}

pub fn run(command: &str, interpreter: &mut Interpreter) -> DbResult<ExecResult> {
    interpreter.execute(parse_command(command)?)
}

/// Rows returned by a SELECT-like command, panicking on any other outcome.
pub fn query(command: &str, interpreter: &mut Interpreter) -> Vec<String> {
    match run(command, interpreter) {
        Ok(ExecResult::QueryResult(rows)) => rows,
        other => panic!("Expected query result, got {other:?}"),
    }
}
