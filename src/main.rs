use std::env;
use std::io::{self, Write};

use mirror_db::compiler::parser::parse_command;
use mirror_db::interpreter::catalog::Schema;
use mirror_db::interpreter::{ExecResult, Interpreter};
use mirror_db::types::DbError;

fn execute_input(input: &str, interpreter: &mut Interpreter) {
    match parse_command(input) {
        Ok(command) => match interpreter.execute(command) {
            Ok(result) => print_exec_result(result),
            Err(err) => print_db_error(err),
        },
        Err(err) => print_db_error(err),
    }
}

fn print_exec_result(result: ExecResult) {
    match result {
        ExecResult::AffectedRows(count, msg) => {
            println!("{msg} ({count} rows affected)");
        }

        ExecResult::QueryResult(rows) => {
            if rows.is_empty() {
                println!("(no rows)");
                return;
            }
            for row in rows {
                println!("{row}");
            }
        }
    }
}

fn print_db_error(error: DbError) {
    eprintln!("ERROR: {error}");
}

fn main() {
    let schema_path = env::args().nth(1).unwrap_or_else(|| "schema.json".to_string());

    let schema = match Schema::load(&schema_path) {
        Ok(schema) => schema,
        Err(err) => {
            print_db_error(err);
            return;
        }
    };

    let mut interpreter = match Interpreter::new(schema, ".") {
        Ok(interpreter) => interpreter,
        Err(err) => {
            print_db_error(err);
            return;
        }
    };

    println!("mirror_db shell");
    println!("One command per line, type 'exit' to quit\n");

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }
        let line = input.trim_end_matches(['\r', '\n']);

        if line == "exit" {
            break;
        }

        execute_input(line, &mut interpreter);
    }
}
