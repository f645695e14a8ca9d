use mirror_db::compiler::ast::Command;
use mirror_db::compiler::parser::parse_command;
use mirror_db::types::DbError;

#[test]
fn test_select_without_where() {
    let cmd = parse_command("SELECT id, amount FROM Orders").unwrap();
    assert_eq!(
        cmd,
        Command::Select {
            columns: "id, amount".to_string(),
            table: "Orders".to_string(),
            condition: String::new(),
        }
    );
}

#[test]
fn test_select_with_where() {
    let cmd = parse_command("SELECT id FROM Orders WHERE amount = '100'").unwrap();
    match cmd {
        Command::Select { table, condition, .. } => {
            assert_eq!(table, "Orders");
            assert_eq!(condition, "amount = '100'");
        }
        _ => panic!("Expected Select command"),
    }
}

#[test]
fn test_select_missing_from_is_syntax_error() {
    let err = parse_command("SELECT id Orders").unwrap_err();
    assert!(matches!(err, DbError::SyntaxError(_)), "got {err:?}");
}

#[test]
fn test_select_two_tables_is_cross_join() {
    let cmd = parse_command("SELECT id FROM Orders, Users").unwrap();
    assert_eq!(
        cmd,
        Command::CrossJoin {
            table1: "Orders".to_string(),
            table2: "Users".to_string(),
            columns: "id".to_string(),
        }
    );
}

#[test]
fn test_cross_join_table_names_are_trimmed() {
    let cmd = parse_command("SELECT id FROM  Orders ,  Users ").unwrap();
    match cmd {
        Command::CrossJoin { table1, table2, .. } => {
            assert_eq!(table1, "Orders");
            assert_eq!(table2, "Users");
        }
        _ => panic!("Expected CrossJoin command"),
    }
}

#[test]
fn test_insert() {
    let cmd = parse_command("INSERT INTO Orders VALUES (1, 100)").unwrap();
    assert_eq!(
        cmd,
        Command::Insert {
            table: "Orders".to_string(),
            values: "1, 100".to_string(),
        }
    );
}

#[test]
fn test_insert_missing_closing_paren_is_syntax_error() {
    let err = parse_command("INSERT INTO Orders VALUES (1, 100").unwrap_err();
    assert!(matches!(err, DbError::SyntaxError(_)), "got {err:?}");
}

#[test]
fn test_insert_missing_values_keyword_is_syntax_error() {
    let err = parse_command("INSERT INTO Orders (1, 100)").unwrap_err();
    assert!(matches!(err, DbError::SyntaxError(_)), "got {err:?}");
}

#[test]
fn test_delete_without_where() {
    let cmd = parse_command("DELETE FROM Orders").unwrap();
    assert_eq!(
        cmd,
        Command::Delete {
            table: "Orders".to_string(),
            condition: String::new(),
        }
    );
}

#[test]
fn test_delete_with_where_keeps_raw_condition() {
    let cmd = parse_command("DELETE FROM Orders WHERE amount = '100' AND id = '1'").unwrap();
    match cmd {
        Command::Delete { table, condition } => {
            assert_eq!(table, "Orders");
            assert_eq!(condition, "amount = '100' AND id = '1'");
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_delete_missing_from_is_syntax_error() {
    let err = parse_command("DELETE Orders").unwrap_err();
    assert!(matches!(err, DbError::SyntaxError(_)), "got {err:?}");
}

#[test]
fn test_bare_keywords_are_syntax_errors() {
    for line in ["SELECT", "INSERT", "DELETE"] {
        let err = parse_command(line).unwrap_err();
        assert!(matches!(err, DbError::SyntaxError(_)), "{line}: got {err:?}");
    }
}

#[test]
fn test_unknown_command() {
    let err = parse_command("UPDATE Orders SET amount = '1'").unwrap_err();
    match err {
        DbError::UnknownCommand(token) => assert_eq!(token, "UPDATE"),
        _ => panic!("Expected UnknownCommand, got {err:?}"),
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    let err = parse_command("select id FROM Orders").unwrap_err();
    assert!(matches!(err, DbError::UnknownCommand(_)), "got {err:?}");
}

#[test]
fn test_empty_line_is_unknown_command() {
    let err = parse_command("").unwrap_err();
    assert!(matches!(err, DbError::UnknownCommand(_)), "got {err:?}");
}
