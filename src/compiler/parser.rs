use crate::compiler::ast::Command;
use crate::types::{DbError, DbResult};

/**
command := select_stmt | insert_stmt | delete_stmt
select_stmt := SELECT columns FROM table (, table)? (WHERE condition)?
insert_stmt := INSERT INTO table VALUES ( values )
delete_stmt := DELETE FROM table (WHERE condition)?
*/
pub fn parse_command(line: &str) -> DbResult<Command> {
    // keywords are case-sensitive, matched on whole tokens; the remainder
    // after the leading keyword is handed to the statement parsers
    let trimmed = line.trim_start();
    let (keyword, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match keyword {
        "SELECT" => parse_select(rest),
        "INSERT" => parse_insert(rest),
        "DELETE" => parse_delete(rest),
        other => Err(DbError::UnknownCommand(other.to_string())),
    }
}

fn parse_select(rest: &str) -> DbResult<Command> {
    let (columns, after_from) = match rest.split_once(" FROM ") {
        Some((cols, rest)) => (cols.trim().to_string(), rest),
        None => return Err(DbError::SyntaxError("expected keyword 'FROM'".to_string())),
    };

    // the condition text stays raw, the condition parser handles it later
    let (table_ref, condition) = match after_from.split_once(" WHERE ") {
        Some((table, cond)) => (table, cond),
        None => (after_from, ""),
    };
    let table_ref = table_ref.trim_matches(' ');

    // a comma in the table reference names two tables: a cross join
    if let Some((table1, table2)) = table_ref.split_once(',') {
        Ok(Command::CrossJoin {
            table1: table1.trim_matches(' ').to_string(),
            table2: table2.trim_matches(' ').to_string(),
            columns,
        })
    } else {
        Ok(Command::Select {
            columns,
            table: table_ref.to_string(),
            condition: condition.to_string(),
        })
    }
}

fn parse_insert(rest: &str) -> DbResult<Command> {
    let open = rest.find('(')
        .ok_or_else(|| DbError::SyntaxError("expected '(' after VALUES".to_string()))?;
    let close = rest[open..].find(')')
        .map(|i| open + i)
        .ok_or_else(|| DbError::SyntaxError("expected closing ')'".to_string()))?;

    let mut head = rest[..open].split_whitespace();
    if head.next() != Some("INTO") {
        return Err(DbError::SyntaxError("expected keyword 'INTO'".to_string()));
    }
    let table = head.next()
        .ok_or_else(|| DbError::SyntaxError("expected table name".to_string()))?;
    if head.next() != Some("VALUES") {
        return Err(DbError::SyntaxError("expected keyword 'VALUES'".to_string()));
    }

    Ok(Command::Insert {
        table: table.to_string(),
        values: rest[open + 1..close].to_string(),
    })
}

fn parse_delete(rest: &str) -> DbResult<Command> {
    let (head, condition) = match rest.split_once(" WHERE ") {
        Some((head, cond)) => (head, cond),
        None => (rest, ""),
    };

    let mut tokens = head.split_whitespace();
    if tokens.next() != Some("FROM") {
        return Err(DbError::SyntaxError("expected keyword 'FROM'".to_string()));
    }
    let table = tokens.next()
        .ok_or_else(|| DbError::SyntaxError("expected table name".to_string()))?;

    Ok(Command::Delete {
        table: table.to_string(),
        condition: condition.to_string(),
    })
}
