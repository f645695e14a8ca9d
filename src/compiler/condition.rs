use crate::types::MAX_CONDITIONS;

/// How a condition joins the running match result during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    And,
    Or,
}

/// One `<column> = '<value>'` entry of a WHERE clause. The column name is
/// recorded but matching is substring containment over the whole row text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub value: String,
    pub combine: Combine,
}

/**
condition_list := condition (( AND | OR ) condition)*
condition := column = 'value'
*/
pub fn parse_conditions(text: &str) -> Vec<Condition> {
    let mut conditions = Vec::new();
    let mut rest = text;
    let mut combine = Combine::And; // the first condition joins with AND

    while !rest.is_empty() && conditions.len() < MAX_CONDITIONS {
        let (token, next_combine, tail) = split_first_delimiter(rest);

        // tokens without '=' are skipped without producing a condition
        if let Some((column, value)) = token.split_once('=') {
            conditions.push(Condition {
                column: column.trim_matches(' ').to_string(),
                value: value.trim_matches(|c| c == ' ' || c == '\'').to_string(),
                combine,
            });
        }

        match next_combine {
            Some(op) => combine = op,
            None => break,
        }
        rest = tail;
    }

    conditions
}

/// Split off the text before the first ` AND ` / ` OR `, whichever comes
/// first positionally, together with that delimiter and the remainder.
fn split_first_delimiter(text: &str) -> (&str, Option<Combine>, &str) {
    let next_and = text.find(" AND ");
    let next_or = text.find(" OR ");

    match (next_and, next_or) {
        (Some(a), Some(o)) if a < o => (&text[..a], Some(Combine::And), &text[a + 5..]),
        (Some(a), None) => (&text[..a], Some(Combine::And), &text[a + 5..]),
        (_, Some(o)) => (&text[..o], Some(Combine::Or), &text[o + 4..]),
        (None, None) => (text, None, ""),
    }
}
