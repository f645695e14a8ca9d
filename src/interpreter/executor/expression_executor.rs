use crate::compiler::condition::{Combine, Condition};

/// Fold the condition list into one match decision for a row.
///
/// A condition is met when the row text contains its comparison value as a
/// substring; matching is over the whole comma-joined row, not per field.
/// The fold is a pure left-to-right combination with each condition's AND/OR,
/// no precedence grouping. An empty list matches every row.
pub fn evaluate_conditions(row: &str, conditions: &[Condition]) -> bool {
    // a leading OR must start from false, otherwise it could never reject
    let mut matched = match conditions.first() {
        Some(first) if first.combine == Combine::Or => false,
        _ => true,
    };

    for condition in conditions {
        let condition_met = row.contains(condition.value.as_str());
        matched = match condition.combine {
            Combine::And => matched && condition_met,
            Combine::Or => matched || condition_met,
        };
    }

    matched
}
