#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {

    Select {
        columns: String,
        table: String,
        condition: String, // raw WHERE text, empty when absent
    },

    CrossJoin {
        table1: String,
        table2: String,
        columns: String,
    },

    Insert {
        table: String,
        values: String, // raw text between the parentheses
    },

    Delete {
        table: String,
        condition: String,
    },
}
