pub mod ast;
pub mod condition;
pub mod parser;
