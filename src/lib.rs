pub mod compiler;
pub mod interpreter;
pub mod storage;
pub mod types;
