pub mod args;
mod print;
pub mod shell;
