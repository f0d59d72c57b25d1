//! Error types for the surfaces around the lexer.
//!
//! The lexer itself never fails: unrecognised input becomes an `Illegal`
//! token. Errors here cover reading source text and the REPL's output, plus
//! the strict mode of the command line tool.

pub mod errors;
