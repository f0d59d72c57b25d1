//! Lexical analysis module.
//!
//! This module contains the lexer that converts Monkey source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Character-by-character traversal with single character lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Marking of unrecognised characters as `Illegal` tokens

pub mod lexer;
pub mod tokens;
