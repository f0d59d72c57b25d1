#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

use std::{fs, path::Path};

use crate::{
    errors::errors::{ErrorImpl, Result},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

/// Reads a Monkey source file and returns its full token stream, ending in EOF.
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>> {
    let source = fs::read_to_string(path).map_err(|source| ErrorImpl::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), chars = source.chars().count(), "read source");
    Ok(tokenize(&source))
}

/// Fails with `IllegalCharacters` when the stream holds any `Illegal` token.
pub fn check_strict(tokens: &[Token]) -> Result<()> {
    let mut illegal = tokens.iter().filter(|token| token.kind == TokenKind::Illegal);

    let Some(first) = illegal.next() else {
        return Ok(());
    };

    Err(ErrorImpl::IllegalCharacters {
        count: illegal.count() + 1,
        first: first.value.clone(),
    }
    .into())
}
