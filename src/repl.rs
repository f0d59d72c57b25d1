//! Token-printing read-eval-print loop.
//!
//! Each input line is lexed on its own and its tokens are written one per
//! line, without the trailing EOF.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    errors::errors::Result,
    lexer::{lexer::Lexer, tokens::Token},
};

pub const PROMPT: &str = ">> ";

/// Writes every token before EOF, one per line, and returns how many were written.
pub fn print_tokens<W: Write>(tokens: &[Token], output: &mut W) -> Result<usize> {
    let mut written = 0;

    for token in tokens.iter().take_while(|token| !token.is_eof()) {
        writeln!(output, "{}", token)?;
        written += 1;
    }

    Ok(written)
}

pub fn start<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        let tokens: Vec<Token> = Lexer::new(&line?).collect();
        let written = print_tokens(&tokens, output)?;
        debug!(tokens = written, "lexed repl line");
    }
}
