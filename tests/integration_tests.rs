//! Integration tests for the public lexer API and the REPL.

use std::{io::Cursor, path::PathBuf};

use monkey_lexer::{
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    repl, tokenize_file,
};
use pretty_assertions::assert_eq;

#[test]
fn test_pull_tokens_until_eof() {
    let mut lexer = Lexer::new("let add = fn(a, b) { a + b };");
    let mut kinds = vec![];

    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        kinds.push(token.kind);
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::RBrace,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_independent_lexers_over_same_text() {
    let source = String::from("if (a != b) { return a; }");
    let mut first = Lexer::new(&source);
    let mut second = Lexer::new(&source);

    assert_eq!(first.next_token().kind, TokenKind::If);
    assert_eq!(first.next_token().kind, TokenKind::LParen);
    assert_eq!(second.next_token().kind, TokenKind::If);
    assert_eq!(first.next_token().value, "a");
    assert_eq!(second.next_token().kind, TokenKind::LParen);
}

#[test]
fn test_tokenize_file_matches_tokenize() {
    let path = PathBuf::from("tests/test_file.monkey");
    let source = std::fs::read_to_string(&path).unwrap();

    let from_file = tokenize_file(&path).unwrap();

    assert_eq!(from_file, tokenize(&source));
    assert_eq!(from_file.last(), Some(&Token::eof()));
}

#[test]
fn test_repl_prints_tokens_per_line() {
    let input = Cursor::new("let x = 5;\n@\n");
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let expected = [
        ">> {Type:LET Literal:let}",
        "{Type:IDENT Literal:x}",
        "{Type:ASSIGN Literal:=}",
        "{Type:INT Literal:5}",
        "{Type:SEMICOLON Literal:;}",
        ">> {Type:ILLEGAL Literal:@}",
        ">> \n",
    ]
    .join("\n");

    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn test_repl_empty_input() {
    let mut output = Vec::new();

    repl::start(Cursor::new(""), &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ">> \n");
}

#[test]
fn test_print_tokens_skips_eof() {
    let mut output = Vec::new();

    let written = repl::print_tokens(&tokenize("1 == 1"), &mut output).unwrap();

    assert_eq!(written, 3);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "{Type:INT Literal:1}\n{Type:EQ Literal:==}\n{Type:INT Literal:1}\n"
    );
}
