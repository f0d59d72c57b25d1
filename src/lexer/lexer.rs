use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Any character in a `L*` general category. Letter numbers (`Nl`) and
/// combining marks are not letters.
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Decimal digits (`Nd`) from any script.
pub fn is_digit(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

pub fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

/// Pull-based scanner over a fully materialised Monkey program.
///
/// The source is held as decoded code points. `ch` is the character at
/// `position`; `None` marks end of input. Every branch of `next_token`
/// leaves the cursor on the first character not belonging to the token it
/// returned.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_position).copied();

        if self.ch.is_some() {
            self.position = self.read_position;
            self.read_position += 1;
        } else {
            // Parked one past the end; never read from.
            self.position = self.source.len();
            self.read_position = self.source.len() + 1;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_space) {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(char) -> bool) -> String {
        let start = self.position;

        while self.ch.is_some_and(predicate) {
            self.read_char();
        }

        self.source[start..self.position].iter().collect()
    }

    fn read_identifier(&mut self) -> String {
        self.read_while(is_letter)
    }

    fn read_number(&mut self) -> String {
        self.read_while(is_digit)
    }

    /// Consumes the current character, and the next one when it is `second`,
    /// choosing between the one and two character forms of an operator.
    fn either(&mut self, current: char, second: char, single: TokenKind, double: TokenKind) -> Token {
        if self.peek_char() == Some(second) {
            self.read_char();
            self.read_char();
            MK_TOKEN!(double, [current, second].iter().collect())
        } else {
            self.single(current, single)
        }
    }

    fn single(&mut self, current: char, kind: TokenKind) -> Token {
        self.read_char();
        MK_TOKEN!(kind, current.to_string())
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return Token::eof();
        };

        let token = match ch {
            '=' => self.either(ch, '=', TokenKind::Assign, TokenKind::Eq),
            '!' => self.either(ch, '=', TokenKind::Bang, TokenKind::NotEq),
            '+' => self.single(ch, TokenKind::Plus),
            '-' => self.single(ch, TokenKind::Minus),
            '/' => self.single(ch, TokenKind::Slash),
            '*' => self.single(ch, TokenKind::Asterisk),
            '<' => self.single(ch, TokenKind::Lt),
            '>' => self.single(ch, TokenKind::Gt),
            ';' => self.single(ch, TokenKind::Semicolon),
            ',' => self.single(ch, TokenKind::Comma),
            '{' => self.single(ch, TokenKind::LBrace),
            '}' => self.single(ch, TokenKind::RBrace),
            '(' => self.single(ch, TokenKind::LParen),
            ')' => self.single(ch, TokenKind::RParen),
            _ if is_letter(ch) => {
                let literal = self.read_identifier();
                MK_TOKEN!(lookup_identifier(&literal), literal)
            }
            _ if is_digit(ch) => MK_TOKEN!(TokenKind::Int, self.read_number()),
            _ => {
                debug!(character = ?ch, index = self.position, "illegal character");
                self.single(ch, TokenKind::Illegal)
            }
        };

        trace!(kind = %token.kind, literal = %token.value, "token");
        token
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }
}

/// Yields every token up to and including the first EOF.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(count = tokens.len(), "tokenized source");
    tokens
}
