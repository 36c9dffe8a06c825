//! Tokenizer for Pseudo.
//!
//! [`lex`] turns a whole file into a token vector ending in `Eof`, or fails
//! with the first [`LexError`]. Rules worth knowing:
//!
//! - Spaces and tabs are skipped; `;` and `\n` both become `Newline`.
//! - `#` starts a comment that runs up to (not including) the line break.
//! - A number run that meets a letter is rescanned from its start as an
//!   identifier, so `12abc` is the identifier `12abc`.
//! - A second `.` ends a number; it does not error.
//! - Strings are double-quoted with `\n`, `\t` and literal `\x` escapes. An
//!   unterminated string runs to end of input.
//! - `%` is the `MOD` keyword and `^` is the power operator.

mod cursor;
mod lex_error;

use pseudo_ir::{Keyword, SourceId, Token, TokenKind};

use crate::cursor::Cursor;
pub use crate::lex_error::{LexError, LexErrorKind};

/// Lex `text`, the contents of the file registered as `source`.
pub fn lex(source: SourceId, text: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source, text).run()?;
    tracing::debug!(count = tokens.len(), ?source, "lexed");
    Ok(tokens)
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: SourceId, text: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source, text),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.cursor.current() {
            match ch {
                ' ' | '\t' => {
                    self.cursor.bump();
                }
                '#' => self.cursor.skip_to_line_end(),
                ';' | '\n' => self.single(TokenKind::Newline),
                '"' => self.string(),
                c if c.is_ascii_digit() => self.number(),
                c if c.is_alphabetic() || c == '_' => self.identifier(),
                '+' => self.single(TokenKind::Plus),
                '/' => self.single(TokenKind::Div),
                '%' => self.single(TokenKind::Keyword(Keyword::Mod)),
                '^' => self.single(TokenKind::Pow),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                ',' => self.single(TokenKind::Comma),
                '-' => self.one_or_two('>', TokenKind::Minus, TokenKind::Arrow),
                '*' => self.one_or_two('*', TokenKind::Mul, TokenKind::Pow),
                '=' => self.one_or_two('=', TokenKind::Eq, TokenKind::EqEq),
                '<' => self.one_or_two('=', TokenKind::Lt, TokenKind::LtEq),
                '>' => self.one_or_two('=', TokenKind::Gt, TokenKind::GtEq),
                '!' => self.not_equals()?,
                other => {
                    let start = self.cursor.pos();
                    self.cursor.bump();
                    return Err(LexError::new(
                        LexErrorKind::IllegalChar(other),
                        self.cursor.span_from(start),
                    ));
                }
            }
        }

        let end = self.cursor.pos();
        self.tokens
            .push(Token::new(TokenKind::Eof, self.cursor.span_from(end)));
        Ok(self.tokens)
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.bump();
        self.tokens.push(Token::new(kind, self.cursor.span_from(start)));
    }

    /// One character of lookahead: `second` upgrades `one` to `two`.
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.bump();
        let kind = if self.cursor.eat(second) { two } else { one };
        self.tokens.push(Token::new(kind, self.cursor.span_from(start)));
    }

    fn not_equals(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        if self.cursor.eat('=') {
            self.tokens
                .push(Token::new(TokenKind::NotEq, self.cursor.span_from(start)));
            return Ok(());
        }
        self.cursor.bump();
        Err(LexError::new(
            LexErrorKind::ExpectedChar {
                expected: '=',
                after: '!',
            },
            self.cursor.span_from(start),
        ))
    }

    fn number(&mut self) {
        let saved = self.cursor;
        let start = self.cursor.pos();
        let mut seen_dot = false;

        while let Some(ch) = self.cursor.current() {
            if ch.is_alphabetic() {
                // Not a number after all: rescan the whole run as a word.
                self.cursor = saved;
                self.identifier();
                return;
            }
            if ch == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            self.cursor.bump();
        }

        let text = self.cursor.slice_from(start);
        let kind = if seen_dot {
            TokenKind::float(text.parse().unwrap_or(f64::NAN))
        } else {
            match text.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                Err(_) => TokenKind::float(text.parse().unwrap_or(f64::INFINITY)),
            }
        };
        self.tokens.push(Token::new(kind, self.cursor.span_from(start)));
    }

    fn identifier(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_alphanumeric() || c == '_');
        let word = self.cursor.slice_from(start);
        let kind = match Keyword::from_word(word) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(word.to_string()),
        };
        self.tokens.push(Token::new(kind, self.cursor.span_from(start)));
    }

    fn string(&mut self) {
        let start = self.cursor.pos();
        self.cursor.bump();
        let mut value = String::new();

        while let Some(ch) = self.cursor.bump() {
            match ch {
                '"' => break,
                '\\' => match self.cursor.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(other) => value.push(other),
                    None => break,
                },
                other => value.push(other),
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Str(value), self.cursor.span_from(start)));
    }
}

#[cfg(test)]
mod tests;
