//! Lexer for Monkey using logos.
//!
//! Two entry points:
//! - [`Lexer::next_token`] pulls one token at a time and keeps returning
//!   `EOF` once the input is exhausted (the read loop drives it this way).
//! - [`lex`] collects a whole input into a list terminated by `EOF`.
//!
//! Unrecognized characters become one-character `ILLEGAL` tokens rather
//! than errors, so lexing never fails.

mod raw_token;

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind};

use crate::raw_token::RawToken;

/// Pull-based tokenizer over a single source string.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            inner: RawToken::lexer(source),
        }
    }

    /// Produce the next token, or `EOF` if the input is exhausted.
    ///
    /// Calling this again after `EOF` keeps returning `EOF`.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::eof(u32::try_from(self.source.len()).unwrap_or(u32::MAX));
        };

        match result {
            Ok(raw) => Token::new(raw.kind(), self.inner.slice(), span_of(self.inner.span())),
            Err(()) => self.illegal_token(),
        }
    }

    /// Build an `ILLEGAL` token covering exactly one character.
    ///
    /// The logos error span may stop inside a multi-byte character; it is
    /// widened to the next character boundary before slicing.
    fn illegal_token(&mut self) -> Token {
        let span = self.inner.span();
        let char_len = self
            .source
            .get(span.start..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        if span.len() < char_len {
            self.inner.bump(char_len - span.len());
        }

        let span = self.inner.span();
        let literal = self.source.get(span.clone()).unwrap_or_default();
        Token::new(TokenKind::Illegal, literal, span_of(span))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before `EOF`; `EOF` itself ends the iteration.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex source code into a token list.
///
/// The list always ends with exactly one `EOF` token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Inputs larger than `u32::MAX` bytes get a dummy span rather than a panic.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_default()
}

#[cfg(test)]
mod tests;
