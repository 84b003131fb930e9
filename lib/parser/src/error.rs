use std::fmt::{self, Display, Formatter};

use cursor::{Col, Line};
use scanner::{ScanError, Token, TokenKind};

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    EndOfInput,
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Expected::Token(kind)
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::EndOfInput => write!(f, "end-of-input"),
        }
    }
}

/// What the parser actually saw. Owns the lexeme so errors outlive the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token { lexeme: String, line: Line, col: Col },
    EndOfInput,
}

impl From<Option<&Token<'_>>> for Found {
    fn from(token: Option<&Token<'_>>) -> Self {
        match token {
            Some(token) => Found::Token {
                lexeme: token.lexeme().to_string(),
                line: token.line(),
                col: token.col(),
            },
            None => Found::EndOfInput,
        }
    }
}

impl Display for Found {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { lexeme, .. } => write!(f, "'{lexeme}'"),
            Found::EndOfInput => write!(f, "end-of-input"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected}, got {found}")]
    Expected { expected: Expected, found: Found },
    #[error("Parentheses nested deeper than {limit}, got {found}")]
    TooDeep { limit: usize, found: Found },
}

impl ParseError {
    pub fn new(expected: impl Into<Expected>, found: Option<&Token<'_>>) -> Self {
        ParseError::Expected { expected: expected.into(), found: found.into() }
    }

    pub fn found(&self) -> &Found {
        match self {
            ParseError::Expected { found, .. } | ParseError::TooDeep { found, .. } => found,
        }
    }

    /// Position of the offending token, `None` at end of input.
    pub fn position(&self) -> Option<(Line, Col)> {
        match self.found() {
            Found::Token { line, col, .. } => Some((*line, *col)),
            Found::EndOfInput => None,
        }
    }
}

/// Any failure of [`crate::parse_with`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn position(&self) -> Option<(Line, Col)> {
        match self {
            Error::Scan(e) => Some((e.line(), e.col())),
            Error::Parse(e) => e.position(),
        }
    }
}
