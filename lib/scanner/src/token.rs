use std::fmt::Display;

use cursor::{Col, Line, SourceRange};

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub range: SourceRange<'a>,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData<'a>, range: impl Into<SourceRange<'a>>) -> Token<'a> {
        Self { data, range: range.into() }
    }

    pub fn kind(&self) -> TokenKind {
        self.data.kind()
    }

    pub fn lexeme(&self) -> &'a str {
        self.range.lexeme()
    }

    pub fn line(&self) -> Line {
        self.range.line()
    }

    pub fn col(&self) -> Col {
        self.range.col()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.lexeme())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenData<'a> {
    /// A maximal run of ASCII digits, kept verbatim.
    Number(&'a str),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
}

impl<'a> TokenData<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenData::Number(_) => TokenKind::Number,
            TokenData::Plus => TokenKind::Plus,
            TokenData::Minus => TokenKind::Minus,
            TokenData::Star => TokenKind::Star,
            TokenData::Slash => TokenKind::Slash,
            TokenData::LeftParen => TokenKind::LeftParen,
            TokenData::RightParen => TokenKind::RightParen,
        }
    }

    /// Single-character tokens, `None` for digit runs.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => TokenData::Plus,
            '-' => TokenData::Minus,
            '*' => TokenData::Star,
            '/' => TokenData::Slash,
            '(' => TokenData::LeftParen,
            ')' => TokenData::RightParen,
            _ => return None,
        })
    }
}

/// Token type without payload, used when stating what the parser expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TokenKind {
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "'+'")]
    Plus,
    #[strum(serialize = "'-'")]
    Minus,
    #[strum(serialize = "'*'")]
    Star,
    #[strum(serialize = "'/'")]
    Slash,
    #[strum(serialize = "'('")]
    LeftParen,
    #[strum(serialize = "')'")]
    RightParen,
}
