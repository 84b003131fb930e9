use cursor::{Col, Cursor, Line};

pub mod token;
pub use token::{Token, TokenData, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character '{character}'")]
    UnexpectedCharacter { character: char, line: Line, col: Col },
}

impl ScanError {
    pub fn line(&self) -> Line {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    pub fn col(&self) -> Col {
        match self {
            ScanError::UnexpectedCharacter { col, .. } => *col,
        }
    }
}

/// What to do with characters that are neither digits nor operators.
/// Whitespace is always skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Drop them from the token stream.
    Lenient,
    /// Fail on the first one.
    Strict,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        if cfg!(feature = "strict") {
            ScanPolicy::Strict
        } else {
            ScanPolicy::Lenient
        }
    }
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    policy: ScanPolicy,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), policy: ScanPolicy::default() }
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, ScanError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn scan_token(&mut self) -> Result<Option<Token<'a>>, ScanError> {
        loop {
            let start = self.cursor.clone();
            let Some(c) = self.cursor.next() else {
                return Ok(None);
            };

            if c.is_ascii_digit() {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                let lexeme = start.slice_until(&self.cursor);
                return Ok(Some(Token::new(TokenData::Number(lexeme), (start, self.cursor.clone()))));
            }

            if let Some(data) = TokenData::from_char(c) {
                return Ok(Some(Token::new(data, (start, self.cursor.clone()))));
            }

            if c.is_whitespace() {
                continue;
            }

            match self.policy {
                ScanPolicy::Lenient => {
                    log::debug!(
                        "Dropping unexpected character {c:?} at l. {}, c. {}",
                        start.line(),
                        start.col()
                    );
                }
                ScanPolicy::Strict => {
                    return Err(ScanError::UnexpectedCharacter {
                        character: c,
                        line: start.line(),
                        col: start.col(),
                    })
                }
            }
        }
    }
}

/// Scans `source` with the default policy.
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
    Scanner::new(source).scan_tokens()
}
