pub mod adjacency;
mod error;
mod expr;

use log::trace;

pub use error::{Error, Expected, Found, ParseError};
pub use expr::{Expr, NodeKind, Operator};
use scanner::{ScanPolicy, Scanner, Token, TokenData, TokenKind};

use TokenData::*;

pub type Result<T> = std::result::Result<T, ParseError>;

/// How many parentheses may be open at once before parsing gives up.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser for
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '(' expression ')' | number
/// ```
///
/// The token slice is never modified, the parser only moves its index forward.
#[derive(Debug, Clone)]
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    current: usize,
    nesting: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, current: 0, nesting: 0 }
    }

    /// Parses one expression from the front of the tokens. Anything after it is left alone,
    /// see [`Parser::remaining`].
    pub fn parse(&mut self) -> Result<Expr<'a>> {
        self.expression()
    }

    /// Like [`Parser::parse`], but trailing tokens are an error.
    pub fn parse_complete(&mut self) -> Result<Expr<'a>> {
        let expr = self.parse()?;
        match self.current_token() {
            None => Ok(expr),
            found => Err(ParseError::new(Expected::EndOfInput, found)),
        }
    }

    /// Index of the lookahead token.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn remaining(&self) -> &'t [Token<'a>] {
        &self.tokens[self.current.min(self.tokens.len())..]
    }

    fn expression(&mut self) -> Result<Expr<'a>> {
        trace!("expression @{}", self.current);
        let mut expr = self.term()?;

        while let Some(operator @ (Operator::Add | Operator::Sub)) = self.peek_operator() {
            self.advance();
            let right = self.term()?;
            trace!("Folding {operator} into expression");
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr<'a>> {
        trace!("term @{}", self.current);
        let mut expr = self.factor()?;

        while let Some(operator @ (Operator::Mul | Operator::Div)) = self.peek_operator() {
            self.advance();
            let right = self.factor()?;
            trace!("Folding {operator} into term");
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr<'a>> {
        trace!("factor @{}", self.current);
        if self.peek() == Some(LeftParen) {
            if self.nesting == MAX_NESTING {
                return Err(ParseError::TooDeep {
                    limit: MAX_NESTING,
                    found: self.current_token().into(),
                });
            }
            self.advance();
            self.nesting += 1;
            let expr = self.expression();
            self.nesting -= 1;
            let expr = expr?;
            self.consume_or_error(TokenKind::RightParen)?;
            return Ok(expr);
        }
        self.number()
    }

    fn number(&mut self) -> Result<Expr<'a>> {
        match self.current_token() {
            Some(&Token { data: Number(digits), .. }) => {
                self.advance();
                Ok(Expr::number(digits))
            }
            found => Err(ParseError::new(TokenKind::Number, found)),
        }
    }

    fn consume_or_error(&mut self, expected: TokenKind) -> Result<&'t Token<'a>> {
        match self.current_token() {
            Some(token) if token.kind() == expected => {
                self.advance();
                Ok(token)
            }
            found => Err(ParseError::new(expected, found)),
        }
    }
}

// Helpers
impl<'t, 'a> Parser<'t, 'a> {
    fn current_token(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.current)
    }

    fn peek(&self) -> Option<TokenData<'a>> {
        self.current_token().map(|t| t.data)
    }

    fn peek_operator(&self) -> Option<Operator> {
        self.current_token().and_then(|t| Operator::from_token(&t.data))
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub policy: ScanPolicy,
    /// Reject trailing tokens instead of ignoring them.
    pub complete: bool,
}

/// Scans and parses `source` in one go, ignoring trailing tokens.
pub fn parse(source: &str) -> std::result::Result<Expr<'_>, Error> {
    parse_with(source, ParseOptions::default())
}

pub fn parse_with(source: &str, options: ParseOptions) -> std::result::Result<Expr<'_>, Error> {
    let tokens = Scanner::new(source).with_policy(options.policy).scan_tokens()?;
    let mut parser = Parser::new(&tokens);
    let result = if options.complete { parser.parse_complete() } else { parser.parse() };

    match result {
        Ok(expr) => {
            if !parser.remaining().is_empty() {
                log::debug!("Ignoring {} trailing token(s)", parser.remaining().len());
            }
            Ok(expr)
        }
        Err(e) => {
            log::debug!("Parsing {source:?} failed: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
