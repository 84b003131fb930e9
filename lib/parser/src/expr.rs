use std::fmt::{self, Display, Formatter};

use scanner::TokenData;

/// A node of the parse tree. Parentheses leave no trace, they only shape the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'a> {
    /// One or more decimal digits, exactly as written.
    Number(&'a str),
    Binary { left: Box<Expr<'a>>, operator: Operator, right: Box<Expr<'a>> },
}

impl<'a> Expr<'a> {
    pub fn number(digits: &'a str) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        Expr::Number(digits)
    }

    pub fn binary(left: Expr<'a>, operator: Operator, right: Expr<'a>) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    /// The grammar rule that produced this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Number(_) => NodeKind::Number,
            Expr::Binary { operator, .. } => operator.kind(),
        }
    }
}

/// Renders the tree as nested tuples, e.g. `('expression', ('number', '1'), '+', ('number', '2'))`.
impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        enum Piece<'e, 'a> {
            Expr(&'e Expr<'a>),
            Operator(Operator),
            Close,
        }

        // Explicit stack, a left-leaning chain of operators can be arbitrarily deep.
        let mut pieces = vec![Piece::Expr(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Expr(Expr::Number(digits)) => {
                    write!(f, "('{}', '{}')", NodeKind::Number, digits)?
                }
                Piece::Expr(Expr::Binary { left, operator, right }) => {
                    write!(f, "('{}', ", operator.kind())?;
                    pieces.extend([
                        Piece::Close,
                        Piece::Expr(&**right),
                        Piece::Operator(*operator),
                        Piece::Expr(&**left),
                    ]);
                }
                Piece::Operator(operator) => write!(f, ", '{operator}', ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

impl Drop for Expr<'_> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Expr::Binary { left, right, .. } = self {
            pending.push(std::mem::replace(left.as_mut(), Expr::Number("0")));
            pending.push(std::mem::replace(right.as_mut(), Expr::Number("0")));
        }
        while let Some(mut expr) = pending.pop() {
            if let Expr::Binary { left, right, .. } = &mut expr {
                pending.push(std::mem::replace(left.as_mut(), Expr::Number("0")));
                pending.push(std::mem::replace(right.as_mut(), Expr::Number("0")));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum NodeKind {
    #[strum(serialize = "number")]
    Number,
    /// `*` and `/`
    #[strum(serialize = "term")]
    Term,
    /// `+` and `-`
    #[strum(serialize = "expression")]
    Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    pub fn from_token(data: &TokenData) -> Option<Self> {
        Some(match data {
            TokenData::Plus => Operator::Add,
            TokenData::Minus => Operator::Sub,
            TokenData::Star => Operator::Mul,
            TokenData::Slash => Operator::Div,
            _ => return None,
        })
    }

    pub fn as_char(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Operator::Add | Operator::Sub => NodeKind::Expression,
            Operator::Mul | Operator::Div => NodeKind::Term,
        }
    }
}
