use crate::{Col, Cursor, Line};

/// The span of source text a token was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRange<'a> {
    start: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> From<(Cursor<'a>, Cursor<'a>)> for SourceRange<'a> {
    fn from((start, end): (Cursor<'a>, Cursor<'a>)) -> Self {
        Self::new(start, end)
    }
}

impl<'a> SourceRange<'a> {
    pub fn new(start: Cursor<'a>, end: Cursor<'a>) -> Self {
        assert!(start.source == end.source);
        assert!(start.offset() <= end.offset());
        Self { start, end }
    }

    pub fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.end)
    }

    pub fn line(&self) -> Line {
        self.start.line()
    }

    pub fn col(&self) -> Col {
        self.start.col()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lexeme_and_position() {
        let mut cursor = Cursor::new("(10 * 2)");
        cursor.next(); // '('
        let start = cursor.clone();
        cursor.eat_while(|c| c.is_ascii_digit());

        let range = SourceRange::from((start, cursor));
        assert_eq!(range.lexeme(), "10");
        assert_eq!((range.line(), range.col()), (Line(1), Col(2)));
    }
}
