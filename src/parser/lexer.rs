//! Line tokenizer for program text
//!
//! Splits source text into [`SourceLine`]s of whitespace-separated [`Token`]s.
//! Blank and whitespace-only lines are dropped here, so the parser only ever
//! sees lines that carry at least one token.

use super::ast::SourceLocation;
use std::fmt;

/// A whitespace-free slice of a source line with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub location: SourceLocation,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

/// All tokens of one non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based row in the file
    pub row: usize,
    pub tokens: Vec<Token>,
}

pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { source }
    }

    /// Tokenize every non-blank line.
    pub fn tokenize(&mut self) -> Vec<SourceLine> {
        self.source
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let row = i + 1;
                let tokens = Self::split_line(line, row);
                if tokens.is_empty() {
                    None
                } else {
                    Some(SourceLine { row, tokens })
                }
            })
            .collect()
    }

    fn split_line(line: &str, row: usize) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current: Option<(usize, String)> = None;

        for (column, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                if let Some((start, text)) = current.take() {
                    tokens.push(Token {
                        text,
                        location: SourceLocation::new(row, start + 1),
                    });
                }
            } else {
                current
                    .get_or_insert_with(|| (column, String::new()))
                    .1
                    .push(ch);
            }
        }

        if let Some((start, text)) = current {
            tokens.push(Token {
                text,
                location: SourceLocation::new(row, start + 1),
            });
        }

        tokens
    }
}

/// How a token reads as an integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// Not literal-shaped; may be a name
    NotInteger,
    Integer(i32),
    /// Literal-shaped but does not fit in `i32`
    OutOfRange,
}

/// Classify a token as an integer literal.
///
/// Accepts an optional leading `-` followed by at least one ASCII digit.
/// `+5` and a bare `-` are not literals.
pub fn integer_literal(text: &str) -> Literal {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Literal::NotInteger;
    }
    match text.parse::<i32>() {
        Ok(n) => Literal::Integer(n),
        Err(_) => Literal::OutOfRange,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_line() {
        let mut lexer = Lexer::new("10 set x 5\n");
        let lines = lexer.tokenize();

        assert_eq!(lines.len(), 1);
        let texts: Vec<&str> = lines[0].tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["10", "set", "x", "5"]);
        assert_eq!(lines[0].tokens[2].location, SourceLocation::new(1, 8));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut lexer = Lexer::new("1 begin\n\n   \t\n2 end\r\n");
        let lines = lexer.tokenize();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].row, 1);
        assert_eq!(lines[1].row, 4);
        assert_eq!(lines[1].tokens[1].text, "end");
    }

    #[test]
    fn test_tabs_and_repeated_spaces() {
        let mut lexer = Lexer::new("  3\tprint   x  y\thello");
        let lines = lexer.tokenize();

        let texts: Vec<&str> = lines[0].tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["3", "print", "x", "y", "hello"]);
        assert_eq!(lines[0].tokens[0].location.column, 3);
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(integer_literal("42"), Literal::Integer(42));
        assert_eq!(integer_literal("-7"), Literal::Integer(-7));
        assert_eq!(integer_literal("007"), Literal::Integer(7));
        assert_eq!(integer_literal("-2147483648"), Literal::Integer(i32::MIN));
        assert_eq!(integer_literal("-"), Literal::NotInteger);
        assert_eq!(integer_literal("+5"), Literal::NotInteger);
        assert_eq!(integer_literal("x1"), Literal::NotInteger);
        assert_eq!(integer_literal("1x"), Literal::NotInteger);
        assert_eq!(integer_literal("99999999999"), Literal::OutOfRange);
    }
}
