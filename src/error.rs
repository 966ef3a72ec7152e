use std::fmt;

use crate::token::{Token, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A single grammar symbol.
    Kind(TokenKind),
    /// One of several alternatives, in grammar order.
    AnyOf(Vec<TokenKind>),
    /// No further tokens.
    EndOfInput,
    /// A geometry nested no deeper than the given limit.
    MaxDepth(usize),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::AnyOf(kinds) => {
                f.write_str("any of ")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
            Self::EndOfInput => f.write_str("end of input"),
            Self::MaxDepth(limit) => write!(f, "at most {limit} nested geometries"),
        }
    }
}

/// Error produced while parsing a WKT literal.
///
/// The message format is stable:
///
/// - `Expected X, but got end of input.`
/// - `Expected X, but got "V" at beginning of input.`
/// - `Expected X, but got "V" at position N (0-based).`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Expected {expected}, but got {}.", Found(.found.as_ref()))]
pub struct ParseError {
    pub expected: Expected,
    /// The offending token, or `None` at end of input.
    pub found: Option<Token>,
}

impl ParseError {
    #[must_use]
    pub const fn new(expected: Expected, found: Option<Token>) -> Self {
        Self { expected, found }
    }

    /// Input offset of the offending token, if any.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.found.as_ref().map(|t| t.offset)
    }
}

struct Found<'a>(Option<&'a Token>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("end of input"),
            Some(token) if token.offset == 0 => {
                write!(f, "\"{}\" at beginning of input", token.value)
            }
            Some(token) => write!(
                f,
                "\"{}\" at position {} (0-based)",
                token.value, token.offset
            ),
        }
    }
}
