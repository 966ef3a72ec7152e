use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Expected, ParseError};
use crate::token::{Token, TokenKind, TokenValue};

// Alternatives are tried in order. Longer keywords precede their prefixes
// and the catch-all keeps the tokenization gap-free. Keywords fold ASCII
// case only.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
          (?P<number>
              [-+]?[0-9]*\.?[0-9]*e[-+]?[0-9]+
            | [-+][0-9]*\.?[0-9]*
            | [0-9]+\.?[0-9]*
            | \.[0-9]*
          )
        | (?P<keyword>(?-u:
              SRID|POINT|LINESTRING|POLYGON|MULTIPOINT|MULTILINESTRING
            | MULTIPOLYGON|GEOMETRYCOLLECTION|ZM|M|Z|EMPTY
          ))
        | (?P<punct>[=;(),])
        | (?P<space>[\ \t\n\r\x0B\x0C]+)
        | (?P<other>(?s:.))
        ",
    )
    .expect("token regex is valid")
});

/// Tokenize a WKT literal into a sequence of tokens.
///
/// Tokenization never fails: characters that fit no token class
/// become [`TokenKind::Unknown`] tokens, which the parser then rejects
/// with a positioned error.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    TOKEN_REGEX
        .captures_iter(input)
        .filter(|caps| caps.name("space").is_none())
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let numeric = caps.name("number").is_some();
            Some(classify(m.as_str(), m.start(), numeric))
        })
        .collect()
}

fn classify(text: &str, offset: usize, numeric: bool) -> Token {
    let (kind, value) = if numeric {
        classify_number(text)
    } else {
        let upper = text.to_ascii_uppercase();
        let kind = TokenKind::from_symbol(&upper).unwrap_or(TokenKind::Unknown);
        (kind, TokenValue::Text(upper))
    };
    Token {
        kind,
        value,
        offset,
    }
}

fn classify_number(text: &str) -> (TokenKind, TokenValue) {
    if text.contains(['.', 'e', 'E']) {
        return text.parse::<f64>().map_or_else(
            |_| (TokenKind::Unknown, TokenValue::Text(text.to_ascii_uppercase())),
            |v| (TokenKind::Float, TokenValue::Float(v)),
        );
    }

    if let Ok(i) = text.parse::<i64>() {
        return (TokenKind::Integer, TokenValue::Integer(i));
    }

    if text.bytes().any(|b| b.is_ascii_digit()) {
        // out of range for i64
        let saturated = if text.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        };
        (TokenKind::Integer, TokenValue::Integer(saturated))
    } else {
        (TokenKind::Unknown, TokenValue::Text(text.to_string()))
    }
}

/// Forward-only cursor over the tokens of one input.
///
/// After construction `current` is `None` and `lookahead` holds the
/// first token. The `match_*` methods consume the lookahead only when
/// its kind fits.
#[derive(Debug)]
pub struct Scanner {
    tokens: std::vec::IntoIter<Token>,
    current: Option<Token>,
    lookahead: Option<Token>,
}

impl Scanner {
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut tokens = tokenize(input).into_iter();
        let lookahead = tokens.next();
        Self {
            tokens,
            current: None,
            lookahead,
        }
    }

    /// The most recently consumed token.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The next token, not yet consumed.
    #[must_use]
    pub const fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    pub fn advance(&mut self) {
        self.current = self.lookahead.take();
        self.lookahead = self.tokens.next();
    }

    #[must_use]
    pub fn is_next(&self, kind: TokenKind) -> bool {
        self.lookahead.as_ref().is_some_and(|t| t.kind == kind)
    }

    #[must_use]
    pub fn is_next_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|t| kinds.contains(&t.kind))
    }

    /// Consume the lookahead if it is of `kind` and return its value.
    pub fn match_kind(&mut self, kind: TokenKind) -> Result<TokenValue, ParseError> {
        match &self.lookahead {
            Some(token) if token.kind == kind => {
                let value = token.value.clone();
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected(Expected::Kind(kind))),
        }
    }

    /// Consume the lookahead if its kind is any of `kinds` and return its
    /// value.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Result<TokenValue, ParseError> {
        match &self.lookahead {
            Some(token) if kinds.contains(&token.kind) => {
                let value = token.value.clone();
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected(Expected::AnyOf(kinds.to_vec()))),
        }
    }

    /// Fail unless every token has been consumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.lookahead.is_some() {
            return Err(self.unexpected(Expected::EndOfInput));
        }
        Ok(())
    }

    /// Build an error reporting the lookahead against `expected`.
    #[must_use]
    pub fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::new(expected, self.lookahead.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn point() {
        assert_eq!(
            kinds("POINT(1 2.5)"),
            vec![
                TokenKind::Point,
                TokenKind::OpenParen,
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn srid_prefix() {
        assert_eq!(
            kinds("SRID=4326;POINT EMPTY"),
            vec![
                TokenKind::Srid,
                TokenKind::Equals,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::Point,
                TokenKind::Empty,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let tokens = tokenize("multiPoint zM");
        assert_eq!(tokens[0].kind, TokenKind::MultiPoint);
        assert_eq!(tokens[0].value, TokenValue::Text("MULTIPOINT".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Zm);
    }

    #[test]
    fn keywords_fold_ascii_only() {
        // U+017F LATIN SMALL LETTER LONG S folds to `S` under Unicode rules
        assert_eq!(kinds("\u{17f}RID")[0], TokenKind::Unknown);
        assert_eq!(kinds("LINE\u{17f}TRING")[0], TokenKind::Unknown);
        assert_eq!(
            tokenize("\u{17f}")[0].value,
            TokenValue::Text("\u{17f}".to_string())
        );
    }

    #[test]
    fn modifiers_attached_to_keyword() {
        assert_eq!(
            kinds("POINTZM"),
            vec![TokenKind::Point, TokenKind::Zm]
        );
        assert_eq!(kinds("POINTM"), vec![TokenKind::Point, TokenKind::M]);
    }

    #[test]
    fn number_forms() {
        let tokens = tokenize("1. .5 -1 +2 1.e-005 -.2e-009 3E2");
        let values: Vec<_> = tokens.iter().map(|t| t.value.clone()).collect();
        assert_eq!(
            values,
            vec![
                TokenValue::Float(1.0),
                TokenValue::Float(0.5),
                TokenValue::Integer(-1),
                TokenValue::Integer(2),
                TokenValue::Float(0.00001),
                TokenValue::Float(-0.000_000_000_2),
                TokenValue::Float(300.0),
            ]
        );
        assert_eq!(tokens[6].kind, TokenKind::Float);
    }

    #[test]
    fn lone_sign_is_unknown() {
        let tokens = tokenize("- .");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].value, TokenValue::Text("-".to_string()));
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
    }

    #[test]
    fn integer_overflow_saturates() {
        let tokens = tokenize("99999999999999999999 -99999999999999999999");
        assert_eq!(tokens[0].value, TokenValue::Integer(i64::MAX));
        assert_eq!(tokens[1].value, TokenValue::Integer(i64::MIN));
    }

    #[test]
    fn unknown_characters_are_single_tokens() {
        let tokens = tokenize("foo");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Unknown));
        assert_eq!(tokens[0].value, TokenValue::Text("F".to_string()));
    }

    #[test]
    fn offsets_are_input_positions() {
        let tokens = tokenize("POINT (1  2)");
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 6, 7, 10, 11]);
    }

    #[test]
    fn cursor_starts_before_first_token() {
        let scanner = Scanner::new("POINT");
        assert!(scanner.current().is_none());
        assert_eq!(
            scanner.lookahead().map(|t| t.kind),
            Some(TokenKind::Point)
        );
    }

    #[test]
    fn cursor_advance() {
        let mut scanner = Scanner::new("POINT EMPTY");
        scanner.advance();
        assert_eq!(scanner.current().map(|t| t.kind), Some(TokenKind::Point));
        assert!(scanner.is_next(TokenKind::Empty));
        scanner.advance();
        assert!(scanner.lookahead().is_none());
        scanner.advance();
        assert!(scanner.current().is_none());
    }

    #[test]
    fn match_kind_consumes_on_success() {
        let mut scanner = Scanner::new("( 1");
        let value = scanner.match_kind(TokenKind::OpenParen).expect("match");
        assert_eq!(value, TokenValue::Text("(".to_string()));
        assert!(scanner.is_next_any(&[TokenKind::Float, TokenKind::Integer]));
    }

    #[test]
    fn match_kind_does_not_consume_on_failure() {
        let mut scanner = Scanner::new(")");
        let err = scanner.match_kind(TokenKind::OpenParen).unwrap_err();
        assert_eq!(err.expected, Expected::Kind(TokenKind::OpenParen));
        assert!(scanner.is_next(TokenKind::CloseParen));
    }

    #[test]
    fn match_any_reports_alternatives() {
        let mut scanner = Scanner::new("");
        let err = scanner
            .match_any(&[TokenKind::Float, TokenKind::Integer])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected any of FLOAT or INTEGER, but got end of input."
        );
    }

    #[test]
    fn expect_end() {
        let mut scanner = Scanner::new("EMPTY )");
        scanner.advance();
        let err = scanner.expect_end().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected end of input, but got \")\" at position 6 (0-based)."
        );
        scanner.advance();
        assert!(scanner.expect_end().is_ok());
    }
}
