use std::fmt;
use std::num::FpCategory;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal without `.` or exponent.
    Integer,
    /// Numeric literal with `.` or exponent.
    Float,
    Srid,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    /// `ZM` dimension modifier.
    Zm,
    /// `M` dimension modifier.
    M,
    /// `Z` dimension modifier.
    Z,
    Empty,
    /// `=`
    Equals,
    /// `;`
    Semicolon,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// Anything the scanner could not classify.
    Unknown,
}

impl TokenKind {
    /// Classify upper-cased keyword or punctuation text.
    ///
    /// Returns `None` for numeric literals and unrecognized text.
    #[must_use]
    pub fn from_symbol(text: &str) -> Option<Self> {
        let kind = match text {
            "SRID" => Self::Srid,
            "POINT" => Self::Point,
            "LINESTRING" => Self::LineString,
            "POLYGON" => Self::Polygon,
            "MULTIPOINT" => Self::MultiPoint,
            "MULTILINESTRING" => Self::MultiLineString,
            "MULTIPOLYGON" => Self::MultiPolygon,
            "GEOMETRYCOLLECTION" => Self::GeometryCollection,
            "ZM" => Self::Zm,
            "M" => Self::M,
            "Z" => Self::Z,
            "EMPTY" => Self::Empty,
            "=" => Self::Equals,
            ";" => Self::Semicolon,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "," => Self::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// Grammar symbol name, as used in error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Srid => "SRID",
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
            Self::Zm => "ZM",
            Self::M => "M",
            Self::Z => "Z",
            Self::Empty => "EMPTY",
            Self::Equals => "=",
            Self::Semicolon => ";",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Comma => ",",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether this kind is a numeric literal.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Semantic value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Float(f64),
    /// Upper-cased keyword, punctuation, or unknown text.
    Text(String),
}

impl TokenValue {
    /// Numeric value coerced to `f64`, or `None` for text.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write_float(f, *v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Significant digits kept when printing a float.
const FLOAT_DIGITS: usize = 14;

/// Print `v` rounded to [`FLOAT_DIGITS`] significant digits. Values
/// below `1e-4` or at least `1e14` in magnitude use `1.5E+20` notation,
/// with `.0` added to a single-digit mantissa.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    match v.classify() {
        FpCategory::Nan => return f.write_str("NAN"),
        FpCategory::Infinite if v > 0.0 => return f.write_str("INF"),
        FpCategory::Infinite => return f.write_str("-INF"),
        FpCategory::Zero if v.is_sign_negative() => return f.write_str("-0"),
        FpCategory::Zero => return f.write_str("0"),
        FpCategory::Normal | FpCategory::Subnormal => {}
    }

    let sign = if v.is_sign_negative() { "-" } else { "" };
    let scientific = format!("{:.*e}", FLOAT_DIGITS - 1, v.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    // position of the decimal point relative to the first digit
    let point = exponent + 1;
    let max_point = i32::try_from(FLOAT_DIGITS).map_err(|_| fmt::Error)?;

    if point < -3 || point > max_point {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return write!(
            f,
            "{sign}{head}.{tail}E{exponent_sign}{}",
            exponent.unsigned_abs()
        );
    }

    if point <= 0 {
        let zeros = "0".repeat(usize::try_from(-point).map_err(|_| fmt::Error)?);
        return write!(f, "{sign}0.{zeros}{digits}");
    }

    let point = usize::try_from(point).map_err(|_| fmt::Error)?;
    if digits.len() <= point {
        write!(f, "{sign}{digits}{}", "0".repeat(point - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(point);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

/// A single token with its kind, value, and input offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Zero-based offset of the token's first byte in the input.
    pub offset: usize,
}
