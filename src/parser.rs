use crate::coord::{Coordinates, Dimension};
use crate::error::{Expected, ParseError};
use crate::factory::Factory;
use crate::scanner::Scanner;
use crate::token::TokenKind;

const GEOMETRY_TYPES: [TokenKind; 7] = [
    TokenKind::Point,
    TokenKind::LineString,
    TokenKind::Polygon,
    TokenKind::MultiPoint,
    TokenKind::MultiLineString,
    TokenKind::MultiPolygon,
    TokenKind::GeometryCollection,
];

const NUMBER: [TokenKind; 2] = [TokenKind::Float, TokenKind::Integer];

/// Maximum number of geometries open at once, counting the outermost.
pub const MAX_DEPTH: usize = 128;

/// The seven geometry productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Point => Some(Self::Point),
            TokenKind::LineString => Some(Self::LineString),
            TokenKind::Polygon => Some(Self::Polygon),
            TokenKind::MultiPoint => Some(Self::MultiPoint),
            TokenKind::MultiLineString => Some(Self::MultiLineString),
            TokenKind::MultiPolygon => Some(Self::MultiPolygon),
            TokenKind::GeometryCollection => Some(Self::GeometryCollection),
            _ => None,
        }
    }
}

/// Parse a WKT literal, building geometries through `factory`.
///
/// Accepts an optional `SRID=<int>;` prefix followed by exactly one
/// geometry. Trailing tokens are an error, as is nesting collections
/// deeper than [`MAX_DEPTH`].
///
/// # Errors
///
/// Returns `ParseError` at the first token that does not fit the
/// grammar, or when the input ends early.
pub fn parse<F: Factory>(input: &str, factory: &mut F) -> Result<F::Geometry, ParseError> {
    Descent {
        scanner: Scanner::new(input),
        factory,
        srid: None,
        depth: 0,
    }
    .parse()
}

/// A WKT parser bound to a factory.
///
/// Holds no per-input state: every call to [`parse`](Self::parse)
/// scans and descends independently.
#[derive(Debug, Clone, Default)]
pub struct Parser<F> {
    factory: F,
}

impl<F: Factory> Parser<F> {
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Parse one WKT literal.
    pub fn parse(&mut self, input: &str) -> Result<F::Geometry, ParseError> {
        parse(input, &mut self.factory)
    }

    pub const fn factory(&self) -> &F {
        &self.factory
    }

    pub const fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn into_factory(self) -> F {
        self.factory
    }
}

/// State of one recursive descent. The dimension cell is passed
/// explicitly through the recursion rather than stored here.
struct Descent<'f, F> {
    scanner: Scanner,
    factory: &'f mut F,
    srid: Option<i64>,
    /// Geometries currently being parsed.
    depth: usize,
}

impl<F: Factory> Descent<'_, F> {
    fn parse(mut self) -> Result<F::Geometry, ParseError> {
        self.srid = self.parse_srid()?;

        let mut dimension = None;
        let geometry = self.parse_geometry(&mut dimension)?;

        self.scanner.expect_end()?;
        Ok(geometry)
    }

    fn parse_srid(&mut self) -> Result<Option<i64>, ParseError> {
        if !self.scanner.is_next(TokenKind::Srid) {
            return Ok(None);
        }

        self.scanner.match_kind(TokenKind::Srid)?;
        self.scanner.match_kind(TokenKind::Equals)?;
        let srid = self.scanner.match_kind(TokenKind::Integer)?.as_i64();
        self.scanner.match_kind(TokenKind::Semicolon)?;

        Ok(srid)
    }

    fn parse_geometry(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let Some(kind) = self
            .scanner
            .lookahead()
            .and_then(|t| GeometryType::from_token(t.kind))
        else {
            return Err(self
                .scanner
                .unexpected(Expected::AnyOf(GEOMETRY_TYPES.to_vec())));
        };
        if self.depth == MAX_DEPTH {
            return Err(self.scanner.unexpected(Expected::MaxDepth(MAX_DEPTH)));
        }
        self.scanner.advance();

        self.depth += 1;
        let geometry = self.parse_geometry_body(kind, dimension);
        self.depth -= 1;
        geometry
    }

    fn parse_geometry_body(
        &mut self,
        kind: GeometryType,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        *dimension = self.resolve_dimension(*dimension);

        if self.scanner.is_next(TokenKind::Empty) {
            self.scanner.advance();
            return Ok(self.create_empty(kind, dimension.unwrap_or_default()));
        }

        match kind {
            GeometryType::Point => self.parse_point_text(dimension),
            GeometryType::LineString => self.parse_line_string_text(dimension, false),
            GeometryType::Polygon => self.parse_polygon_text(dimension),
            GeometryType::MultiPoint => self.parse_multi_point_text(dimension),
            GeometryType::MultiLineString => self.parse_multi_line_string_text(dimension),
            GeometryType::MultiPolygon => self.parse_multi_polygon_text(dimension),
            GeometryType::GeometryCollection => self.parse_geometry_collection_text(dimension),
        }
    }

    /// Apply an optional `ZM`/`M`/`Z` modifier. A modifier is only
    /// consumed when `current` is unset or already equal to it.
    fn resolve_dimension(&mut self, current: Option<Dimension>) -> Option<Dimension> {
        let modifiers = [
            (TokenKind::Zm, Dimension::Xyzm),
            (TokenKind::M, Dimension::Xym),
            (TokenKind::Z, Dimension::Xyz),
        ];

        for (kind, declared) in modifiers {
            if current.is_none_or(|d| d == declared) && self.scanner.is_next(kind) {
                self.scanner.advance();
                return Some(declared);
            }
        }

        current
    }

    fn create_empty(&mut self, kind: GeometryType, dimension: Dimension) -> F::Geometry {
        let srid = self.srid;
        let factory = &mut *self.factory;
        match kind {
            GeometryType::Point => factory.create_point(dimension, srid, None),
            GeometryType::LineString => factory.create_line_string(dimension, srid, Vec::new()),
            GeometryType::Polygon => factory.create_polygon(dimension, srid, Vec::new()),
            GeometryType::MultiPoint => factory.create_multi_point(dimension, srid, Vec::new()),
            GeometryType::MultiLineString => {
                factory.create_multi_line_string(dimension, srid, Vec::new())
            }
            GeometryType::MultiPolygon => {
                factory.create_multi_polygon(dimension, srid, Vec::new())
            }
            GeometryType::GeometryCollection => {
                factory.create_geometry_collection(dimension, srid, Vec::new())
            }
        }
    }

    fn parse_coordinates(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;
        let mut coordinates = Coordinates::xy(x, y);

        let inferring = dimension.is_none();

        let read_z = dimension.is_some_and(Dimension::has_z)
            || (inferring && self.scanner.is_next_any(&NUMBER));
        if read_z {
            coordinates.z = Some(self.parse_number()?);
        }

        let read_m = dimension.is_some_and(Dimension::has_m)
            || (inferring && self.scanner.is_next_any(&NUMBER));
        if read_m {
            coordinates.m = Some(self.parse_number()?);
        }

        // A lone third ordinate always counts as Z; XYM needs the M modifier.
        if inferring {
            *dimension = match (coordinates.z, coordinates.m) {
                (Some(_), Some(_)) => Some(Dimension::Xyzm),
                (Some(_), None) => Some(Dimension::Xyz),
                _ => None,
            };
        }

        Ok(self
            .factory
            .create_point(dimension.unwrap_or_default(), self.srid, Some(coordinates)))
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let value = self.scanner.match_any(&NUMBER)?;
        Ok(value.as_f64().unwrap_or_default())
    }

    fn parse_point_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        self.scanner.match_kind(TokenKind::OpenParen)?;
        let point = self.parse_coordinates(dimension)?;
        self.scanner.match_kind(TokenKind::CloseParen)?;
        Ok(point)
    }

    fn parse_line_string_text(
        &mut self,
        dimension: &mut Option<Dimension>,
        linear_ring: bool,
    ) -> Result<F::Geometry, ParseError> {
        let points = self.parse_list(dimension, Self::parse_coordinates)?;
        let dim = dimension.unwrap_or_default();
        Ok(if linear_ring {
            self.factory.create_linear_ring(dim, self.srid, points)
        } else {
            self.factory.create_line_string(dim, self.srid, points)
        })
    }

    fn parse_ring(&mut self, dimension: &mut Option<Dimension>) -> Result<F::Geometry, ParseError> {
        self.parse_line_string_text(dimension, true)
    }

    fn parse_line_string(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        self.parse_line_string_text(dimension, false)
    }

    fn parse_polygon_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let rings = self.parse_list(dimension, Self::parse_ring)?;
        Ok(self
            .factory
            .create_polygon(dimension.unwrap_or_default(), self.srid, rings))
    }

    /// Members may be written `(x y)` or bare `x y`, decided per member.
    fn parse_multi_point_member(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        if self.scanner.is_next(TokenKind::OpenParen) {
            self.parse_point_text(dimension)
        } else {
            self.parse_coordinates(dimension)
        }
    }

    fn parse_multi_point_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let points = self.parse_list(dimension, Self::parse_multi_point_member)?;
        Ok(self
            .factory
            .create_multi_point(dimension.unwrap_or_default(), self.srid, points))
    }

    fn parse_multi_line_string_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let line_strings = self.parse_list(dimension, Self::parse_line_string)?;
        Ok(self.factory.create_multi_line_string(
            dimension.unwrap_or_default(),
            self.srid,
            line_strings,
        ))
    }

    fn parse_multi_polygon_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let polygons = self.parse_list(dimension, Self::parse_polygon_text)?;
        Ok(self
            .factory
            .create_multi_polygon(dimension.unwrap_or_default(), self.srid, polygons))
    }

    fn parse_geometry_collection_text(
        &mut self,
        dimension: &mut Option<Dimension>,
    ) -> Result<F::Geometry, ParseError> {
        let geometries = self.parse_list(dimension, Self::parse_geometry)?;
        Ok(self.factory.create_geometry_collection(
            dimension.unwrap_or_default(),
            self.srid,
            geometries,
        ))
    }

    /// `"(" item ("," item)* ")"`, collecting items in source order.
    fn parse_list(
        &mut self,
        dimension: &mut Option<Dimension>,
        mut item: impl FnMut(&mut Self, &mut Option<Dimension>) -> Result<F::Geometry, ParseError>,
    ) -> Result<Vec<F::Geometry>, ParseError> {
        self.scanner.match_kind(TokenKind::OpenParen)?;

        let mut items = vec![item(&mut *self, &mut *dimension)?];
        while self.scanner.is_next(TokenKind::Comma) {
            self.scanner.advance();
            items.push(item(&mut *self, &mut *dimension)?);
        }

        self.scanner.match_kind(TokenKind::CloseParen)?;
        Ok(items)
    }
}
