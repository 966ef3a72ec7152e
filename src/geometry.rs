//! Owned geometry model and a factory that builds it.

use crate::coord::{Coordinates, Dimension};
use crate::error::ParseError;
use crate::factory::Factory;

/// `POINT`, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub coordinates: Option<Coordinates>,
}

/// `LINESTRING`, or a polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub points: Vec<Point>,
}

/// `POLYGON`: an exterior ring followed by any holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub rings: Vec<LineString>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub line_strings: Vec<LineString>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub geometries: Vec<Geometry>,
}

/// Any parsed geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    /// A polygon ring. Only appears as a child while building.
    LinearRing(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Point(g) => g.dimension,
            Self::LineString(g) | Self::LinearRing(g) => g.dimension,
            Self::Polygon(g) => g.dimension,
            Self::MultiPoint(g) => g.dimension,
            Self::MultiLineString(g) => g.dimension,
            Self::MultiPolygon(g) => g.dimension,
            Self::GeometryCollection(g) => g.dimension,
        }
    }

    #[must_use]
    pub const fn srid(&self) -> Option<i64> {
        match self {
            Self::Point(g) => g.srid,
            Self::LineString(g) | Self::LinearRing(g) => g.srid,
            Self::Polygon(g) => g.srid,
            Self::MultiPoint(g) => g.srid,
            Self::MultiLineString(g) => g.srid,
            Self::MultiPolygon(g) => g.srid,
            Self::GeometryCollection(g) => g.srid,
        }
    }

    /// Upper-case WKT type keyword.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "POINT",
            Self::LineString(_) => "LINESTRING",
            Self::LinearRing(_) => "LINEARRING",
            Self::Polygon(_) => "POLYGON",
            Self::MultiPoint(_) => "MULTIPOINT",
            Self::MultiLineString(_) => "MULTILINESTRING",
            Self::MultiPolygon(_) => "MULTIPOLYGON",
            Self::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        }
    }

    /// Whether the geometry was written as `EMPTY`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(g) => g.coordinates.is_none(),
            Self::LineString(g) | Self::LinearRing(g) => g.points.is_empty(),
            Self::Polygon(g) => g.rings.is_empty(),
            Self::MultiPoint(g) => g.points.is_empty(),
            Self::MultiLineString(g) => g.line_strings.is_empty(),
            Self::MultiPolygon(g) => g.polygons.is_empty(),
            Self::GeometryCollection(g) => g.geometries.is_empty(),
        }
    }

    /// Total number of coordinate tuples, at any depth.
    #[must_use]
    pub fn num_points(&self) -> usize {
        fn line(l: &LineString) -> usize {
            l.points.len()
        }
        fn polygon(p: &Polygon) -> usize {
            p.rings.iter().map(line).sum()
        }

        match self {
            Self::Point(g) => usize::from(g.coordinates.is_some()),
            Self::LineString(g) | Self::LinearRing(g) => line(g),
            Self::Polygon(g) => polygon(g),
            Self::MultiPoint(g) => g.points.len(),
            Self::MultiLineString(g) => g.line_strings.iter().map(line).sum(),
            Self::MultiPolygon(g) => g.polygons.iter().map(polygon).sum(),
            Self::GeometryCollection(g) => g.geometries.iter().map(Self::num_points).sum(),
        }
    }

    fn into_point(self) -> Option<Point> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }

    fn into_line_string(self) -> Option<LineString> {
        match self {
            Self::LineString(l) | Self::LinearRing(l) => Some(l),
            _ => None,
        }
    }

    fn into_polygon(self) -> Option<Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

/// Unwrap children into their concrete type.
///
/// The parser only hands over children of the expected variant. A
/// mismatch is a bug in the caller and trips a debug assertion; release
/// builds drop the mismatched child.
fn typed_children<T>(children: Vec<Geometry>, convert: fn(Geometry) -> Option<T>) -> Vec<T> {
    let count = children.len();
    let typed: Vec<T> = children.into_iter().filter_map(convert).collect();
    debug_assert_eq!(
        typed.len(),
        count,
        "child geometry of the wrong type passed to GeometryBuilder"
    );
    typed
}

/// Factory producing [`Geometry`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryBuilder;

impl Factory for GeometryBuilder {
    type Geometry = Geometry;

    fn create_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        coordinates: Option<Coordinates>,
    ) -> Geometry {
        Geometry::Point(Point {
            dimension,
            srid,
            coordinates,
        })
    }

    fn create_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Geometry>,
    ) -> Geometry {
        Geometry::LineString(LineString {
            dimension,
            srid,
            points: typed_children(points, Geometry::into_point),
        })
    }

    fn create_linear_ring(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Geometry>,
    ) -> Geometry {
        Geometry::LinearRing(LineString {
            dimension,
            srid,
            points: typed_children(points, Geometry::into_point),
        })
    }

    fn create_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        rings: Vec<Geometry>,
    ) -> Geometry {
        Geometry::Polygon(Polygon {
            dimension,
            srid,
            rings: typed_children(rings, Geometry::into_line_string),
        })
    }

    fn create_multi_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Geometry>,
    ) -> Geometry {
        Geometry::MultiPoint(MultiPoint {
            dimension,
            srid,
            points: typed_children(points, Geometry::into_point),
        })
    }

    fn create_multi_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        line_strings: Vec<Geometry>,
    ) -> Geometry {
        Geometry::MultiLineString(MultiLineString {
            dimension,
            srid,
            line_strings: typed_children(line_strings, Geometry::into_line_string),
        })
    }

    fn create_multi_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        polygons: Vec<Geometry>,
    ) -> Geometry {
        Geometry::MultiPolygon(MultiPolygon {
            dimension,
            srid,
            polygons: typed_children(polygons, Geometry::into_polygon),
        })
    }

    fn create_geometry_collection(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        geometries: Vec<Geometry>,
    ) -> Geometry {
        Geometry::GeometryCollection(GeometryCollection {
            dimension,
            srid,
            geometries,
        })
    }
}

/// Parse a WKT literal into an owned [`Geometry`].
///
/// # Errors
///
/// Returns `ParseError` if the input is not a complete WKT literal.
pub fn parse_geometry(input: &str) -> Result<Geometry, ParseError> {
    crate::parser::parse(input, &mut GeometryBuilder)
}
