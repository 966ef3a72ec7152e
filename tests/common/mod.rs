#![allow(dead_code)]

use wkt_parser::{Coordinates, Dimension, Factory, ParseError, parse};

/// Which factory method was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

/// One recorded factory call. `children` are indices of earlier calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub dimension: Dimension,
    pub srid: Option<i64>,
    pub coordinates: Option<Coordinates>,
    pub children: Vec<usize>,
}

/// Factory that records every call and returns the call's index.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    fn record(
        &mut self,
        method: Method,
        dimension: Dimension,
        srid: Option<i64>,
        coordinates: Option<Coordinates>,
        children: Vec<usize>,
    ) -> usize {
        self.calls.push(Call {
            method,
            dimension,
            srid,
            coordinates,
            children,
        });
        self.calls.len() - 1
    }

    pub fn of(&self, method: Method) -> Vec<&Call> {
        self.calls.iter().filter(|c| c.method == method).collect()
    }

    pub fn count(&self, method: Method) -> usize {
        self.of(method).len()
    }

    pub fn points(&self) -> Vec<Coordinates> {
        self.of(Method::Point)
            .iter()
            .filter_map(|c| c.coordinates)
            .collect()
    }
}

impl Factory for Recorder {
    type Geometry = usize;

    fn create_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        coordinates: Option<Coordinates>,
    ) -> usize {
        self.record(Method::Point, dimension, srid, coordinates, Vec::new())
    }

    fn create_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<usize>,
    ) -> usize {
        self.record(Method::LineString, dimension, srid, None, points)
    }

    fn create_linear_ring(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<usize>,
    ) -> usize {
        self.record(Method::LinearRing, dimension, srid, None, points)
    }

    fn create_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        rings: Vec<usize>,
    ) -> usize {
        self.record(Method::Polygon, dimension, srid, None, rings)
    }

    fn create_multi_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<usize>,
    ) -> usize {
        self.record(Method::MultiPoint, dimension, srid, None, points)
    }

    fn create_multi_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        line_strings: Vec<usize>,
    ) -> usize {
        self.record(Method::MultiLineString, dimension, srid, None, line_strings)
    }

    fn create_multi_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        polygons: Vec<usize>,
    ) -> usize {
        self.record(Method::MultiPolygon, dimension, srid, None, polygons)
    }

    fn create_geometry_collection(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        geometries: Vec<usize>,
    ) -> usize {
        self.record(Method::GeometryCollection, dimension, srid, None, geometries)
    }
}

/// Parse `input` with a fresh recorder, returning it with the
/// top-level geometry's call index.
pub fn try_record(input: &str) -> Result<(Recorder, usize), ParseError> {
    let mut recorder = Recorder::default();
    let top = parse(input, &mut recorder)?;
    Ok((recorder, top))
}

/// Like [`try_record`], but panics on parse failure.
pub fn record(input: &str) -> (Recorder, usize) {
    try_record(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Parse `input`, which must fail, and return the error message.
pub fn error_message(input: &str) -> String {
    match try_record(input) {
        Ok((recorder, _)) => panic!(
            "expected {input:?} to fail, got calls:\n{:#?}",
            recorder.calls
        ),
        Err(e) => e.to_string(),
    }
}

pub fn coords(x: f64, y: f64, z: Option<f64>, m: Option<f64>) -> Coordinates {
    Coordinates { x, y, z, m }
}
