//! Drive a user-defined factory that records bounding boxes.

use wkt_parser::{Coordinates, Dimension, Factory, Parser};

/// Axis-aligned bounding box over X and Y.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    const fn point(c: Coordinates) -> Self {
        Self {
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
        }
    }

    const fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[derive(Default)]
struct BoundsFactory {
    calls: usize,
}

impl BoundsFactory {
    fn merge(&mut self, children: Vec<Option<Bounds>>) -> Option<Bounds> {
        self.calls += 1;
        children.into_iter().flatten().reduce(Bounds::union)
    }
}

impl Factory for BoundsFactory {
    type Geometry = Option<Bounds>;

    fn create_point(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        coordinates: Option<Coordinates>,
    ) -> Option<Bounds> {
        self.calls += 1;
        coordinates.map(Bounds::point)
    }

    fn create_line_string(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        points: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(points)
    }

    fn create_linear_ring(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        points: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(points)
    }

    fn create_polygon(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        rings: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(rings)
    }

    fn create_multi_point(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        points: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(points)
    }

    fn create_multi_line_string(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        line_strings: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(line_strings)
    }

    fn create_multi_polygon(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        polygons: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(polygons)
    }

    fn create_geometry_collection(
        &mut self,
        _dimension: Dimension,
        _srid: Option<i64>,
        geometries: Vec<Option<Bounds>>,
    ) -> Option<Bounds> {
        self.merge(geometries)
    }
}

fn main() {
    let mut parser = Parser::new(BoundsFactory::default());

    for input in [
        "LINESTRING(-3 1, 4 7, 2 -5)",
        "GEOMETRYCOLLECTION(POINT(10 10), POLYGON((0 0, 1 0, 1 1, 0 0)))",
        "POINT EMPTY",
    ] {
        match parser.parse(input) {
            Ok(Some(b)) => println!(
                "{input}: [{}, {}] - [{}, {}]",
                b.min_x, b.min_y, b.max_x, b.max_y
            ),
            Ok(None) => println!("{input}: empty"),
            Err(e) => println!("{input}: {e}"),
        }
    }

    println!("factory calls: {}", parser.factory().calls);
}
