use crate::coord::{Coordinates, Dimension};

/// Receives structural callbacks from the parser and builds geometries.
///
/// Calls arrive bottom-up: children are always created before the
/// geometry that contains them, and child lists are in source order.
/// `dimension` is never unset at a call site (it defaults to
/// [`Dimension::Xy`]) and `srid` is the same for every call of one parse.
///
/// Empty geometries (`POLYGON EMPTY`, ...) receive an empty child list,
/// and `POINT EMPTY` receives `None` coordinates.
pub trait Factory {
    type Geometry;

    fn create_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        coordinates: Option<Coordinates>,
    ) -> Self::Geometry;

    fn create_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    /// A ring of a polygon. Called instead of
    /// [`create_line_string`](Self::create_line_string) for polygon
    /// boundaries.
    fn create_linear_ring(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    fn create_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        rings: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    fn create_multi_point(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        points: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    fn create_multi_line_string(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        line_strings: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    fn create_multi_polygon(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        polygons: Vec<Self::Geometry>,
    ) -> Self::Geometry;

    fn create_geometry_collection(
        &mut self,
        dimension: Dimension,
        srid: Option<i64>,
        geometries: Vec<Self::Geometry>,
    ) -> Self::Geometry;
}
