//! The bundled geometry model.

use wkt_parser::{
    Coordinates, Dimension, Geometry, GeometryBuilder, Parser, parse, parse_geometry,
};

#[test]
fn point_model() {
    let geometry = parse_geometry("SRID=3857;POINT ZM(1 2 3 4)").expect("parse");
    let Geometry::Point(point) = geometry else {
        panic!("expected a point");
    };
    assert_eq!(point.srid, Some(3857));
    assert_eq!(point.dimension, Dimension::Xyzm);
    assert_eq!(
        point.coordinates,
        Some(Coordinates::xy(1.0, 2.0).with_z(3.0).with_m(4.0))
    );
}

#[test]
fn line_string_model() {
    let geometry = parse_geometry("LINESTRING M(0 0 1, 1 1 2)").expect("parse");
    let Geometry::LineString(line) = &geometry else {
        panic!("expected a line string");
    };
    assert_eq!(line.points.len(), 2);
    assert_eq!(line.points[1].coordinates.and_then(|c| c.m), Some(2.0));
    assert_eq!(geometry.type_name(), "LINESTRING");
}

#[test]
fn multi_point_model() {
    let geometry = parse_geometry("MULTIPOINT(1 2, (3 4))").expect("parse");
    let Geometry::MultiPoint(mp) = &geometry else {
        panic!("expected a multipoint");
    };
    assert_eq!(mp.points.len(), 2);
    assert_eq!(geometry.num_points(), 2);
}

#[test]
fn multi_line_string_model() {
    let geometry = parse_geometry("MULTILINESTRING((0 0, 1 1), (2 2, 3 3, 4 4))").expect("parse");
    let Geometry::MultiLineString(mls) = &geometry else {
        panic!("expected a multilinestring");
    };
    assert_eq!(mls.line_strings.len(), 2);
    assert_eq!(mls.line_strings[1].points.len(), 3);
    assert_eq!(geometry.num_points(), 5);
}

#[test]
fn collection_model() {
    let geometry = parse_geometry(
        "GEOMETRYCOLLECTION Z(POINT(1 2 3), POLYGON((0 0 0, 1 0 0, 0 1 0, 0 0 0)), \
         MULTIPOINT EMPTY)",
    )
    .expect("parse");
    let Geometry::GeometryCollection(gc) = &geometry else {
        panic!("expected a collection");
    };
    assert_eq!(gc.geometries.len(), 3);
    assert_eq!(gc.geometries[1].type_name(), "POLYGON");
    assert!(gc.geometries[2].is_empty());
    assert_eq!(gc.geometries[2].dimension(), Dimension::Xyz);
    assert_eq!(geometry.num_points(), 5);
}

#[test]
fn empty_models() {
    for (input, name) in [
        ("POINT EMPTY", "POINT"),
        ("LINESTRING EMPTY", "LINESTRING"),
        ("POLYGON EMPTY", "POLYGON"),
        ("MULTIPOINT EMPTY", "MULTIPOINT"),
        ("MULTILINESTRING EMPTY", "MULTILINESTRING"),
        ("MULTIPOLYGON EMPTY", "MULTIPOLYGON"),
        ("GEOMETRYCOLLECTION EMPTY", "GEOMETRYCOLLECTION"),
    ] {
        let geometry = parse_geometry(input).expect("parse");
        assert!(geometry.is_empty(), "{input} should be empty");
        assert_eq!(geometry.type_name(), name);
        assert_eq!(geometry.num_points(), 0);
        assert_eq!(geometry.srid(), None);
    }
}

#[test]
fn parse_with_builder_matches_convenience() {
    let input = "SRID=4326;MULTIPOLYGON(((0 0, 1 0, 0 0)))";
    let direct = parse(input, &mut GeometryBuilder).expect("parse");
    let convenient = parse_geometry(input).expect("parse");
    assert_eq!(direct, convenient);
}

#[test]
fn parser_owns_factory() {
    let mut parser = Parser::new(GeometryBuilder);
    assert!(parser.parse("POINT(1 2)").is_ok());
    assert!(parser.parse("POINT(1 2").is_err());
    assert!(parser.parse("POINT(3 4)").is_ok());
    let _builder: GeometryBuilder = parser.into_factory();
}
