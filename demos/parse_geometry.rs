//! Parse WKT literals into the bundled geometry model.

use wkt_parser::{Geometry, parse_geometry};

fn main() {
    let inputs = [
        "POINT(1 2)",
        "SRID=4326;LINESTRING Z(0 0 10, 1 1 20, 2 2 30)",
        "POLYGON((0 0, 4 0, 4 4, 0 4, 0 0),(1 1, 2 1, 2 2, 1 1))",
        "MULTIPOINT(1 2, (3 4))",
        "GEOMETRYCOLLECTION(POINT(1 2 3), LINESTRING(0 0 0, 1 1 1))",
        "MULTIPOLYGON EMPTY",
    ];

    for input in inputs {
        match parse_geometry(input) {
            Ok(geometry) => {
                println!("{input}");
                println!(
                    "  type: {}, dimension: {}, srid: {:?}, points: {}",
                    geometry.type_name(),
                    geometry.dimension(),
                    geometry.srid(),
                    geometry.num_points()
                );
                if let Geometry::Polygon(polygon) = &geometry {
                    println!("  rings: {}", polygon.rings.len());
                }
            }
            Err(e) => println!("{input}: {e}"),
        }
    }
}
