//! Well-Known Text (WKT) geometry parser.
//!
//! Parses WKT literals, optionally prefixed with `SRID=<int>;` and
//! optionally tagged `Z`, `M` or `ZM`, and hands the structure to a
//! [`Factory`] that builds the actual geometry values. Dimensionality
//! is taken from the modifier when present and otherwise inferred
//! from the number of ordinates in the first coordinate.
//!
//! # Quick start
//!
//! ## Parse into the bundled geometry model
//!
//! ```
//! use wkt_parser::{Dimension, parse_geometry};
//!
//! let geometry = parse_geometry("SRID=4326;POINT Z(1 2 3)").unwrap();
//! assert_eq!(geometry.type_name(), "POINT");
//! assert_eq!(geometry.dimension(), Dimension::Xyz);
//! assert_eq!(geometry.srid(), Some(4326));
//! ```
//!
//! ## Plug in your own factory
//!
//! ```
//! use wkt_parser::{Coordinates, Dimension, Factory, parse};
//!
//! /// Counts coordinate tuples instead of building geometries.
//! struct PointCounter;
//!
//! impl Factory for PointCounter {
//!     type Geometry = usize;
//!
//!     fn create_point(&mut self, _: Dimension, _: Option<i64>, c: Option<Coordinates>) -> usize {
//!         usize::from(c.is_some())
//!     }
//!     fn create_line_string(&mut self, _: Dimension, _: Option<i64>, p: Vec<usize>) -> usize {
//!         p.iter().sum()
//!     }
//!     fn create_linear_ring(&mut self, _: Dimension, _: Option<i64>, p: Vec<usize>) -> usize {
//!         p.iter().sum()
//!     }
//!     fn create_polygon(&mut self, _: Dimension, _: Option<i64>, r: Vec<usize>) -> usize {
//!         r.iter().sum()
//!     }
//!     fn create_multi_point(&mut self, _: Dimension, _: Option<i64>, p: Vec<usize>) -> usize {
//!         p.iter().sum()
//!     }
//!     fn create_multi_line_string(&mut self, _: Dimension, _: Option<i64>, l: Vec<usize>) -> usize {
//!         l.iter().sum()
//!     }
//!     fn create_multi_polygon(&mut self, _: Dimension, _: Option<i64>, p: Vec<usize>) -> usize {
//!         p.iter().sum()
//!     }
//!     fn create_geometry_collection(&mut self, _: Dimension, _: Option<i64>, g: Vec<usize>) -> usize {
//!         g.iter().sum()
//!     }
//! }
//!
//! let count = parse("MULTIPOINT(1 2, (3 4), 5 6)", &mut PointCounter).unwrap();
//! assert_eq!(count, 3);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod coord;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod parser;
pub mod scanner;
pub mod token;

pub use coord::{Coordinates, Dimension};
pub use error::{Expected, ParseError};
pub use factory::Factory;
pub use geometry::{
    Geometry, GeometryBuilder, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, parse_geometry,
};
pub use parser::{MAX_DEPTH, Parser, parse};
pub use scanner::{Scanner, tokenize};
pub use token::{Token, TokenKind, TokenValue};
