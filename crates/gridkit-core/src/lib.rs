//! **gridkit-core** — grid, point and interval geometry for puzzle maps.
//!
//! This crate provides the foundational types used across the *gridkit*
//! ecosystem: a coordinate key, closed integer intervals and axis-aligned
//! boxes, payload-carrying points, and a jagged-tolerant 2D grid with
//! neighbor queries.

pub mod geom;
pub mod grid;
pub mod point;

pub use geom::{Coord, Range, RangeIter, Rectangle};
pub use grid::{Direction, Grid};
pub use point::Point;
