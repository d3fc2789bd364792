//! The [`Point`] type — a coordinate carrying a payload value.

use gridkit_collections::Keyed;

use crate::geom::Coord;

/// A grid cell: a position plus an arbitrary payload.
///
/// Identity is positional. Two points are *on* each other when x and y match,
/// whatever their payloads; *neighboring* means one of the eight surrounding
/// cells, never the same cell.
///
/// Grid-resident points are reached and mutated through their [`Grid`]
/// (arena-style), so every holder of the grid observes updates. Transient
/// points — probes traced along a boundary, candidate moves — are value
/// copies made with [`Clone`] or the `with_*` builders.
///
/// [`Grid`]: crate::grid::Grid
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: i32,
    pub y: i32,
    pub value: T,
}

impl<T> Point<T> {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, value: T) -> Self {
        Self { x, y, value }
    }

    /// The positional identity of this point.
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Positional equality; payloads are ignored.
    #[inline]
    pub fn is_on<U>(&self, other: &Point<U>) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Whether `other` occupies one of the eight surrounding cells.
    ///
    /// A point is not neighboring itself.
    #[inline]
    pub fn is_neighboring<U>(&self, other: &Point<U>) -> bool {
        self.coord().chebyshev_distance(other.coord()) == 1
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan_distance_to<U>(&self, other: &Point<U>) -> i32 {
        self.coord().manhattan_distance(other.coord())
    }

    /// Move the point in place and return it for chaining.
    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// The (dx, dy) translation vector from `other` to this point.
    #[inline]
    pub fn difference_with<U>(&self, other: &Point<U>) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }

    /// Copy with the x coordinate replaced (builder).
    #[inline]
    pub fn with_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    /// Copy with the y coordinate replaced (builder).
    #[inline]
    pub fn with_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    /// Copy with the payload replaced (builder).
    #[inline]
    pub fn with_value(mut self, value: T) -> Self {
        self.value = value;
        self
    }
}

impl<T> Keyed for Point<T> {
    type Key = Coord;

    #[inline]
    fn key(&self) -> Coord {
        self.coord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_on_ignores_payload() {
        let a = Point::new(2, 3, 'x');
        let b = Point::new(2, 3, 'y');
        let c = Point::new(3, 3, 'x');
        assert!(a.is_on(&b));
        assert!(!a.is_on(&c));
    }

    #[test]
    fn neighboring_excludes_self_and_distance_two() {
        let center = Point::new(0, 0, 0);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let other = Point::new(dx, dy, 0);
                let expected = !(dx == 0 && dy == 0);
                assert_eq!(center.is_neighboring(&other), expected, "({dx}, {dy})");
            }
        }
        assert!(!center.is_neighboring(&Point::new(2, 0, 0)));
        assert!(!center.is_neighboring(&Point::new(2, 2, 0)));
    }

    #[test]
    fn translate_chains_and_mutates() {
        let mut p = Point::new(1, 1, ());
        p.translate(2, 0).translate(0, -3);
        assert_eq!(p.coord(), crate::Coord::new(3, -2));
    }

    #[test]
    fn builders_preserve_unset_fields() {
        let p = Point::new(4, 5, 9);
        let q = p.clone().with_x(0);
        assert_eq!((q.x, q.y, q.value), (0, 5, 9));
        let r = p.clone().with_value(1);
        assert_eq!((r.x, r.y, r.value), (4, 5, 1));
        // The source is untouched.
        assert_eq!((p.x, p.y, p.value), (4, 5, 9));
    }

    #[test]
    fn difference_is_the_vector_from_other() {
        let head = Point::new(4, 1, ());
        let tail = Point::new(2, 2, ());
        assert_eq!(head.difference_with(&tail), (2, -1));
        assert_eq!(tail.difference_with(&head), (-2, 1));
    }

    #[test]
    fn manhattan_distance() {
        let a = Point::new(0, 0, ());
        let b = Point::new(-3, 4, ());
        assert_eq!(a.manhattan_distance_to(&b), 7);
    }
}
