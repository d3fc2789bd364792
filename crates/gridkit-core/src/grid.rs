//! The [`Grid`] type — an owned 2D arrangement of [`Point`]s.
//!
//! Rows may be jagged: bounds must be checked with [`Grid::has_point`] before
//! unchecked access with [`Grid::get`]. Neighbor queries tolerate jagged and
//! missing rows, returning only the points that exist.

use std::fmt;

use crate::geom::Coord;
use crate::point::Point;

/// Cardinal lookup directions for [`Grid::neighbor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// The (dx, dy) step this direction takes.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

// Neighbor offsets in query order. Callers rely on first-match semantics, so
// the order is part of the contract.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// A 2D arrangement of [`Point`]s indexed `rows[y][x]`, exclusively owning
/// its points for its lifetime.
///
/// Rows are not required to be the same length. Out-of-range access over a
/// jagged row is a defined "no such point" case for [`has_point`] and the
/// neighbor queries, and a loud contract violation for [`get`].
///
/// [`has_point`]: Grid::has_point
/// [`get`]: Grid::get
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    rows: Vec<Vec<Point<T>>>,
}

impl<T> Grid<T> {
    /// Create a grid from fully-built rows of points.
    ///
    /// The caller is trusted to have matched each point's coordinates to its
    /// position.
    pub fn new(rows: Vec<Vec<Point<T>>>) -> Self {
        Self { rows }
    }

    /// Create a grid from rows of payloads, assigning coordinates from the
    /// position of each value.
    pub fn from_rows(values: Vec<Vec<T>>) -> Self {
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, value)| Point::new(x as i32, y as i32, value))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Create a rectangular grid covering x in `0..=x_size` and y in
    /// `0..=y_size`, so the maximum coordinate itself is addressable.
    pub fn of_size(x_size: i32, y_size: i32, init: impl Fn(i32, i32) -> T) -> Self {
        let rows = (0..=y_size)
            .map(|y| (0..=x_size).map(|x| Point::new(x, y, init(x, y))).collect())
            .collect();
        Self { rows }
    }

    /// Bounds check tolerant of jagged rows: the row may not exist, or the
    /// column may exceed that row's length.
    #[inline]
    pub fn has_point(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.rows.get(y as usize) {
            Some(row) => (x as usize) < row.len(),
            None => false,
        }
    }

    /// The point at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when no such point exists. Callers must check
    /// [`has_point`](Grid::has_point) first.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &Point<T> {
        assert!(self.has_point(x, y), "no point at ({x}, {y})");
        &self.rows[y as usize][x as usize]
    }

    /// Mutable access to the point at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when no such point exists, like [`get`](Grid::get).
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut Point<T> {
        assert!(self.has_point(x, y), "no point at ({x}, {y})");
        &mut self.rows[y as usize][x as usize]
    }

    /// In-bounds adjacent points, in a fixed order: top, right, bottom, left,
    /// then (with diagonals) top-left, top-right, bottom-right, bottom-left.
    pub fn neighbors(&self, pos: Coord, include_diagonal: bool) -> Vec<&Point<T>> {
        let mut found = Vec::with_capacity(if include_diagonal { 8 } else { 4 });
        for (dx, dy) in CARDINAL {
            if self.has_point(pos.x + dx, pos.y + dy) {
                found.push(self.get(pos.x + dx, pos.y + dy));
            }
        }
        if include_diagonal {
            for (dx, dy) in DIAGONAL {
                if self.has_point(pos.x + dx, pos.y + dy) {
                    found.push(self.get(pos.x + dx, pos.y + dy));
                }
            }
        }
        found
    }

    /// The adjacent point in a single direction, or `None` when out of
    /// bounds.
    pub fn neighbor(&self, pos: Coord, direction: Direction) -> Option<&Point<T>> {
        let (dx, dy) = direction.offset();
        let (x, y) = (pos.x + dx, pos.y + dy);
        if self.has_point(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    /// Whether the coordinate lies on row 0, column 0, the last row, or the
    /// last column (measured against the first row's width).
    pub fn is_on_edge(&self, pos: Coord) -> bool {
        pos.y == 0
            || pos.x == 0
            || pos.y == self.rows.len() as i32 - 1
            || pos.x == self.rows.first().map_or(0, |row| row.len() as i32) - 1
    }

    /// Overwrite the value of this grid's own point at the incoming point's
    /// coordinate. A no-op when no such point exists.
    pub fn update_point(&mut self, point: &Point<T>)
    where
        T: Clone,
    {
        if self.has_point(point.x, point.y) {
            self.rows[point.y as usize][point.x as usize].value = point.value.clone();
        }
    }

    /// Sum of every point's payload.
    pub fn sum(&self) -> T
    where
        T: Copy + std::iter::Sum<T>,
    {
        self.iter().map(|p| p.value).sum()
    }

    /// Row-major iteration over all points.
    pub fn iter(&self) -> impl Iterator<Item = &Point<T>> {
        self.rows.iter().flatten()
    }

    /// Row-major mutable iteration over all points.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Point<T>> {
        self.rows.iter_mut().flatten()
    }

    /// The underlying rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Point<T>>] {
        &self.rows
    }

    /// Width of the first row (0 when the grid has no rows).
    #[inline]
    pub fn width(&self) -> i32 {
        self.rows.first().map_or(0, |row| row.len() as i32)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Whether the grid holds no points.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// One line per row, payloads concatenated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for point in row {
                write!(f, "{}", point.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<i32> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
    }

    #[test]
    fn from_rows_assigns_coordinates() {
        let grid = sample();
        assert_eq!(grid.get(2, 1).coord(), Coord::new(2, 1));
        assert_eq!(grid.get(2, 1).value, 6);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn of_size_includes_the_max_coordinate() {
        let grid = Grid::of_size(2, 1, |x, y| x + y);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.has_point(2, 1));
        assert_eq!(grid.get(2, 1).value, 3);
    }

    #[test]
    fn has_point_handles_jagged_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4]]);
        assert!(grid.has_point(2, 0));
        assert!(grid.has_point(0, 1));
        assert!(!grid.has_point(1, 1));
        assert!(!grid.has_point(0, 2));
        assert!(!grid.has_point(-1, 0));
        assert!(!grid.has_point(0, -1));
    }

    #[test]
    #[should_panic(expected = "no point at (3, 0)")]
    fn get_out_of_bounds_panics() {
        let grid = sample();
        let _ = grid.get(3, 0);
    }

    #[test]
    fn cardinal_neighbor_order() {
        let grid = sample();
        let values: Vec<i32> = grid
            .neighbors(Coord::new(1, 1), false)
            .iter()
            .map(|p| p.value)
            .collect();
        // top, right, bottom, left
        assert_eq!(values, vec![2, 6, 8, 4]);
    }

    #[test]
    fn diagonal_neighbor_order() {
        let grid = sample();
        let values: Vec<i32> = grid
            .neighbors(Coord::new(1, 1), true)
            .iter()
            .map(|p| p.value)
            .collect();
        // cardinals, then top-left, top-right, bottom-right, bottom-left
        assert_eq!(values, vec![2, 6, 8, 4, 1, 3, 9, 7]);
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        let grid = sample();
        let values: Vec<i32> = grid
            .neighbors(Coord::new(0, 0), true)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![2, 4, 5]);
    }

    #[test]
    fn adjacency_is_symmetric_away_from_boundaries() {
        let grid = sample();
        for p in grid.iter() {
            for n in grid.neighbors(p.coord(), true) {
                let back: Vec<Coord> = grid
                    .neighbors(n.coord(), true)
                    .iter()
                    .map(|q| q.coord())
                    .collect();
                assert!(back.contains(&p.coord()), "{} -> {}", p.coord(), n.coord());
            }
        }
    }

    #[test]
    fn single_direction_lookup() {
        let grid = sample();
        assert_eq!(
            grid.neighbor(Coord::new(1, 1), Direction::Top).map(|p| p.value),
            Some(2)
        );
        assert_eq!(
            grid.neighbor(Coord::new(1, 1), Direction::Left).map(|p| p.value),
            Some(4)
        );
        assert!(grid.neighbor(Coord::new(0, 0), Direction::Top).is_none());
        assert!(grid.neighbor(Coord::new(2, 2), Direction::Right).is_none());
    }

    #[test]
    fn edge_detection() {
        let grid = sample();
        assert!(grid.is_on_edge(Coord::new(0, 1)));
        assert!(grid.is_on_edge(Coord::new(1, 0)));
        assert!(grid.is_on_edge(Coord::new(2, 1)));
        assert!(grid.is_on_edge(Coord::new(1, 2)));
        assert!(!grid.is_on_edge(Coord::new(1, 1)));
    }

    #[test]
    fn update_point_overwrites_value_in_place() {
        let mut grid = sample();
        grid.update_point(&Point::new(1, 1, 50));
        assert_eq!(grid.get(1, 1).value, 50);
        // Missing coordinate: silently skipped.
        grid.update_point(&Point::new(9, 9, 99));
        assert_eq!(grid.sum(), 1 + 2 + 3 + 4 + 50 + 6 + 7 + 8 + 9);
    }

    #[test]
    fn mutation_through_the_grid_is_visible_everywhere() {
        let mut grid = sample();
        grid.get_mut(0, 0).value += 10;
        assert_eq!(grid.get(0, 0).value, 11);
        assert_eq!(grid.iter().next().unwrap().value, 11);
    }

    #[test]
    fn display_renders_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(grid.to_string(), "12\n34");
    }
}
