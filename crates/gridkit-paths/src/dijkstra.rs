//! Single-source Dijkstra distance maps over a [`Grid`].

use std::collections::{HashMap, HashSet};

use gridkit_collections::PriorityQueue;
use gridkit_core::{Coord, Grid, Point};

/// Sentinel distance for points the search never reached.
///
/// Distance arithmetic saturates at this value, so relaxation through an
/// unreached point can never produce a winning distance.
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-point search result: best known distance and the predecessor on the
/// shortest path, when one exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub distance: i32,
    pub visited_from: Option<Coord>,
}

/// Configuration hooks for [`dijkstra`]. All three are optional.
///
/// ```
/// use gridkit_core::{Coord, Grid};
/// use gridkit_paths::{DijkstraOptions, dijkstra};
///
/// let grid = Grid::from_rows(vec![vec![1, 2], vec![4, 1]]);
/// let options = DijkstraOptions::new()
///     .weight(|p| p.value)
///     .target(|p| p.coord() == Coord::new(1, 1));
/// let distances = dijkstra(&grid, Coord::ZERO, &options);
/// assert_eq!(distances[&Coord::new(1, 1)].distance, 3);
/// ```
pub struct DijkstraOptions<'a, T> {
    target: Option<Box<dyn Fn(&Point<T>) -> bool + 'a>>,
    weight: Option<Box<dyn Fn(&Point<T>) -> i32 + 'a>>,
    neighbor_filter: Option<Box<dyn Fn(&Point<T>, &Point<T>) -> bool + 'a>>,
}

impl<'a, T> DijkstraOptions<'a, T> {
    pub fn new() -> Self {
        Self {
            target: None,
            weight: None,
            neighbor_filter: None,
        }
    }

    /// Halt the search the moment the popped point satisfies `f`.
    ///
    /// Without a target the search runs to exhaustion over all reachable
    /// points.
    pub fn target(mut self, f: impl Fn(&Point<T>) -> bool + 'a) -> Self {
        self.target = Some(Box::new(f));
        self
    }

    /// Cost of *entering* a point from its predecessor. Must be positive.
    ///
    /// Without a weight every step costs 1, the unweighted shortest path.
    pub fn weight(mut self, f: impl Fn(&Point<T>) -> i32 + 'a) -> Self {
        self.weight = Some(Box::new(f));
        self
    }

    /// Gate which adjacent cells are traversable, as `f(neighbor, current)`.
    ///
    /// Without a filter all in-bounds neighbors are allowed. Domain rules
    /// like "climb at most one unit" are injected here.
    pub fn neighbor_filter(mut self, f: impl Fn(&Point<T>, &Point<T>) -> bool + 'a) -> Self {
        self.neighbor_filter = Some(Box::new(f));
        self
    }
}

impl<T> Default for DijkstraOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-source shortest-path search over the grid's cardinal adjacency.
///
/// Every grid point is seeded into the priority queue, the start at distance
/// 0 and the rest at [`UNREACHABLE`]. A neighbor's entry is relaxed and
/// re-queued only when the new distance is strictly smaller than its recorded
/// best, so the queue transiently holds duplicate entries per coordinate;
/// stale ones are skipped through the visited set when popped.
///
/// The returned map covers every point in the grid. Points the search never
/// reached keep `distance == UNREACHABLE` and no predecessor.
pub fn dijkstra<T>(
    grid: &Grid<T>,
    start: Coord,
    options: &DijkstraOptions<'_, T>,
) -> HashMap<Coord, PathNode> {
    let mut queue = PriorityQueue::new(Vec::new());
    let mut path_info: HashMap<Coord, PathNode> = HashMap::new();
    let mut visited: HashSet<Coord> = HashSet::new();

    for point in grid.iter() {
        let pos = point.coord();
        let distance = if pos == start { 0 } else { UNREACHABLE };
        queue.push(pos, distance);
        path_info.insert(
            pos,
            PathNode {
                pos,
                distance,
                visited_from: None,
            },
        );
    }

    while let Some(item) = queue.pop() {
        let pos = item.value;
        if visited.contains(&pos) {
            continue;
        }
        let point = grid.get(pos.x, pos.y);

        if let Some(is_target) = &options.target {
            if is_target(point) {
                break;
            }
        }

        visited.insert(pos);

        for neighbor in grid.neighbors(pos, false) {
            if let Some(filter) = &options.neighbor_filter {
                if !filter(neighbor, point) {
                    continue;
                }
            }
            let npos = neighbor.coord();
            if visited.contains(&npos) {
                continue;
            }
            let Some(entry) = path_info.get_mut(&npos) else {
                continue;
            };
            let weight = options.weight.as_ref().map_or(1, |w| w(neighbor));
            let tentative = item.priority.saturating_add(weight);
            if tentative < entry.distance {
                entry.distance = tentative;
                entry.visited_from = Some(pos);
                queue.push(npos, tentative);
            }
        }
    }

    path_info
}

/// Reconstruct the path ending at `to` by walking `visited_from` backward
/// until a point with no predecessor, returned start-first.
///
/// An unreached `to` has no predecessor and yields only itself; check its
/// `distance` against [`UNREACHABLE`] before trusting the result. An unknown
/// `to` yields an empty path.
pub fn backtrace(path_info: &HashMap<Coord, PathNode>, to: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut cur = path_info.get(&to);
    while let Some(node) = cur {
        path.push(node.pos);
        cur = node.visited_from.and_then(|prev| path_info.get(&prev));
    }
    path.reverse();
    path
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_node_round_trip() {
        let node = PathNode {
            pos: Coord::new(3, 7),
            distance: 42,
            visited_from: Some(Coord::new(2, 7)),
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
