//! **gridkit-paths** — weighted shortest-path search over gridkit grids.
//!
//! Provides a single-source Dijkstra distance map over a
//! [`Grid`](gridkit_core::Grid), configured through [`DijkstraOptions`]:
//!
//! - an early-exit target predicate,
//! - a per-point entry cost (uniform 1 when absent, making the search
//!   equivalent to BFS),
//! - a neighbor filter injecting domain traversability rules.
//!
//! Domain semantics are composed in through the options rather than inherited
//! from the grid, so one engine serves heightmaps, risk maps and flood fills
//! alike. Path reconstruction walks the resulting map with [`backtrace`].

pub mod dijkstra;

pub use dijkstra::{DijkstraOptions, PathNode, UNREACHABLE, backtrace, dijkstra};
