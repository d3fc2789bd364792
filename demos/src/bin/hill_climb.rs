//! Heightmap route finding: fewest steps from the trailhead to the summit,
//! climbing at most one unit per step.

use gridkit_core::{Coord, Grid};
use gridkit_paths::{DijkstraOptions, UNREACHABLE, backtrace, dijkstra};

const INPUT: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

fn parse(input: &str) -> (Grid<i32>, Coord, Coord) {
    let mut start = Coord::ZERO;
    let mut end = Coord::ZERO;
    let rows = input
        .lines()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    'S' => {
                        start = Coord::new(x as i32, y as i32);
                        0
                    }
                    'E' => {
                        end = Coord::new(x as i32, y as i32);
                        25
                    }
                    c => c as i32 - 'a' as i32,
                })
                .collect()
        })
        .collect();
    (Grid::from_rows(rows), start, end)
}

fn main() {
    let (grid, start, end) = parse(INPUT);

    let climb = DijkstraOptions::new()
        .neighbor_filter(|next, current| next.value - current.value <= 1)
        .target(move |p| p.coord() == end);
    let from_start = dijkstra(&grid, start, &climb);
    println!("Part 1: {}", from_start[&end].distance);
    println!("  route: {} points", backtrace(&from_start, end).len());

    // Walk downhill from the summit instead: one search covers every
    // possible trailhead.
    let descend =
        DijkstraOptions::new().neighbor_filter(|next, current| current.value - next.value <= 1);
    let from_end = dijkstra(&grid, end, &descend);
    let best = grid
        .iter()
        .filter(|p| p.value == 0)
        .map(|p| from_end[&p.coord()].distance)
        .filter(|&d| d != UNREACHABLE)
        .min()
        .unwrap_or(UNREACHABLE);
    println!("Part 2: {best}");
}
