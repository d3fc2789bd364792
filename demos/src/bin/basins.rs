//! Smoke-basin survey: risk levels of low points, then the three largest
//! basins found by flood fill.

use gridkit_collections::Queue;
use gridkit_core::{Grid, Point};

const INPUT: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

fn parse(input: &str) -> Grid<i32> {
    let rows = input
        .lines()
        .map(|line| line.chars().filter_map(|c| c.to_digit(10)).map(|d| d as i32).collect())
        .collect();
    Grid::from_rows(rows)
}

fn low_points(grid: &Grid<i32>) -> Vec<&Point<i32>> {
    grid.iter()
        .filter(|p| {
            grid.neighbors(p.coord(), false)
                .iter()
                .all(|n| n.value > p.value)
        })
        .collect()
}

/// Flood out from a low point, stopping at height-9 ridges. The basin is the
/// queue's full visitation history.
fn basin_size(grid: &Grid<i32>, low: &Point<i32>) -> usize {
    let mut queue: Queue<Point<i32>> = Queue::new();
    queue.push_unique(low.clone());

    while let Some(point) = queue.pop() {
        for neighbor in grid.neighbors(point.coord(), false) {
            if neighbor.value != 9 {
                queue.push_unique((*neighbor).clone());
            }
        }
    }

    queue.history().len()
}

fn main() {
    let grid = parse(INPUT);
    let lows = low_points(&grid);

    let risk: i32 = lows.iter().map(|p| p.value + 1).sum();
    println!("Part 1: {risk}");

    let mut sizes: Vec<usize> = lows.iter().map(|low| basin_size(&grid, low)).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    let product: usize = sizes.iter().take(3).product();
    println!("Part 2: {product}");
}
