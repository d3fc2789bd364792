//! Bioluminescent energy cascade: every octopus above energy 9 flashes,
//! feeding its eight neighbours and possibly chaining.

use gridkit_collections::Queue;
use gridkit_core::{Coord, Grid};

const INPUT: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526";

fn parse(input: &str) -> Grid<i32> {
    let rows = input
        .lines()
        .map(|line| line.chars().filter_map(|c| c.to_digit(10)).map(|d| d as i32).collect())
        .collect();
    Grid::from_rows(rows)
}

/// Advance one step and return how many octopuses flashed.
fn step(grid: &mut Grid<i32>) -> usize {
    let mut flashing: Queue<Coord> = Queue::new();

    for p in grid.iter_mut() {
        p.value += 1;
    }
    let primed: Vec<Coord> = grid.iter().filter(|p| p.value > 9).map(|p| p.coord()).collect();
    for pos in primed {
        flashing.push_unique(pos);
    }

    while let Some(pos) = flashing.pop() {
        let spill: Vec<Coord> = grid
            .neighbors(pos, true)
            .iter()
            .map(|p| p.coord())
            .collect();
        for npos in spill {
            let point = grid.get_mut(npos.x, npos.y);
            point.value += 1;
            if point.value > 9 {
                flashing.push_unique(npos);
            }
        }
    }

    for p in grid.iter_mut() {
        if p.value > 9 {
            p.value = 0;
        }
    }
    flashing.history().len()
}

fn main() {
    let mut grid = parse(INPUT);
    let population = grid.iter().count();

    let mut total = 0;
    let mut synchronized_at = None;
    let mut n = 0;
    while synchronized_at.is_none() || n < 100 {
        let flashed = step(&mut grid);
        n += 1;
        if n <= 100 {
            total += flashed;
        }
        if flashed == population && synchronized_at.is_none() {
            synchronized_at = Some(n);
        }
    }

    println!("Part 1: {total}");
    println!("Part 2: {}", synchronized_at.unwrap_or_default());
}
