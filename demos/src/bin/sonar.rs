//! Depth sweep: count measurements that increase, raw and smoothed over a
//! three-measurement sliding window.

use std::error::Error;

use gridkit_collections::Windows;

const INPUT: &str = "\
199
200
208
210
200
207
240
269
260
263";

fn increases(depths: &[i32], window: usize) -> usize {
    let sums: Vec<i32> = Windows::new(depths, window)
        .map(|w| w.iter().sum())
        .collect();
    Windows::new(&sums, 2).filter(|pair| pair[1] > pair[0]).count()
}

fn main() -> Result<(), Box<dyn Error>> {
    let depths = INPUT
        .lines()
        .map(|line| line.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()?;

    println!("Part 1: {}", increases(&depths, 1));
    println!("Part 2: {}", increases(&depths, 3));
    Ok(())
}
