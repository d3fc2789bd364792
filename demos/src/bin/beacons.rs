//! Sensor sweep: positions a distress beacon cannot occupy, then the one
//! uncovered position inside the search bounds.
//!
//! Every sensor covers a Manhattan diamond. The distress beacon, being the
//! only uncovered position, must sit one step outside some sensor's reach, so
//! part two traces each diamond's outer boundary instead of scanning the
//! whole area.

use std::collections::HashSet;
use std::error::Error;

use gridkit_core::{Point, Range, Rectangle};

const INPUT: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

const SWEEP_ROW: i32 = 10;
const SEARCH_MAX: i32 = 20;

struct Sensor {
    position: Point<i32>,
    beacon: Point<i32>,
    reach: i32,
    x_bound: Range,
    y_bound: Range,
}

impl Sensor {
    fn new(position: Point<i32>, beacon: Point<i32>) -> Self {
        let reach = position.manhattan_distance_to(&beacon);
        Self {
            x_bound: Range::new(position.x - reach, position.x + reach),
            y_bound: Range::new(position.y - reach, position.y + reach),
            position,
            beacon,
            reach,
        }
    }

    fn covers(&self, p: &Point<i32>) -> bool {
        self.position.manhattan_distance_to(p) <= self.reach
    }

    /// The x positions this sensor rules out in a row, if any.
    fn coverage_in_row(&self, y: i32) -> Option<Range> {
        if !self.y_bound.contains_value(y) {
            return None;
        }
        let slack = self.reach - (self.position.y - y).abs();
        Some(Range::new(self.position.x - slack, self.position.x + slack))
    }

    /// Positions one step outside the reach, clipped to `bounds`.
    fn boundary_in(&self, bounds: Rectangle) -> Vec<Point<i32>> {
        let top = self.position.clone().with_y(self.y_bound.start - 1);
        let left = self.position.clone().with_x(self.x_bound.start - 1);
        let bottom = self.position.clone().with_y(self.y_bound.end + 1);
        let right = self.position.clone().with_x(self.x_bound.end + 1);
        let legs = [
            (top.clone(), left.clone(), (-1, 1)),
            (left, bottom.clone(), (1, 1)),
            (bottom, right.clone(), (1, -1)),
            (right, top, (-1, -1)),
        ];

        let mut boundary = Vec::new();
        for (from, to, (dx, dy)) in legs {
            let mut probe = from;
            while !probe.is_on(&to) {
                if bounds.contains(probe.coord()) {
                    boundary.push(probe.clone());
                }
                probe.translate(dx, dy);
            }
        }
        boundary
    }
}

fn parse(input: &str) -> Result<Vec<Sensor>, Box<dyn Error>> {
    let mut sensors = Vec::new();
    for line in input.lines() {
        let mut nums = Vec::new();
        let mut cur = String::new();
        for ch in line.chars() {
            if ch.is_ascii_digit() || ch == '-' {
                cur.push(ch);
            } else if !cur.is_empty() {
                nums.push(cur.parse::<i32>()?);
                cur.clear();
            }
        }
        if !cur.is_empty() {
            nums.push(cur.parse::<i32>()?);
        }
        let [sx, sy, bx, by] = nums[..] else {
            return Err(format!("malformed sensor line: {line}").into());
        };
        sensors.push(Sensor::new(Point::new(sx, sy, 0), Point::new(bx, by, 0)));
    }
    Ok(sensors)
}

fn impossible_positions_in_row(sensors: &[Sensor], y: i32) -> usize {
    let mut ruled_out: HashSet<i32> = HashSet::new();
    for sensor in sensors {
        if let Some(range) = sensor.coverage_in_row(y) {
            for x in range {
                ruled_out.insert(x);
            }
        }
    }
    for sensor in sensors {
        if sensor.beacon.y == y {
            ruled_out.remove(&sensor.beacon.x);
        }
    }
    ruled_out.len()
}

fn distress_beacon(sensors: &[Sensor], bounds: Rectangle) -> Option<Point<i32>> {
    sensors
        .iter()
        .flat_map(|sensor| sensor.boundary_in(bounds))
        .find(|candidate| sensors.iter().all(|sensor| !sensor.covers(candidate)))
}

fn main() -> Result<(), Box<dyn Error>> {
    let sensors = parse(INPUT)?;

    println!("Part 1: {}", impossible_positions_in_row(&sensors, SWEEP_ROW));

    let bounds = Rectangle::new(0, SEARCH_MAX, 0, SEARCH_MAX);
    let beacon = distress_beacon(&sensors, bounds).ok_or("no uncovered position")?;
    let tuning = beacon.x as i64 * 4_000_000 + beacon.y as i64;
    println!("Part 2: {tuning}");
    Ok(())
}
