//! Comparing the sides of a triangle given by three points.

use itertools::Itertools;

use crate::point::Point;

/// Side lengths closer than this are treated as equal.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Lengths of the sides `ab`, `bc` and `ca`.
pub fn side_lengths(a: &Point, b: &Point, c: &Point) -> [f64; 3] {
    [a.distance(b), b.distance(c), c.distance(a)]
}

/// Check whether all three sides have the same length, up to `tolerance`.
pub fn is_equilateral(a: &Point, b: &Point, c: &Point, tolerance: f64) -> bool {
    side_lengths(a, b, c)
        .iter()
        .tuple_combinations()
        .all(|(s, o)| (s - o).abs() < tolerance)
}
