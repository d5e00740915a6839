//! A point in the non-negative quadrant of the plane.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use thiserror::Error;

use crate::Position;

/// A location in 2D space whose coordinates are never negative.
///
/// Negative inputs are never an error: construction clamps them to zero,
/// and setters or moves that would leave the quadrant are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: Position,
    y: Position,
}

impl Point {
    /// Build a new point from coordinates, replacing a negative
    /// coordinate with 0.
    pub fn new(x: Position, y: Position) -> Self {
        Self {
            x: x.max(0),
            y: y.max(0),
        }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn x(&self) -> Position {
        self.x
    }

    pub fn y(&self) -> Position {
        self.y
    }

    /// Set the x coordinate. Negative values are ignored.
    pub fn set_x(&mut self, x: Position) {
        if x >= 0 {
            self.x = x;
        } else {
            trace!("Ignoring x={} for {}", x, self);
        }
    }

    /// Set the y coordinate. Negative values are ignored.
    pub fn set_y(&mut self, y: Position) {
        if y >= 0 {
            self.y = y;
        } else {
            trace!("Ignoring y={} for {}", y, self);
        }
    }

    /// Above means a strictly larger y.
    pub fn is_above(&self, other: &Point) -> bool {
        self.y > other.y
    }

    pub fn is_under(&self, other: &Point) -> bool {
        self.y < other.y
    }

    pub fn is_left(&self, other: &Point) -> bool {
        self.x < other.x
    }

    pub fn is_right(&self, other: &Point) -> bool {
        self.x > other.x
    }

    /// Shift this point by the given offsets.
    ///
    /// The move happens on both axes or not at all: if either coordinate
    /// would become negative (or overflow), the point is left unchanged.
    pub fn move_by(&mut self, dx: Position, dy: Position) {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) if x >= 0 && y >= 0 => {
                self.x = x;
                self.y = y;
            }
            _ => trace!("Rejected move of {} by ({}, {})", self, dx, dy),
        }
    }

    /// The midpoint between two points, rounded towards zero on each axis.
    pub fn middle(&self, other: &Point) -> Point {
        let mid = |a: Position, b: Position| ((i64::from(a) + i64::from(b)) / 2) as Position;
        Point {
            x: mid(self.x, other.x),
            y: mid(self.y, other.y),
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}
