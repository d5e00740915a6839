#![deny(clippy::all)]

pub mod point;
pub mod triangle;

pub use point::{ParsePointError, Point};

/// Data type used for coordinates
pub type Position = i32;
