//! Finding the `k` points closest to the origin.
//!
//! Points are ranked by squared Euclidean distance, `x² + y²`. Squaring preserves the order of
//! non-negative distances, so this ranks points exactly like the true distance would while
//! staying in integer arithmetic.
//!
//! # Examples
//!
//! ```
//! use heaps::closest::{k_closest, Point};
//!
//! let points = [Point::new(3, 3), Point::new(1, 1), Point::new(2, 2)];
//! assert_eq!(k_closest(&points, 2), vec![Point::new(1, 1), Point::new(2, 2)]);
//!
//! // Asking for more points than there are returns all of them.
//! assert_eq!(k_closest(&points, 10).len(), 3);
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::heap::{BinaryHeap, Heap};

/// Errors building a [`Point`] from loosely typed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// The input didn't have exactly two coordinates.
    #[error("a point needs exactly 2 coordinates, found {found}")]
    Arity {
        /// How many coordinates there were.
        found: usize,
    },
    /// A coordinate wasn't an integer.
    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] ParseIntError),
}

/// A point on the integer grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: i32,
    /// The vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Builds the point `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The square of this point's distance to the origin. Computed in `u64` so every pair of
    /// `i32` coordinates fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaps::closest::Point;
    ///
    /// assert_eq!(Point::new(-3, 4).squared_distance(), 25);
    /// assert_eq!(Point::new(i32::MIN, i32::MIN).squared_distance(), 1 << 63);
    /// ```
    pub fn squared_distance(&self) -> u64 {
        let x = u64::from(self.x.unsigned_abs());
        let y = u64::from(self.y.unsigned_abs());
        x * x + y * y
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl TryFrom<&[i32]> for Point {
    type Error = PointError;

    fn try_from(coordinates: &[i32]) -> Result<Self, Self::Error> {
        match *coordinates {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(PointError::Arity {
                found: coordinates.len(),
            }),
        }
    }
}

/// Parses two whitespace separated integers, e.g. `"3 -4"`.
impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coordinates = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<i32>, _>>()?;
        Self::try_from(coordinates.as_slice())
    }
}

/// Formats as `x y`, the inverse of [`FromStr`].
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// A point along with its cached squared distance.
struct Candidate {
    point: Point,
    distance: u64,
}

impl From<&Point> for Candidate {
    fn from(point: &Point) -> Self {
        Self {
            point: *point,
            distance: point.squared_distance(),
        }
    }
}

/// Returns the `k` points of `points` closest to the origin, nearest first.
///
/// If `k` is larger than the number of points then every point is returned. Points the same
/// distance away may come back in any order, and when `k` cuts through such a group any of them
/// may be chosen.
pub fn k_closest(points: &[Point], k: usize) -> Vec<Point> {
    let mut heap = BinaryHeap::min_by(|a: &Candidate, b: &Candidate| a.distance.cmp(&b.distance));
    heap.extend(points.iter().map(Candidate::from));

    let closest: Vec<_> = heap
        .into_sorted_iter()
        .take(k)
        .map(|candidate| candidate.point)
        .collect();
    debug!(
        "selected {} of {} points closest to the origin (k = {})",
        closest.len(),
        points.len(),
        k
    );
    closest
}
