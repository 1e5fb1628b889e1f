//! Planar coordinates.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::distance::euclidean;

/// An immutable 2D coordinate.
///
/// # Examples
///
/// ```
/// use load_routing::models::Point;
///
/// let p: Point = "(3,4)".parse().unwrap();
/// assert_eq!(p, Point::new(3.0, 4.0));
/// assert!((p.distance_to(Point::ORIGIN) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        euclidean(*self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Why a coordinate string could not be read as a [`Point`].
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ParsePointError {
    #[error("expected 2 comma-separated coordinates, found {0}")]
    FieldCount(usize),
    #[error("invalid coordinate: {0}")]
    Number(#[from] ParseFloatError),
}

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parses `(x,y)`. Surrounding whitespace and whitespace around each
    /// coordinate are ignored; the parentheses are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner.strip_prefix('(').unwrap_or(inner);
        let inner = inner.strip_suffix(')').unwrap_or(inner);

        let coords: Vec<&str> = inner.split(',').collect();
        if coords.len() != 2 {
            return Err(ParsePointError::FieldCount(coords.len()));
        }

        let x = coords[0].trim().parse::<f64>()?;
        let y = coords[1].trim().parse::<f64>()?;
        Ok(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let p: Point = "(1.5,-2)".parse().expect("valid");
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
    }

    #[test]
    fn test_parse_inner_whitespace() {
        let p: Point = "  ( 3 , 4 ) ".parse().expect("valid");
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_parse_without_parens() {
        let p: Point = "7,8".parse().expect("valid");
        assert_eq!(p, Point::new(7.0, 8.0));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(
            "(1,2,3)".parse::<Point>(),
            Err(ParsePointError::FieldCount(3))
        );
        assert_eq!("(1)".parse::<Point>(), Err(ParsePointError::FieldCount(1)));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            "(a,2)".parse::<Point>(),
            Err(ParsePointError::Number(_))
        ));
        assert!(matches!(
            "(1,)".parse::<Point>(),
            Err(ParsePointError::Number(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let p = Point::new(-12.25, 40.0);
        let back: Point = p.to_string().parse().expect("valid");
        assert_eq!(p, back);
    }

    #[test]
    fn test_origin_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
        assert!(Point::ORIGIN.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
