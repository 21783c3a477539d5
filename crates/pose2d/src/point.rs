use std::{fmt, ops::{Add, Mul, Neg, Sub}};

use crate::error::{GeometryError, Result};

/// A 2D coordinate.
///
/// The integer ([`Point2DInt`]) and floating ([`Point2D`]) variants each keep
/// arithmetic closed over their own coordinate type. Moving between them is
/// always explicit: [`Point::to_f64`], [`Point::floor`] or [`Point::round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

/// Pixel coordinate.
pub type Point2DInt = Point<i32>;

/// Sub-pixel coordinate.
pub type Point2D = Point<f64>;

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Point<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T: Copy> Point<T> {
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

// --- Sequence conversion ---

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(point: Point<T>) -> Self {
        (point.x, point.y)
    }
}

impl<T> IntoIterator for Point<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

// --- Arithmetic operators ---

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Point<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

// Scalar multiply
impl<T: Mul<Output = T> + Copy> Mul<T> for Point<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Mul<Output = T> + Copy> Point<T> {
    pub fn scale(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Copy> Point<T> {
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

// --- Integer operations ---

/// Quotient rounded toward negative infinity.
///
/// `None` for a zero divisor and for `i32::MIN / -1`, whose quotient is not
/// representable.
fn floor_div(value: i32, divisor: i32) -> Option<i32> {
    let quotient = value.checked_div(divisor)?;
    if value % divisor != 0 && ((value < 0) != (divisor < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

impl Point<i32> {
    /// Squared euclidean distance, widened so it cannot overflow.
    pub fn squared_distance(self, other: Self) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }

    /// Component-wise division rounded toward negative infinity.
    ///
    /// Fails with `Overflow` when a quotient does not fit in `i32`, which only
    /// happens for `i32::MIN` divided by `-1`.
    pub fn divide_floor(self, scalar: i32) -> Result<Self> {
        if scalar == 0 {
            log::debug!("rejected floor division of {} by zero", self);
            return Err(GeometryError::DivisionByZero);
        }
        match (floor_div(self.x, scalar), floor_div(self.y, scalar)) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => {
                log::debug!("floor division of {} by {} overflows", self, scalar);
                Err(GeometryError::Overflow)
            }
        }
    }

    /// Real-valued division; the result is promoted to the floating variant.
    pub fn divide(self, scalar: i32) -> Result<Point<f64>> {
        if scalar == 0 {
            log::debug!("rejected division of {} by zero", self);
            return Err(GeometryError::DivisionByZero);
        }
        let scalar = f64::from(scalar);
        Ok(Point {
            x: f64::from(self.x) / scalar,
            y: f64::from(self.y) / scalar,
        })
    }

    pub fn to_f64(self) -> Point<f64> {
        Point {
            x: f64::from(self.x),
            y: f64::from(self.y),
        }
    }
}

impl From<Point<i32>> for Point<f64> {
    fn from(point: Point<i32>) -> Self {
        point.to_f64()
    }
}

// --- Float operations ---

impl Point<f64> {
    pub fn squared_distance(self, other: Self) -> f64 {
        (other - self).length_squared()
    }

    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Component-wise division with each quotient floored.
    pub fn divide_floor(self, scalar: f64) -> Result<Self> {
        Ok(self.divide(scalar)?.map(f64::floor))
    }

    pub fn divide(self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            log::debug!("rejected division of {} by zero", self);
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self {
            x: self.x / scalar,
            y: self.y / scalar,
        })
    }

    /// Round each coordinate down onto the pixel grid. Out-of-range values saturate.
    pub fn floor(self) -> Point<i32> {
        Point {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
        }
    }

    /// Round each coordinate to the nearest pixel. Out-of-range values saturate.
    pub fn round(self) -> Point<i32> {
        Point {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_signs() {
        assert_eq!(floor_div(7, 2), Some(3));
        assert_eq!(floor_div(-7, 2), Some(-4));
        assert_eq!(floor_div(7, -2), Some(-4));
        assert_eq!(floor_div(-7, -2), Some(3));
        assert_eq!(floor_div(-8, 2), Some(-4));
    }

    #[test]
    fn test_floor_div_min_value() {
        assert_eq!(floor_div(i32::MIN, 1), Some(i32::MIN));
        assert_eq!(floor_div(i32::MIN, 2), Some(i32::MIN / 2));
        assert_eq!(floor_div(i32::MIN, -1), None);
        assert_eq!(floor_div(5, 0), None);
    }
}
