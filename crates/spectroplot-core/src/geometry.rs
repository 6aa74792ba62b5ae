//! Geometric primitives: Point, Rect.
//!
//! The same [`Rect`] shape describes both a data-space bounding box (whose
//! width or height may be negative to encode an axis flip) and a pixel-space
//! destination rectangle.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A rectangle defined by an origin and a signed size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of the origin corner
    pub x: f64,
    /// Y position of the origin corner
    pub y: f64,
    /// Width (negative flips the horizontal axis)
    pub width: f64,
    /// Height (negative flips the vertical axis)
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from two corner points.
    #[must_use]
    pub fn from_points(origin: Point, opposite: Point) -> Self {
        Self::new(
            origin.x,
            origin.y,
            opposite.x - origin.x,
            opposite.y - origin.y,
        )
    }

    /// Get the origin point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// X coordinate of the corner opposite the origin.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the corner opposite the origin.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the (unsigned) area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    /// Get the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same region with non-negative width and height.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    /// True when the rectangle spans no area along at least one axis, or
    /// when any component is not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0
            || self.height == 0.0
            || !(self.x.is_finite()
                && self.y.is_finite()
                && self.width.is_finite()
                && self.height.is_finite())
    }

    /// Check if a point is inside this rectangle (edges inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        let r = self.normalized();
        point.x >= r.x && point.x <= r.right() && point.y >= r.y && point.y <= r.bottom()
    }

    /// Check if this rectangle intersects another.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
    }

    /// Get the intersection with another rectangle.
    ///
    /// The result is normalized. Returns `None` when the rectangles only
    /// touch or do not overlap at all.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let a = self.normalized();
        let b = other.normalized();
        let x = a.x.max(b.x);
        let y = a.y.max(b.y);
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());
        Some(Self::new(x, y, right - x, bottom - y))
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
