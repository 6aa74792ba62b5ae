//! Coordinate mapping from data space to pixel space.

use spectroplot_core::{Point, Rect};

/// Map the data point `(x, y)` from `data` into `pixel`.
///
/// A pure affine transform: the point's fractional position inside `data` is
/// scaled into `pixel`. No clamping is applied, so points outside `data` land
/// outside `pixel` and rely on the canvas clip. A zero-width or zero-height
/// `data` rect yields infinite or NaN coordinates, never a panic.
#[must_use]
pub fn map_point(data: Rect, pixel: Rect, x: f64, y: f64) -> Point {
    let rx = (x - data.x) / data.width;
    let ry = (y - data.y) / data.height;
    Point::new(pixel.width * rx + pixel.x, pixel.height * ry + pixel.y)
}

/// A data rect bound to a pixel rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataTransform {
    data: Rect,
    pixel: Rect,
}

impl DataTransform {
    /// Bind `data` to `pixel`.
    #[must_use]
    pub const fn new(data: Rect, pixel: Rect) -> Self {
        Self { data, pixel }
    }

    /// Source rect in data space.
    #[must_use]
    pub const fn data(&self) -> Rect {
        self.data
    }

    /// Destination rect in pixel space.
    #[must_use]
    pub const fn pixel(&self) -> Rect {
        self.pixel
    }

    /// Map one data point, see [`map_point`].
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> Point {
        map_point(self.data, self.pixel, x, y)
    }

    /// Map paired samples in index order.
    pub fn apply_all<'a>(
        &'a self,
        xs: &'a [f64],
        ys: &'a [f64],
    ) -> impl Iterator<Item = Point> + 'a {
        xs.iter().zip(ys).map(move |(&x, &y)| self.apply(x, y))
    }
}
