//! Path primitives for vector graphics.
//!
//! A path is a sequence of drawing commands that define an open polyline or
//! a closed polygon. Paths are built once in pixel space and replayed onto a
//! [`Canvas`](crate::Canvas) with [`Canvas::append_path`](crate::Canvas::append_path).

use crate::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(Point),
    /// Draw a line to a position.
    LineTo(Point),
    /// Close the current sub-path by drawing a line to its start.
    Close,
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` commands.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Create a path from a list of commands.
    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Start a new sub-path at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Extend the current sub-path with a straight segment to `point`.
    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Close the current sub-path.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Get the commands in this path.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the last command closes the path.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Vertices in command order (`Close` contributes nothing).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// Signed area of the polygon formed by the vertices (shoelace formula).
    ///
    /// The polygon is treated as closed whether or not the path ends with
    /// `Close`. Sub-paths are not separated; this is meant for single-contour
    /// paths such as a fill-between band.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let pts: Vec<Point> = self.points().collect();
        if pts.len() < 3 {
            return 0.0;
        }
        let twice: f64 = pts
            .iter()
            .zip(pts.iter().cycle().skip(1))
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum();
        twice / 2.0
    }

    /// Axis-aligned bounding box of the vertices.
    ///
    /// Returns `None` for an empty path or when any vertex is not finite.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut pts = self.points();
        let first = pts.next()?;
        let (mut min, mut max) = (first, first);
        for p in pts {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        if min.is_finite() && max.is_finite() {
            Some(Rect::from_points(min, max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path.line_to(Point::new(10.0, 10.0));
        path.line_to(Point::new(0.0, 10.0));
        path.close();
        path
    }

    #[test]
    fn test_path_new_is_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(!path.is_closed());
        assert_eq!(path.bounds(), None);
    }

    #[test]
    fn test_path_commands_in_order() {
        let path = square();
        assert_eq!(path.len(), 5);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(path.commands()[4], PathCommand::Close);
        assert!(path.is_closed());
    }

    #[test]
    fn test_path_points_skip_close() {
        let pts: Vec<Point> = square().points().collect();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn test_signed_area_follows_winding() {
        let cw = square();
        assert_eq!(cw.signed_area(), 100.0);

        let mut ccw = Path::new();
        ccw.move_to(Point::new(0.0, 0.0));
        ccw.line_to(Point::new(0.0, 10.0));
        ccw.line_to(Point::new(10.0, 10.0));
        ccw.line_to(Point::new(10.0, 0.0));
        ccw.close();
        assert_eq!(ccw.signed_area(), -100.0);
    }

    #[test]
    fn test_signed_area_of_bowtie_cancels() {
        let mut bowtie = Path::new();
        bowtie.move_to(Point::new(0.0, 0.0));
        bowtie.line_to(Point::new(10.0, 0.0));
        bowtie.line_to(Point::new(0.0, 10.0));
        bowtie.line_to(Point::new(10.0, 10.0));
        bowtie.close();
        assert_eq!(bowtie.signed_area(), 0.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(square().bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

        let mut bad = Path::new();
        bad.move_to(Point::new(f64::NAN, 0.0));
        assert_eq!(bad.bounds(), None);
    }

    #[test]
    fn test_from_commands() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(Point::ORIGIN),
            PathCommand::LineTo(Point::new(1.0, 1.0)),
        ]);
        assert_eq!(path.len(), 2);
        assert!(!path.is_closed());
    }
}
