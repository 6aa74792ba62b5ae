//! The drawing-surface abstraction.
//!
//! [`Canvas`] is the capability set a plot needs from its target: a path
//! builder (`begin_path`, `move_to`, `line_to`, `close_path`), terminal
//! `stroke`/`fill`, a rectangular clip, settable styles, and a save/restore
//! state stack. A 2D canvas, an SVG writer or a software rasterizer can all
//! host it.

use crate::{Paint, Path, PathCommand, Point, Rect};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

/// Errors reported by a canvas backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// The backend rejected a draw operation.
    #[error("canvas backend error: {0}")]
    Backend(String),
}

/// Drawing surface consumed by charts.
///
/// Styles, line width and clip are part of the saved state; the current path
/// is not.
pub trait Canvas {
    /// Push a copy of the current drawing state.
    fn save(&mut self);

    /// Pop the most recently saved drawing state.
    ///
    /// Restoring with nothing saved leaves the state unchanged.
    fn restore(&mut self);

    /// Intersect the current clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Paint used by [`Canvas::stroke`].
    fn set_stroke_style(&mut self, paint: Paint);

    /// Paint used by [`Canvas::fill`] and [`Canvas::fill_rect`].
    fn set_fill_style(&mut self, paint: Paint);

    /// Stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    /// Add a straight segment to `point`.
    fn line_to(&mut self, point: Point);

    /// Close the current sub-path.
    fn close_path(&mut self);

    /// Stroke the current path.
    fn stroke(&mut self) -> Result<(), CanvasError>;

    /// Fill the current path.
    fn fill(&mut self) -> Result<(), CanvasError>;

    /// Fill `rect` with the fill style, independent of the current path.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), CanvasError>;

    /// Replay a built [`Path`] onto the current path.
    fn append_path(&mut self, path: &Path) {
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => self.move_to(p),
                PathCommand::LineTo(p) => self.line_to(p),
                PathCommand::Close => self.close_path(),
            }
        }
    }
}

macro_rules! forward_canvas {
    () => {
        fn save(&mut self) {
            (**self).save();
        }

        fn restore(&mut self) {
            (**self).restore();
        }

        fn clip_rect(&mut self, rect: Rect) {
            (**self).clip_rect(rect);
        }

        fn set_stroke_style(&mut self, paint: Paint) {
            (**self).set_stroke_style(paint);
        }

        fn set_fill_style(&mut self, paint: Paint) {
            (**self).set_fill_style(paint);
        }

        fn set_line_width(&mut self, width: f64) {
            (**self).set_line_width(width);
        }

        fn begin_path(&mut self) {
            (**self).begin_path();
        }

        fn move_to(&mut self, point: Point) {
            (**self).move_to(point);
        }

        fn line_to(&mut self, point: Point) {
            (**self).line_to(point);
        }

        fn close_path(&mut self) {
            (**self).close_path();
        }

        fn stroke(&mut self) -> Result<(), CanvasError> {
            (**self).stroke()
        }

        fn fill(&mut self) -> Result<(), CanvasError> {
            (**self).fill()
        }

        fn fill_rect(&mut self, rect: Rect) -> Result<(), CanvasError> {
            (**self).fill_rect(rect)
        }

        fn append_path(&mut self, path: &Path) {
            (**self).append_path(path);
        }
    };
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    forward_canvas!();
}

impl<C: Canvas + ?Sized> Canvas for Box<C> {
    forward_canvas!();
}

/// Saves the canvas state on creation and restores it when dropped.
///
/// The restore runs on every exit path, including early returns through `?`
/// and unwinding, so one draw call can never leak its clip or style into the
/// next. The scope dereferences to the canvas it guards.
pub struct StateScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> StateScope<'a, C> {
    /// Save the state of `canvas` and guard it until the scope is dropped.
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for StateScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for StateScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StateScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

impl<C: Canvas + ?Sized> std::fmt::Debug for StateScope<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateScope").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DrawCommand, RecordingCanvas};

    #[test]
    fn test_canvas_error_display() {
        let err = CanvasError::Backend("device lost".to_string());
        assert_eq!(err.to_string(), "canvas backend error: device lost");
    }

    // =========================================================================
    // StateScope Tests
    // =========================================================================

    #[test]
    fn test_scope_saves_and_restores() {
        let mut canvas = RecordingCanvas::new();
        {
            let mut scope = StateScope::new(&mut canvas);
            scope.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.current_clip(), None);
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::ClipRect(Rect::new(0.0, 0.0, 10.0, 10.0)),
                DrawCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_scope_restores_on_early_return() {
        fn failing_step() -> Result<(), CanvasError> {
            Err(CanvasError::Backend("boom".to_string()))
        }

        fn draw(canvas: &mut RecordingCanvas) -> Result<(), CanvasError> {
            let mut scope = StateScope::new(canvas);
            scope.set_fill_style(Paint::solid(Color::RED));
            failing_step()?;
            scope.fill()
        }

        let mut canvas = RecordingCanvas::new();
        assert!(draw(&mut canvas).is_err());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.state().fill, Paint::solid(Color::BLACK));
    }

    #[test]
    fn test_scope_restores_on_panic() {
        let mut canvas = RecordingCanvas::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = StateScope::new(&mut canvas);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(canvas.depth(), 0);
    }

    // =========================================================================
    // Forwarding Tests
    // =========================================================================

    #[test]
    fn test_mut_ref_and_box_forward() {
        let mut canvas = RecordingCanvas::new();
        {
            let mut handle: &mut RecordingCanvas = &mut canvas;
            Canvas::fill_rect(&mut handle, Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        }
        assert_eq!(canvas.command_count(), 1);

        let mut boxed: Box<dyn Canvas> = Box::new(RecordingCanvas::new());
        boxed.save();
        boxed.restore();
    }

    #[test]
    fn test_append_path_replays_commands() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 2.0));
        path.line_to(Point::new(3.0, 4.0));
        path.close();

        let mut canvas = RecordingCanvas::new();
        canvas.begin_path();
        canvas.append_path(&path);
        assert_eq!(canvas.current_path(), &path);
    }
}
