//! Core types and traits for spectroplot.
//!
//! This crate provides the drawing-surface side of plotting:
//! - Geometric primitives: [`Point`], [`Rect`]
//! - Color and paint: [`Color`], [`Paint`], [`LinearGradient`]
//! - Paths: [`Path`] built from move/line/close commands
//! - The [`Canvas`] trait and its [`StateScope`] save/restore guard
//! - Canvas implementations: [`RecordingCanvas`] and [`SvgCanvas`]

mod canvas;
mod color;
mod draw;
mod geometry;
mod path;
mod recording;
mod svg;

pub use canvas::{Canvas, CanvasError, StateScope};
pub use color::{Color, ColorParseError, GradientStop, LinearGradient, Paint};
pub use draw::{DrawCommand, DrawState};
pub use geometry::{Point, Rect};
pub use path::{Path, PathCommand};
pub use recording::RecordingCanvas;
pub use svg::SvgCanvas;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Cross-module tests: the same drawing replayed on both canvases
    // ==========================================================================

    fn draw_triangle(canvas: &mut dyn Canvas) -> Result<(), CanvasError> {
        let mut scope = StateScope::new(canvas);
        scope.clip_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
        scope.set_fill_style(Paint::solid(Color::YELLOW));
        scope.begin_path();
        scope.move_to(Point::new(0.0, 0.0));
        scope.line_to(Point::new(20.0, 0.0));
        scope.line_to(Point::new(10.0, 20.0));
        scope.close_path();
        scope.fill()
    }

    #[test]
    fn test_dyn_canvas_recording() {
        let mut canvas = RecordingCanvas::new();
        draw_triangle(&mut canvas).unwrap();
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.paint_commands().count(), 1);
        assert_eq!(canvas.commands().first(), Some(&DrawCommand::Save));
        assert_eq!(canvas.commands().last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn test_dyn_canvas_svg() {
        let mut canvas = SvgCanvas::new(20.0, 20.0);
        draw_triangle(&mut canvas).unwrap();
        let svg = canvas.finish();
        assert!(svg.contains(r#"d="M0 0 L20 0 L10 20 Z""#));
        assert!(svg.contains(r##"fill="#ffff00""##));
    }
}
