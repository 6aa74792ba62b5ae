//! A [`Canvas`] that records draw operations as [`DrawCommand`]s.

use crate::canvas::{Canvas, CanvasError};
use crate::draw::{DrawCommand, DrawState};
use crate::{Paint, Path, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted and under which clip)
/// - Serialization (send commands to another renderer)
/// - Diffing (compare two frames)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    state: DrawState,
    saved: Vec<DrawState>,
    path: Path,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the log.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded commands that put pixels on the surface.
    pub fn paint_commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_paint())
    }

    /// Reset to a freshly constructed canvas.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The live drawing state.
    #[must_use]
    pub const fn state(&self) -> &DrawState {
        &self.state
    }

    /// Get the current clip bounds (None if unclipped).
    #[must_use]
    pub const fn current_clip(&self) -> Option<Rect> {
        self.state.clip
    }

    /// Number of saved states not yet restored.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// The path under construction.
    #[must_use]
    pub const fn current_path(&self) -> &Path {
        &self.path
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
            self.commands.push(DrawCommand::Restore);
        } else {
            tracing::warn!("restore called without a matching save");
        }
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.intersect_clip(rect);
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.state.stroke = paint;
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path = Path::new();
    }

    fn move_to(&mut self, point: Point) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.path.line_to(point);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            paint: self.state.stroke.clone(),
            width: self.state.line_width,
            clip: self.state.clip,
        });
        Ok(())
    }

    fn fill(&mut self) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            paint: self.state.fill.clone(),
            clip: self.state.clip,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: self.state.fill.clone(),
            clip: self.state.clip,
        });
        Ok(())
    }
}
