//! Plot styling.

use serde::{Deserialize, Serialize};
use spectroplot_core::{Color, Paint};

/// Stroke and fill styling for a chart.
///
/// Charts hold an `Option<PlotStyle>`; when it is `None` they draw with
/// [`PlotStyle::default`], a 1px black stroke and a black fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Paint for line plots
    pub stroke: Paint,
    /// Paint for fill-between bands
    pub fill: Paint,
    /// Stroke width in pixels
    pub line_width: f64,
}

impl PlotStyle {
    /// Color used when no style is configured.
    pub const DEFAULT_COLOR: Color = Color::BLACK;

    /// Default stroke width in pixels.
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    /// Use `paint` for both strokes and fills.
    #[must_use]
    pub fn uniform(paint: impl Into<Paint>) -> Self {
        let paint = paint.into();
        Self {
            stroke: paint.clone(),
            fill: paint,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the stroke paint.
    #[must_use]
    pub fn stroke(mut self, paint: impl Into<Paint>) -> Self {
        self.stroke = paint.into();
        self
    }

    /// Set the fill paint.
    #[must_use]
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = paint.into();
        self
    }

    /// Set the stroke width; negative widths are clamped to zero.
    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = width.max(0.0);
        self
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.stroke, Paint::solid(Color::BLACK));
        assert_eq!(style.fill, Paint::solid(Color::BLACK));
        assert_eq!(style.line_width, 1.0);
    }

    #[test]
    fn test_builder() {
        let style = PlotStyle::default()
            .stroke(Color::RED)
            .fill(Color::BLUE)
            .line_width(-2.0);
        assert_eq!(style.stroke, Paint::solid(Color::RED));
        assert_eq!(style.fill, Paint::solid(Color::BLUE));
        assert_eq!(style.line_width, 0.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let style: PlotStyle = serde_json::from_str(r#"{"line_width": 2.5}"#).unwrap();
        assert_eq!(style.line_width, 2.5);
        assert_eq!(style.stroke, Paint::solid(PlotStyle::DEFAULT_COLOR));
    }
}
