//! `Chart`: auto-ranging line plots and fill-between bands.
//!
//! Every draw call runs the same pipeline: validate the series, resolve the
//! visible data rect from the pinned limits and the data, map each sample
//! into the destination rect, and emit the path inside a saved canvas state
//! clipped to that rect. Nothing is cached between calls, so a chart follows
//! changing data and changing limits from one frame to the next.

use crate::error::{PlotError, Result};
use crate::limits::AxisLimits;
use crate::range;
use crate::style::PlotStyle;
use crate::transform::DataTransform;
use spectroplot_core::{Canvas, Color, Paint, Path, Rect, StateScope};

/// A plot area on a canvas.
///
/// The chart owns its canvas handle (a canvas, a `&mut` canvas or a boxed
/// one) and its destination rect. `lim_x`/`lim_y` and `style` may be changed
/// freely between draw calls; the next call picks them up.
#[derive(Debug)]
pub struct Chart<C> {
    canvas: C,
    rect: Rect,
    /// Horizontal axis limits (unset bounds auto-range)
    pub lim_x: AxisLimits,
    /// Vertical axis limits (unset bounds auto-range)
    pub lim_y: AxisLimits,
    /// Drawing style; `None` draws with [`PlotStyle::default`]
    pub style: Option<PlotStyle>,
}

impl<C: Canvas> Chart<C> {
    /// Create a chart drawing into `rect` on `canvas`, auto-ranging both axes.
    pub fn new(canvas: C, rect: Rect) -> Self {
        Self {
            canvas,
            rect,
            lim_x: AxisLimits::auto(),
            lim_y: AxisLimits::auto(),
            style: None,
        }
    }

    /// Set both axis limits.
    #[must_use]
    pub fn with_limits(mut self, lim_x: AxisLimits, lim_y: AxisLimits) -> Self {
        self.lim_x = lim_x;
        self.lim_y = lim_y;
        self
    }

    /// Set the drawing style.
    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Destination rect in pixel space.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the plot area.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Replace the horizontal limits.
    pub fn set_lim_x(&mut self, lim: impl Into<AxisLimits>) {
        self.lim_x = lim.into();
    }

    /// Replace the vertical limits.
    pub fn set_lim_y(&mut self, lim: impl Into<AxisLimits>) {
        self.lim_y = lim.into();
    }

    /// Replace the style; `None` restores the default.
    pub fn set_style(&mut self, style: Option<PlotStyle>) {
        self.style = style;
    }

    /// Borrow the canvas.
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutably borrow the canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Resolve the visible data rect for the given series.
    ///
    /// Each unpinned bound is the extremum over all of `xs` (or `ys`).
    pub fn data_rect(&self, xs: &[&[f64]], ys: &[&[f64]]) -> Result<Rect> {
        range::resolve(self.lim_x, self.lim_y, xs, ys)
    }

    /// Pixel-space polyline for `(x[i], y[i])`, without drawing it.
    pub fn line_path(&self, x: &[f64], y: &[f64]) -> Result<Path> {
        check_paired(("x", x), ("y", y))?;
        let transform = DataTransform::new(self.data_rect(&[x], &[y])?, self.rect);
        tracing::trace!(data = ?transform.data(), "line range");

        let mut path = Path::with_capacity(x.len());
        let mut points = transform.apply_all(x, y);
        if let Some(first) = points.next() {
            path.move_to(first);
        }
        for p in points {
            path.line_to(p);
        }
        Ok(path)
    }

    /// Pixel-space closed band between `y0` and `y1`, without drawing it.
    ///
    /// The outline runs forward along `(x, y0)` and back along `(x, y1)`
    /// before closing, which keeps the polygon simple for any x order that
    /// is monotonic.
    pub fn fill_between_path(&self, x: &[f64], y0: &[f64], y1: &[f64]) -> Result<Path> {
        check_paired(("x", x), ("y0", y0))?;
        check_paired(("x", x), ("y1", y1))?;
        let transform = DataTransform::new(self.data_rect(&[x], &[y0, y1])?, self.rect);
        tracing::trace!(data = ?transform.data(), "band range");

        let mut path = Path::with_capacity(2 * x.len() + 1);
        let mut upper = transform.apply_all(x, y0);
        if let Some(first) = upper.next() {
            path.move_to(first);
        }
        for p in upper {
            path.line_to(p);
        }
        for (&xv, &yv) in x.iter().zip(y1).rev() {
            path.line_to(transform.apply(xv, yv));
        }
        path.close();
        Ok(path)
    }

    /// Stroke the polyline through `(x[i], y[i])`, clipped to the plot area.
    ///
    /// # Errors
    ///
    /// [`PlotError::EmptySeries`] or [`PlotError::LengthMismatch`] for bad
    /// input (nothing is drawn), or [`PlotError::Canvas`] if the canvas
    /// rejects the stroke. The canvas state is restored in every case.
    pub fn plot(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        let path = self.line_path(x, y)?;
        let (paint, width) = self.style.as_ref().map_or_else(
            || (Paint::solid(PlotStyle::DEFAULT_COLOR), PlotStyle::DEFAULT_LINE_WIDTH),
            |s| (s.stroke.clone(), s.line_width),
        );
        tracing::trace!(points = x.len(), rect = ?self.rect, "plot");

        let rect = self.rect;
        let mut scope = StateScope::new(&mut self.canvas);
        scope.clip_rect(rect);
        scope.set_stroke_style(paint);
        scope.set_line_width(width);
        scope.begin_path();
        scope.append_path(&path);
        scope.stroke()?;
        Ok(())
    }

    /// Fill the band between `(x, y0)` and `(x, y1)`, clipped to the plot area.
    ///
    /// Unpinned vertical bounds span both curves.
    ///
    /// # Errors
    ///
    /// Same as [`Chart::plot`], with lengths checked against `x`.
    pub fn fill_between(&mut self, x: &[f64], y0: &[f64], y1: &[f64]) -> Result<()> {
        let path = self.fill_between_path(x, y0, y1)?;
        let paint = self.style.as_ref().map_or_else(
            || Paint::solid(PlotStyle::DEFAULT_COLOR),
            |s| s.fill.clone(),
        );
        tracing::trace!(points = x.len(), rect = ?self.rect, "fill_between");

        let rect = self.rect;
        let mut scope = StateScope::new(&mut self.canvas);
        scope.clip_rect(rect);
        scope.set_fill_style(paint);
        scope.begin_path();
        scope.append_path(&path);
        scope.fill()?;
        Ok(())
    }

    /// Paint the whole plot area with `color`.
    pub fn clear(&mut self, color: Color) -> Result<()> {
        let rect = self.rect;
        let mut scope = StateScope::new(&mut self.canvas);
        scope.set_fill_style(Paint::solid(color));
        scope.fill_rect(rect)?;
        Ok(())
    }
}

pub(crate) fn check_paired(
    (left, xs): (&'static str, &[f64]),
    (right, ys): (&'static str, &[f64]),
) -> Result<()> {
    if xs.is_empty() {
        return Err(PlotError::EmptySeries { series: left });
    }
    if ys.is_empty() {
        return Err(PlotError::EmptySeries { series: right });
    }
    if xs.len() != ys.len() {
        return Err(PlotError::LengthMismatch {
            left,
            left_len: xs.len(),
            right,
            right_len: ys.len(),
        });
    }
    Ok(())
}
