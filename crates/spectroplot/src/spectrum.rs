//! Spectrum view: a dB spectrum drawn as a filled band above a floor.
//!
//! This is the frame a live analyser display draws at its redraw cadence:
//! clear the plot area, pin the vertical axis to the configured dB window,
//! and fill between the spectrum and a constant floor at the window's lower
//! bound. Acquiring the spectrum and scheduling frames stay with the caller.

use crate::chart::{self, Chart};
use crate::error::Result;
use crate::limits::AxisLimits;
use crate::style::PlotStyle;
use spectroplot_core::{Canvas, Color, LinearGradient, Paint, Point, Rect};

/// Center frequency of each analyser bin, in Hz.
///
/// An FFT of `fft_size` samples yields `fft_size / 2` bins spaced
/// `sample_rate / fft_size` apart, starting at 0 Hz.
#[must_use]
pub fn bin_frequencies(sample_rate: f64, fft_size: usize) -> Vec<f64> {
    let bins = fft_size / 2;
    let step = sample_rate / fft_size as f64;
    (0..bins).map(|i| i as f64 * step).collect()
}

/// Horizontal gradient across `rect`: red, yellow, green, blue, violet.
#[must_use]
pub fn rainbow_gradient(rect: Rect) -> LinearGradient {
    LinearGradient::new(rect.origin(), Point::new(rect.right(), rect.y))
        .with_stop(0.0, Color::RED)
        .with_stop(0.25, Color::YELLOW)
        .with_stop(0.5, Color::GREEN)
        .with_stop(0.75, Color::BLUE)
        .with_stop(1.0, Color::VIOLET)
}

/// Visible dB window. The bounds can never cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecibelRange {
    min: f64,
    max: f64,
}

impl DecibelRange {
    /// Default lower bound in dB.
    pub const DEFAULT_MIN: f64 = -150.0;

    /// Default upper bound in dB.
    pub const DEFAULT_MAX: f64 = -30.0;

    /// Create a window; bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound in dB.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in dB.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Move the lower bound, stopping at the upper bound. Returns the value
    /// actually stored.
    pub fn set_min(&mut self, value: f64) -> f64 {
        self.min = value.min(self.max);
        self.min
    }

    /// Move the upper bound, stopping at the lower bound. Returns the value
    /// actually stored.
    pub fn set_max(&mut self, value: f64) -> f64 {
        self.max = value.max(self.min);
        self.max
    }

    /// Pinned vertical limits for this window.
    #[must_use]
    pub const fn limits(&self) -> AxisLimits {
        AxisLimits::pinned(self.min, self.max)
    }
}

impl Default for DecibelRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// A chart specialised for drawing analyser frames.
#[derive(Debug)]
pub struct SpectrumView<C> {
    chart: Chart<C>,
    range: DecibelRange,
    background: Color,
    floor: Vec<f64>,
}

impl<C: Canvas> SpectrumView<C> {
    /// Create a view over `rect` with a black background, the default dB
    /// window and the rainbow gradient fill.
    pub fn new(canvas: C, rect: Rect) -> Self {
        let style = PlotStyle::uniform(rainbow_gradient(rect));
        Self {
            chart: Chart::new(canvas, rect).with_style(style),
            range: DecibelRange::default(),
            background: Color::BLACK,
            floor: Vec::new(),
        }
    }

    /// Set the dB window.
    #[must_use]
    pub fn with_range(mut self, range: DecibelRange) -> Self {
        self.range = range;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// The underlying chart.
    pub const fn chart(&self) -> &Chart<C> {
        &self.chart
    }

    /// The underlying chart, for changing style or horizontal limits.
    ///
    /// Moving the plot area through here leaves the fill untouched; use
    /// [`SpectrumView::set_rect`] to keep the rainbow fill spanning it.
    pub fn chart_mut(&mut self) -> &mut Chart<C> {
        &mut self.chart
    }

    /// Move the plot area. A rainbow fill built for the old area is rebuilt
    /// across the new one; any other style is kept as is.
    pub fn set_rect(&mut self, rect: Rect) {
        let old = self.chart.rect();
        let rainbow = Paint::LinearGradient(rainbow_gradient(old));
        if let Some(style) = self.chart.style.as_mut() {
            if style.fill == rainbow {
                style.fill = rainbow_gradient(rect).into();
            }
            if style.stroke == rainbow {
                style.stroke = rainbow_gradient(rect).into();
            }
        }
        self.chart.set_rect(rect);
    }

    /// The dB window.
    pub const fn range(&self) -> DecibelRange {
        self.range
    }

    /// The dB window, for the owner's controls to adjust between frames.
    pub fn range_mut(&mut self) -> &mut DecibelRange {
        &mut self.range
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.chart.into_canvas()
    }

    /// Draw one frame: background, then the band from the floor up to `db`.
    ///
    /// # Errors
    ///
    /// [`PlotError::EmptySeries`](crate::PlotError::EmptySeries) or
    /// [`PlotError::LengthMismatch`](crate::PlotError::LengthMismatch) before
    /// anything is drawn, or a canvas error from either paint.
    pub fn render(&mut self, hz: &[f64], db: &[f64]) -> Result<()> {
        chart::check_paired(("x", hz), ("y0", db))?;
        self.chart.lim_y = self.range.limits();
        self.floor.clear();
        self.floor.resize(hz.len(), self.range.min());

        self.chart.clear(self.background)?;
        self.chart.fill_between(hz, db, &self.floor)
    }

    /// Draw a frame with no spectrum, only the background.
    pub fn render_idle(&mut self) -> Result<()> {
        self.chart.clear(self.background)
    }
}
