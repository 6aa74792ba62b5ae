//! Auto-ranging line plots and fill-between bands for live numeric series.
//!
//! A [`Chart`] maps data series into a destination rect on any
//! [`Canvas`](spectroplot_core::Canvas), resolving unpinned axis bounds from
//! the data on every call. [`SpectrumView`] builds on it to draw analyser
//! frames: a dB spectrum filled down to the bottom of a pinned dB window.
//!
//! # Example
//!
//! ```
//! use spectroplot::{Chart, Rect, RecordingCanvas};
//!
//! let mut chart = Chart::new(RecordingCanvas::new(), Rect::new(0.0, 0.0, 100.0, 100.0));
//! chart.plot(&[0.0, 1.0, 2.0], &[0.0, 10.0, 0.0]).unwrap();
//! assert_eq!(chart.canvas().paint_commands().count(), 1);
//! ```

mod chart;
mod config;
mod error;
mod limits;
pub mod range;
mod spectrum;
mod style;
pub mod transform;

pub use chart::Chart;
pub use config::{ChartConfig, SpectrumConfig, ViewerConfig, SOLID_FILL};
pub use error::{ConfigError, PlotError, Result};
pub use limits::AxisLimits;
pub use spectrum::{bin_frequencies, rainbow_gradient, DecibelRange, SpectrumView};
pub use style::PlotStyle;
pub use transform::{map_point, DataTransform};

pub use spectroplot_core::{
    Canvas, CanvasError, Color, DrawCommand, LinearGradient, Paint, Path, PathCommand, Point,
    RecordingCanvas, Rect, StateScope, SvgCanvas,
};
