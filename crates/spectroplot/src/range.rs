//! Range resolution: from pinned limits and data extrema to a data rect.
//!
//! The resolved rect encodes the vertical flip between data space (y grows
//! upward) and pixel space (y grows downward): its origin sits at
//! `(min_x, max_y)` and its height is `min_y - max_y`. This is the only place
//! the flip is expressed; the coordinate mapper is flip-agnostic.

use crate::error::{PlotError, Result};
use crate::limits::AxisLimits;
use spectroplot_core::Rect;

/// Smallest value across all `series`, scanning each in ascending index order.
///
/// Ties keep the first-seen value. Returns `None` when there are no samples
/// at all. A leading NaN is never replaced, matching a plain `>` scan.
#[must_use]
pub fn min_across(series: &[&[f64]]) -> Option<f64> {
    let mut values = series.iter().flat_map(|s| s.iter().copied());
    let first = values.next()?;
    Some(values.fold(first, |k, v| if k > v { v } else { k }))
}

/// Largest value across all `series`, scanning each in ascending index order.
///
/// Ties keep the first-seen value. Returns `None` when there are no samples
/// at all.
#[must_use]
pub fn max_across(series: &[&[f64]]) -> Option<f64> {
    let mut values = series.iter().flat_map(|s| s.iter().copied());
    let first = values.next()?;
    Some(values.fold(first, |k, v| if k < v { v } else { k }))
}

fn bound(
    pinned: Option<f64>,
    compute: impl FnOnce() -> Option<f64>,
    series: &'static str,
) -> Result<f64> {
    match pinned {
        Some(v) => Ok(v),
        None => compute().ok_or(PlotError::EmptySeries { series }),
    }
}

/// Resolve the visible data rect.
///
/// Pinned bounds are used as given; each unpinned bound is the extremum
/// across every series supplied for that axis. The data is only scanned for
/// bounds that are actually unpinned.
///
/// # Errors
///
/// [`PlotError::EmptySeries`] when an unpinned bound has no samples to
/// reduce over.
pub fn resolve(
    lim_x: AxisLimits,
    lim_y: AxisLimits,
    xs: &[&[f64]],
    ys: &[&[f64]],
) -> Result<Rect> {
    let min_x = bound(lim_x.min, || min_across(xs), "x")?;
    let max_x = bound(lim_x.max, || max_across(xs), "x")?;
    let min_y = bound(lim_y.min, || min_across(ys), "y")?;
    let max_y = bound(lim_y.max, || max_across(ys), "y")?;

    let rect = Rect::new(min_x, max_y, max_x - min_x, min_y - max_y);
    if rect.is_degenerate() {
        tracing::debug!(
            min_x,
            max_x,
            min_y,
            max_y,
            "degenerate data range; mapped coordinates will not be finite"
        );
    }
    Ok(rect)
}
