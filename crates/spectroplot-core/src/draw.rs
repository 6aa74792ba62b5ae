//! Draw commands and drawing state.
//!
//! Everything a [`Canvas`](crate::Canvas) renders reduces to these commands,
//! which makes them suitable for testing, diffing and serialization.

use crate::{Paint, Path, Rect};
use serde::{Deserialize, Serialize};

/// The state saved and restored by `save`/`restore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawState {
    /// Paint used for strokes
    pub stroke: Paint,
    /// Paint used for fills
    pub fill: Paint,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Effective clip (None = unclipped)
    pub clip: Option<Rect>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            stroke: Paint::default(),
            fill: Paint::default(),
            line_width: 1.0,
            clip: None,
        }
    }
}

impl DrawState {
    /// Intersect the clip with `rect`.
    ///
    /// Disjoint regions collapse to an empty rect at `rect`'s origin, so
    /// nothing drawn afterwards is visible.
    pub fn intersect_clip(&mut self, rect: Rect) {
        let rect = rect.normalized();
        self.clip = Some(match self.clip {
            None => rect,
            Some(current) => current
                .intersection(&rect)
                .unwrap_or_else(|| Rect::new(rect.x, rect.y, 0.0, 0.0)),
        });
    }
}

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// State pushed
    Save,
    /// State popped
    Restore,
    /// Clip narrowed by this rect
    ClipRect(Rect),
    /// Path stroked
    Stroke {
        /// The stroked path
        path: Path,
        /// Stroke paint
        paint: Paint,
        /// Stroke width in pixels
        width: f64,
        /// Effective clip at the time of the stroke
        clip: Option<Rect>,
    },
    /// Path filled
    Fill {
        /// The filled path
        path: Path,
        /// Fill paint
        paint: Paint,
        /// Effective clip at the time of the fill
        clip: Option<Rect>,
    },
    /// Rectangle filled
    FillRect {
        /// The filled rectangle
        rect: Rect,
        /// Fill paint
        paint: Paint,
        /// Effective clip at the time of the fill
        clip: Option<Rect>,
    },
}

impl DrawCommand {
    /// The path carried by a stroke or fill, if any.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Stroke { path, .. } | Self::Fill { path, .. } => Some(path),
            _ => None,
        }
    }

    /// True for commands that put pixels on the surface.
    #[must_use]
    pub const fn is_paint(&self) -> bool {
        matches!(
            self,
            Self::Stroke { .. } | Self::Fill { .. } | Self::FillRect { .. }
        )
    }
}
