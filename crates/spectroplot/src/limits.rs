//! Caller-pinned axis limits.

use serde::{Deserialize, Serialize};

/// Optional `(min, max)` bounds for one axis.
///
/// An unset bound is auto-ranged from the data on every draw call; nothing is
/// cached between frames. When both bounds are set, `max < min` is accepted
/// without validation and simply inverts the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisLimits {
    /// Pinned lower bound (None = auto)
    #[serde(default)]
    pub min: Option<f64>,
    /// Pinned upper bound (None = auto)
    #[serde(default)]
    pub max: Option<f64>,
}

impl AxisLimits {
    /// Both bounds auto-ranged.
    pub const AUTO: Self = Self {
        min: None,
        max: None,
    };

    /// Both bounds auto-ranged.
    #[must_use]
    pub const fn auto() -> Self {
        Self::AUTO
    }

    /// Both bounds pinned.
    #[must_use]
    pub const fn pinned(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Pin the lower bound.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Pin the upper bound.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// True when both bounds are pinned, so data never affects this axis.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }

    /// True when neither bound is pinned.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl From<(f64, f64)> for AxisLimits {
    fn from((min, max): (f64, f64)) -> Self {
        Self::pinned(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(AxisLimits::default(), AxisLimits::AUTO);
        assert!(AxisLimits::auto().is_auto());
        assert!(!AxisLimits::auto().is_pinned());
    }

    #[test]
    fn test_partial_pin() {
        let lim = AxisLimits::auto().with_min(-150.0);
        assert_eq!(lim.min, Some(-150.0));
        assert_eq!(lim.max, None);
        assert!(!lim.is_pinned());
        assert!(!lim.is_auto());
    }

    #[test]
    fn test_pinned_from_tuple() {
        let lim: AxisLimits = (-150.0, -30.0).into();
        assert_eq!(lim, AxisLimits::pinned(-150.0, -30.0));
        assert!(lim.is_pinned());
    }

    #[test]
    fn test_inverted_limits_are_kept() {
        let lim = AxisLimits::pinned(10.0, 0.0);
        assert_eq!(lim.min, Some(10.0));
        assert_eq!(lim.max, Some(0.0));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let lim: AxisLimits = serde_json::from_str(r#"{"max": 5.0}"#).unwrap();
        assert_eq!(lim, AxisLimits::auto().with_max(5.0));
    }
}
