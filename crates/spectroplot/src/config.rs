//! Viewer configuration, loaded from YAML or TOML.
//!
//! The configuration is a plain value owned by the caller. Nothing here is
//! global; a view is built from a config and afterwards the two are
//! independent.

use crate::error::ConfigError;
use crate::limits::AxisLimits;
use crate::spectrum::{self, DecibelRange, SpectrumView};
use crate::style::PlotStyle;
use serde::{Deserialize, Serialize};
use spectroplot_core::{Canvas, Color, Rect};
use std::path::Path;

fn default_rect() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 400.0)
}

const fn default_sample_rate() -> f64 {
    48_000.0
}

const fn default_fft_size() -> usize {
    2048
}

const fn default_db_min() -> f64 {
    DecibelRange::DEFAULT_MIN
}

const fn default_db_max() -> f64 {
    DecibelRange::DEFAULT_MAX
}

const fn default_true() -> bool {
    true
}

/// Fill used when the gradient is turned off and no style is given.
pub const SOLID_FILL: Color = Color::GREEN;

/// Plot area settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Destination rect in pixels
    #[serde(default = "default_rect")]
    pub rect: Rect,
    /// Horizontal limits
    #[serde(default)]
    pub x: AxisLimits,
    /// Vertical limits; must stay unset, spectrum views pin them to the dB
    /// window and [`ViewerConfig::validate`] rejects anything else
    #[serde(default)]
    pub y: AxisLimits,
    /// Explicit style; overrides the spectrum gradient when set
    #[serde(default)]
    pub style: Option<PlotStyle>,
    /// Background color as `#rrggbb` or `#rrggbbaa`
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            rect: default_rect(),
            x: AxisLimits::auto(),
            y: AxisLimits::auto(),
            style: None,
            background: None,
        }
    }
}

impl ChartConfig {
    /// Parsed background color, if one is configured.
    pub fn background_color(&self) -> Result<Option<Color>, ConfigError> {
        self.background
            .as_deref()
            .map(|hex| {
                Color::from_hex(hex).map_err(|e| ConfigError::Invalid {
                    field: "chart.background",
                    message: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Analyser settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    /// Sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: f64,
    /// FFT length; the spectrum has half as many bins
    #[serde(default = "default_fft_size")]
    pub fft_size: usize,
    /// Bottom of the dB window
    #[serde(default = "default_db_min")]
    pub db_min: f64,
    /// Top of the dB window
    #[serde(default = "default_db_max")]
    pub db_max: f64,
    /// Fill with the rainbow gradient instead of a solid color
    #[serde(default = "default_true")]
    pub gradient: bool,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            fft_size: default_fft_size(),
            db_min: default_db_min(),
            db_max: default_db_max(),
            gradient: true,
        }
    }
}

impl SpectrumConfig {
    /// The configured dB window.
    pub fn decibel_range(&self) -> DecibelRange {
        DecibelRange::new(self.db_min, self.db_max)
    }

    /// Frequencies of the analyser bins.
    pub fn bin_frequencies(&self) -> Vec<f64> {
        spectrum::bin_frequencies(self.sample_rate, self.fft_size)
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Plot area
    #[serde(default)]
    pub chart: ChartConfig,
    /// Analyser
    #[serde(default)]
    pub spectrum: SpectrumConfig,
}

impl ViewerConfig {
    /// Parse from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Read and validate a config file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml,
            "toml" => Self::from_toml,
            _ => return Err(ConfigError::UnsupportedFormat(ext)),
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded viewer config");
        Ok(config)
    }

    /// Reject values that cannot produce a frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rect = self.chart.rect;
        if rect.width <= 0.0 || rect.height <= 0.0 || rect.is_degenerate() {
            return Err(invalid(
                "chart.rect",
                format!("size must be positive, got {}x{}", rect.width, rect.height),
            ));
        }
        if !rect.origin().is_finite() {
            return Err(invalid("chart.rect", "origin must be finite".to_string()));
        }
        if !self.chart.y.is_auto() {
            return Err(invalid(
                "chart.y",
                "vertical limits come from spectrum.db_min and spectrum.db_max".to_string(),
            ));
        }
        self.chart.background_color()?;

        let s = &self.spectrum;
        if !s.sample_rate.is_finite() || s.sample_rate <= 0.0 {
            return Err(invalid(
                "spectrum.sample_rate",
                format!("must be positive, got {}", s.sample_rate),
            ));
        }
        if s.fft_size < 2 || !s.fft_size.is_power_of_two() {
            return Err(invalid(
                "spectrum.fft_size",
                format!("{} is not a power of two of at least 2", s.fft_size),
            ));
        }
        if !(s.db_min.is_finite() && s.db_max.is_finite()) || s.db_min > s.db_max {
            return Err(invalid(
                "spectrum.db_min",
                format!("window [{}, {}] is not a finite range", s.db_min, s.db_max),
            ));
        }
        Ok(())
    }

    /// Build a spectrum view on `canvas` from this config.
    pub fn build_view<C: Canvas>(&self, canvas: C) -> Result<SpectrumView<C>, ConfigError> {
        let mut view = SpectrumView::new(canvas, self.chart.rect)
            .with_range(self.spectrum.decibel_range());
        if let Some(color) = self.chart.background_color()? {
            view = view.with_background(color);
        }

        let chart = view.chart_mut();
        chart.lim_x = self.chart.x;
        match (&self.chart.style, self.spectrum.gradient) {
            (Some(style), _) => chart.style = Some(style.clone()),
            (None, true) => {}
            (None, false) => chart.style = Some(PlotStyle::uniform(SOLID_FILL)),
        }
        Ok(view)
    }
}

fn invalid(field: &'static str, message: String) -> ConfigError {
    ConfigError::Invalid { field, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectroplot_core::{Paint, RecordingCanvas};
    use std::io::Write;

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.chart.rect, Rect::new(0.0, 0.0, 800.0, 400.0));
        assert_eq!(config.spectrum.sample_rate, 48_000.0);
        assert_eq!(config.spectrum.fft_size, 2048);
        assert_eq!(config.spectrum.decibel_range(), DecibelRange::default());
        assert!(config.spectrum.gradient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r##"
chart:
  rect: { x: 10.0, y: 20.0, width: 640.0, height: 240.0 }
  x: { min: 0.0, max: 20000.0 }
  background: "#101010"
spectrum:
  fft_size: 1024
"##;
        let config = ViewerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.chart.rect, Rect::new(10.0, 20.0, 640.0, 240.0));
        assert_eq!(config.chart.x, AxisLimits::pinned(0.0, 20_000.0));
        assert!(config.chart.y.is_auto());
        assert_eq!(config.spectrum.fft_size, 1024);
        assert_eq!(config.spectrum.db_max, -30.0);
        assert_eq!(
            config.chart.background_color().unwrap(),
            Some(Color::rgb(16.0 / 255.0, 16.0 / 255.0, 16.0 / 255.0))
        );
    }

    #[test]
    fn test_from_toml() {
        let toml = r"
[chart]
x = { max = 8000.0 }

[spectrum]
sample_rate = 16000.0
db_min = -100.0
db_max = -20.0
gradient = false
";
        let config = ViewerConfig::from_toml(toml).unwrap();
        assert_eq!(config.chart.x, AxisLimits::auto().with_max(8000.0));
        assert_eq!(config.spectrum.sample_rate, 16_000.0);
        assert_eq!(config.spectrum.decibel_range(), DecibelRange::new(-100.0, -20.0));
        assert!(!config.spectrum.gradient);
    }

    #[test]
    fn test_from_yaml_syntax_error() {
        let err = ViewerConfig::from_yaml("chart: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_validate_rejects_bad_fft_size() {
        let mut config = ViewerConfig::default();
        config.spectrum.fft_size = 1000;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "spectrum.fft_size", .. }));

        config.spectrum.fft_size = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_rect() {
        let mut config = ViewerConfig::default();
        config.chart.rect = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid { field: "chart.rect", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_pinned_vertical_limits() {
        let yaml = "chart:\n  y: { min: 0.0, max: 1.0 }\n";
        let config = ViewerConfig::from_yaml(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chart.y", .. }));
        assert!(err.to_string().contains("spectrum.db_min"));

        let config = ViewerConfig::from_yaml("chart:\n  y: { max: -10.0 }\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_crossed_window() {
        let mut config = ViewerConfig::default();
        config.spectrum.db_min = 0.0;
        config.spectrum.db_max = -10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_background() {
        let mut config = ViewerConfig::default();
        config.chart.background = Some("#12".to_string());
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid { field: "chart.background", .. }
        ));
    }

    // =========================================================================
    // Loading Tests
    // =========================================================================

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("viewer.yml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(f, "spectrum:\n  fft_size: 512").unwrap();
        assert_eq!(ViewerConfig::load(&yaml_path).unwrap().spectrum.fft_size, 512);

        let toml_path = dir.path().join("viewer.toml");
        std::fs::write(&toml_path, "[spectrum]\nfft_size = 256\n").unwrap();
        assert_eq!(ViewerConfig::load(&toml_path).unwrap().spectrum.fft_size, 256);
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "spectrum:\n  fft_size: 100\n").unwrap();
        assert!(matches!(
            ViewerConfig::load(&path).unwrap_err(),
            ConfigError::Invalid { .. }
        ));
    }

    #[test]
    fn test_load_unsupported_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(dir.path().join("viewer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "json"));

        let err = ViewerConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    // =========================================================================
    // View Construction Tests
    // =========================================================================

    #[test]
    fn test_build_view_applies_settings() {
        let mut config = ViewerConfig::default();
        config.chart.x = AxisLimits::pinned(0.0, 24_000.0);
        config.spectrum.db_min = -120.0;
        let view = config.build_view(RecordingCanvas::new()).unwrap();
        assert_eq!(view.chart().lim_x, AxisLimits::pinned(0.0, 24_000.0));
        assert_eq!(view.range(), DecibelRange::new(-120.0, -30.0));
        assert_eq!(view.chart().rect(), config.chart.rect);
    }

    #[test]
    fn test_build_view_solid_fill_without_gradient() {
        let mut config = ViewerConfig::default();
        config.spectrum.gradient = false;
        let view = config.build_view(RecordingCanvas::new()).unwrap();
        let style = view.chart().style.as_ref().unwrap();
        assert_eq!(style.fill, Paint::solid(SOLID_FILL));
    }
}
