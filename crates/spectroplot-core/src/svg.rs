//! A [`Canvas`] that renders into an SVG document.

use crate::canvas::{Canvas, CanvasError};
use crate::draw::DrawState;
use crate::{Color, LinearGradient, Paint, Point, Rect};

/// Canvas backed by an SVG element list.
///
/// Clips become `<clipPath>` definitions and gradients become
/// `<linearGradient>` definitions in user space, both shared between
/// elements that use the same region or gradient. Like a 2D canvas,
/// `move_to`/`line_to` with non-finite coordinates are ignored.
#[derive(Debug)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    state: DrawState,
    saved: Vec<DrawState>,
    path_data: String,
    clips: Vec<Rect>,
    gradients: Vec<LinearGradient>,
    elements: Vec<String>,
}

impl SvgCanvas {
    /// Create a canvas for a `width` x `height` pixel document.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            saved: Vec::new(),
            path_data: String::new(),
            clips: Vec::new(),
            gradients: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Number of drawn elements so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render the document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height),
        );
        out.push('\n');

        if !self.clips.is_empty() || !self.gradients.is_empty() {
            out.push_str("<defs>\n");
            for (idx, rect) in self.clips.iter().enumerate() {
                out.push_str(&format!(
                    r#"<clipPath id="clip{idx}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                    num(rect.x),
                    num(rect.y),
                    num(rect.width),
                    num(rect.height),
                ));
                out.push('\n');
            }
            for (idx, gradient) in self.gradients.iter().enumerate() {
                out.push_str(&format!(
                    r#"<linearGradient id="grad{idx}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    num(gradient.start.x),
                    num(gradient.start.y),
                    num(gradient.end.x),
                    num(gradient.end.y),
                ));
                for stop in &gradient.stops {
                    out.push_str(&format!(
                        r#"<stop offset="{}" stop-color="{}"{}/>"#,
                        num(f64::from(stop.offset)),
                        stop.color.to_hex(),
                        opacity_attr("stop-opacity", stop.color),
                    ));
                }
                out.push_str("</linearGradient>\n");
            }
            out.push_str("</defs>\n");
        }

        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Consume the canvas and return the document.
    #[must_use]
    pub fn finish(self) -> String {
        self.to_svg()
    }

    fn clip_attr(&mut self) -> String {
        let Some(rect) = self.state.clip else {
            return String::new();
        };
        let idx = match self.clips.iter().position(|c| *c == rect) {
            Some(idx) => idx,
            None => {
                self.clips.push(rect);
                self.clips.len() - 1
            }
        };
        format!(r#" clip-path="url(#clip{idx})""#)
    }

    fn paint_attrs(&mut self, attr: &str, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => format!(
                r#" {attr}="{}"{}"#,
                color.to_hex(),
                opacity_attr(&format!("{attr}-opacity"), *color)
            ),
            Paint::LinearGradient(gradient) => {
                let idx = match self.gradients.iter().position(|g| g == gradient) {
                    Some(idx) => idx,
                    None => {
                        self.gradients.push(gradient.clone());
                        self.gradients.len() - 1
                    }
                };
                format!(r#" {attr}="url(#grad{idx})""#)
            }
        }
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        } else {
            tracing::warn!("restore called without a matching save");
        }
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.state.intersect_clip(rect);
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
        self.path_data.clear();
    }

    fn move_to(&mut self, point: Point) {
        if point.is_finite() {
            self.push_segment('M', point);
        }
    }

    fn line_to(&mut self, point: Point) {
        if point.is_finite() {
            let op = if self.path_data.is_empty() { 'M' } else { 'L' };
            self.push_segment(op, point);
        }
    }

    fn close_path(&mut self) {
        if !self.path_data.is_empty() {
            self.path_data.push_str(" Z");
        }
    }

    fn stroke(&mut self) -> Result<(), CanvasError> {
        if self.path_data.is_empty() {
            return Ok(());
        }
        let stroke = self.state.stroke.clone();
        let paint = self.paint_attrs("stroke", &stroke);
        let clip = self.clip_attr();
        self.elements.push(format!(
            r#"<path d="{}" fill="none"{paint} stroke-width="{}"{clip}/>"#,
            self.path_data,
            num(self.state.line_width),
        ));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), CanvasError> {
        if self.path_data.is_empty() {
            return Ok(());
        }
        let fill = self.state.fill.clone();
        let paint = self.paint_attrs("fill", &fill);
        let clip = self.clip_attr();
        self.elements.push(format!(
            r#"<path d="{}"{paint}{clip}/>"#,
            self.path_data
        ));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), CanvasError> {
        let r = rect.normalized();
        if r.is_degenerate() {
            return Ok(());
        }
        let fill = self.state.fill.clone();
        let paint = self.paint_attrs("fill", &fill);
        let clip = self.clip_attr();
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{paint}{clip}/>"#,
            num(r.x),
            num(r.y),
            num(r.width),
            num(r.height),
        ));
        Ok(())
    }
}

impl SvgCanvas {
    fn push_segment(&mut self, op: char, point: Point) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        self.path_data.push(op);
        self.path_data.push_str(&num(point.x));
        self.path_data.push(' ');
        self.path_data.push_str(&num(point.y));
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.a < 1.0 {
        format!(r#" {name}="{}""#, num(f64::from(color.a)))
    } else {
        String::new()
    }
}
