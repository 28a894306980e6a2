//! Plot object, Renderer trait and renderer registry.
//!
//! A `Plot` carries everything a renderer needs: the `DagSpec`, the
//! theme, the styled caption and the caller's pass-through options. The
//! renderer is always handed in explicitly by the caller.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod json;
pub mod svg;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::config::{CaptionStyle, Point, RenderOptions};
use crate::dag::{Caption, DagSpec};
use crate::error::RenderError;
use crate::graph::CausalGraph;
use crate::roles::Symbol;

// ─── Theme ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Plain white canvas, no axes or grid.
    #[default]
    Blank,
    /// Shaded panel with grid lines. Opt-in through `Plot::with_theme`.
    Grid,
}

// ─── Plot ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub spec: DagSpec,
    pub theme: Theme,
    pub caption: Caption,
    pub caption_style: CaptionStyle,
    /// Caller options, forwarded unchanged.
    pub options: RenderOptions,
}

impl Plot {
    /// A blank-themed plot with an empty caption.
    pub fn new(spec: DagSpec, options: RenderOptions) -> Self {
        Self {
            spec,
            theme: Theme::default(),
            caption: Caption::default(),
            caption_style: CaptionStyle::default(),
            options,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_caption(mut self, caption: Caption, style: CaptionStyle) -> Self {
        self.caption = caption;
        self.caption_style = style;
        self
    }

    pub fn graph(&self) -> CausalGraph {
        self.spec.to_graph()
    }

    /// Node points, rejecting NaN and infinite coordinates.
    pub fn finite_points(&self) -> Result<BTreeMap<Symbol, Point>, RenderError> {
        let points = self.spec.coordinate_map();
        for (&symbol, p) in &points {
            if !p.is_finite() {
                return Err(RenderError::NonFiniteCoordinate {
                    symbol,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        Ok(points)
    }

    /// Check the styling values every renderer depends on.
    pub fn check_style(&self) -> Result<(), RenderError> {
        let size = self.caption_style.size;
        if !(size.is_finite() && size > 0.0) {
            return Err(RenderError::InvalidCaptionSize(size));
        }
        let scale = self.options.scale;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidScale(scale));
        }
        check_color(&self.options.text_color)?;
        check_color(&self.options.node_color)?;
        Ok(())
    }
}

fn color_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(#[0-9A-Fa-f]{3}|#[0-9A-Fa-f]{6}|#[0-9A-Fa-f]{8}|[A-Za-z]+)$")
            .expect("static regex")
    })
}

/// Accept `#rgb`, `#rrggbb`, `#rrggbbaa` and bare color names.
pub fn check_color(color: &str) -> Result<(), RenderError> {
    if color_pattern().is_match(color) {
        Ok(())
    } else {
        Err(RenderError::InvalidColor(color.to_string()))
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────────

/// Bounding box of the node points in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut b = Bounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        if b.min_x > b.max_x {
            return Bounds {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
            };
        }
        b
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Trait for plot renderers.
pub trait Renderer {
    /// Short name used in logs ("text", "svg", "json").
    fn name(&self) -> &'static str;

    /// Draw a plot to a string.
    fn render(&self, plot: &Plot) -> Result<String, RenderError>;
}

/// Output formats with a built-in renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Svg,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Text => Box::new(AsciiRenderer::new()),
            OutputFormat::Svg => Box::new(SvgRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" | "ascii" => Ok(OutputFormat::Text),
            "svg" => Ok(OutputFormat::Svg),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format '{other}'; use text, svg, or json")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_plot.rs"]
mod tests;
