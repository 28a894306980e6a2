//! Plot configuration: node coordinates, caption styling and the options
//! forwarded untouched to a renderer.
//!
//! `DagConfig` is the on-disk form (TOML); every field is optional and
//! falls back to the documented defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::roles::Symbol;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A plotting position in data units. Only used for layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// One point per symbol group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub outcome: Point,
    pub exposure: Point,
    pub mediator: Point,
    pub basec: Point,
    pub postc: Point,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            outcome: Point::new(4.0, 0.0),
            exposure: Point::new(0.0, 0.0),
            mediator: Point::new(2.0, 1.0),
            basec: Point::new(2.0, 2.0),
            postc: Point::new(2.0, -0.5),
        }
    }
}

impl Coordinates {
    pub fn get(&self, symbol: Symbol) -> Point {
        match symbol {
            Symbol::A => self.exposure,
            Symbol::M => self.mediator,
            Symbol::Y => self.outcome,
            Symbol::C => self.basec,
            Symbol::L => self.postc,
        }
    }

    pub fn set(&mut self, symbol: Symbol, point: Point) {
        match symbol {
            Symbol::A => self.exposure = point,
            Symbol::M => self.mediator = point,
            Symbol::Y => self.outcome = point,
            Symbol::C => self.basec = point,
            Symbol::L => self.postc = point,
        }
    }
}

// ─── CaptionStyle ────────────────────────────────────────────────────────────

/// How the role caption is wrapped and drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Maximum caption line width, in characters.
    pub width: usize,
    /// Caption font size (points for SVG; ignored by the text renderer).
    pub size: f64,
    pub italic: bool,
    pub left_aligned: bool,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            width: 50,
            size: 10.0,
            italic: true,
            left_aligned: true,
        }
    }
}

// ─── RenderOptions ───────────────────────────────────────────────────────────

/// Styling options passed through to the renderer unchanged.
///
/// Nothing here is checked while building the DAG; renderers reject values
/// they cannot draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw a shape around each node (true) or only its symbol (false).
    pub node: bool,
    /// Symbol color when nodes are drawn.
    pub text_color: String,
    pub node_color: String,
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Multiplier applied to the renderer's base unit per coordinate step.
    pub scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            node: true,
            text_color: "white".to_string(),
            node_color: "black".to_string(),
            unicode: true,
            scale: 1.0,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

// ─── DagConfig ───────────────────────────────────────────────────────────────

/// Variable names as they appear in a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleNames {
    pub outcome: Option<String>,
    pub exposure: Option<String>,
    pub mediator: Vec<String>,
    pub basec: Option<Vec<String>>,
    pub postc: Option<Vec<String>>,
}

/// File-level configuration, read from TOML.
///
/// ```toml
/// [roles]
/// outcome = "bmi"
/// exposure = "smoking"
/// mediator = ["diet", "activity"]
///
/// [coordinates.mediator]
/// x = 2.0
/// y = 1.5
///
/// [caption]
/// width = 40
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DagConfig {
    pub roles: RoleNames,
    pub coordinates: Coordinates,
    pub caption: CaptionStyle,
    pub render: RenderOptions,
}

impl DagConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded dag config");
        Self::from_toml_str(&text)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
