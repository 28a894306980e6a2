//! JSON renderer. Emits the structural plot data instead of a drawing.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Plot, Renderer};
use crate::config::Point;
use crate::dag::{CaptionLine, Edge, Template};
use crate::error::RenderError;
use crate::roles::{Symbol, VariableBinding};

#[derive(Serialize)]
struct PlotDocument<'a> {
    template: Template,
    nodes: Vec<Symbol>,
    edges: &'a [Edge],
    coordinates: BTreeMap<Symbol, Point>,
    bindings: &'a [VariableBinding],
    caption: &'a [CaptionLine],
    caption_text: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, plot: &Plot) -> Result<String, RenderError> {
        let doc = PlotDocument {
            template: plot.spec.template,
            nodes: plot.spec.nodes(),
            edges: &plot.spec.edges,
            coordinates: plot.finite_points()?,
            bindings: &plot.spec.bindings,
            caption: &plot.caption.lines,
            caption_text: plot.caption.text(),
        };
        let mut out =
            serde_json::to_string_pretty(&doc).map_err(|e| RenderError::Serialize(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}
