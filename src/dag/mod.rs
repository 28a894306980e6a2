//! DAG builder: turns named roles into a fixed causal template,
//! a coordinate map and a role caption.
//!
//! The template is chosen only by whether baseline confounders (C) and
//! post-exposure confounders (L) were supplied. Edges come from one
//! declarative superset filtered by symbol presence.

pub mod caption;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{CaptionStyle, Coordinates, DagConfig, Point, RenderOptions};
use crate::error::{Error, Result};
use crate::graph::CausalGraph;
use crate::roles::{Role, Symbol, VariableBinding};

pub use caption::{Caption, CaptionLine};

// ─── Edges ────────────────────────────────────────────────────────────────────

/// A directed causal edge: `from` causes `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: Symbol,
    pub to: Symbol,
}

impl Edge {
    pub const fn new(from: Symbol, to: Symbol) -> Self {
        Self { from, to }
    }
}

/// Every edge any template can contain, in display order.
///
/// C precedes A and affects A, M, Y. L is caused by A and affects M, Y.
pub const CAUSAL_EDGES: [Edge; 9] = [
    Edge::new(Symbol::A, Symbol::Y),
    Edge::new(Symbol::M, Symbol::Y),
    Edge::new(Symbol::C, Symbol::Y),
    Edge::new(Symbol::L, Symbol::Y),
    Edge::new(Symbol::A, Symbol::M),
    Edge::new(Symbol::C, Symbol::M),
    Edge::new(Symbol::L, Symbol::M),
    Edge::new(Symbol::C, Symbol::A),
    Edge::new(Symbol::A, Symbol::L),
];

// ─── Template ────────────────────────────────────────────────────────────────

/// One of the four fixed causal structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    Neither,
    BasecOnly,
    PostcOnly,
    Both,
}

impl Template {
    pub fn select(has_basec: bool, has_postc: bool) -> Self {
        match (has_basec, has_postc) {
            (false, false) => Template::Neither,
            (true, false) => Template::BasecOnly,
            (false, true) => Template::PostcOnly,
            (true, true) => Template::Both,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Template::Neither => "neither",
            Template::BasecOnly => "basec-only",
            Template::PostcOnly => "postc-only",
            Template::Both => "both",
        }
    }

    pub fn includes(self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::C => matches!(self, Template::BasecOnly | Template::Both),
            Symbol::L => matches!(self, Template::PostcOnly | Template::Both),
            _ => true,
        }
    }

    /// Present symbols in caption order.
    pub fn symbols(self) -> Vec<Symbol> {
        Symbol::CAPTION_ORDER
            .into_iter()
            .filter(|&s| self.includes(s))
            .collect()
    }

    pub fn edges(self) -> Vec<Edge> {
        CAUSAL_EDGES
            .into_iter()
            .filter(|e| self.includes(e.from) && self.includes(e.to))
            .collect()
    }
}

// ─── MediationDag ────────────────────────────────────────────────────────────

/// Inputs for one mediation DAG plot.
///
/// An empty outcome/exposure string or an empty mediator list counts as
/// unset. An empty confounder list counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediationDag {
    pub outcome: Option<String>,
    pub exposure: Option<String>,
    pub mediators: Vec<String>,
    pub basec: Option<Vec<String>>,
    pub postc: Option<Vec<String>>,
    pub coordinates: Coordinates,
    pub caption: CaptionStyle,
    /// Forwarded to the renderer unchanged.
    pub options: RenderOptions,
}

fn owned<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl MediationDag {
    pub fn new<I, S>(outcome: impl Into<String>, exposure: impl Into<String>, mediators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outcome: Some(outcome.into()),
            exposure: Some(exposure.into()),
            mediators: owned(mediators),
            ..Self::default()
        }
    }

    pub fn from_config(cfg: &DagConfig) -> Self {
        Self {
            outcome: cfg.roles.outcome.clone(),
            exposure: cfg.roles.exposure.clone(),
            mediators: cfg.roles.mediator.clone(),
            basec: cfg.roles.basec.clone(),
            postc: cfg.roles.postc.clone(),
            coordinates: cfg.coordinates,
            caption: cfg.caption.clone(),
            options: cfg.render.clone(),
        }
    }

    pub fn basec<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basec = Some(owned(names));
        self
    }

    pub fn postc<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.postc = Some(owned(names));
        self
    }

    pub fn coordinate(mut self, symbol: Symbol, point: Point) -> Self {
        self.coordinates.set(symbol, point);
        self
    }

    pub fn caption_width(mut self, width: usize) -> Self {
        self.caption.width = width;
        self
    }

    pub fn caption_size(mut self, size: f64) -> Self {
        self.caption.size = size;
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    fn has_basec(&self) -> bool {
        self.basec.as_ref().is_some_and(|v| !v.is_empty())
    }

    fn has_postc(&self) -> bool {
        self.postc.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Check that outcome, exposure and at least one mediator are present.
    pub fn validate(&self) -> Result<()> {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if !set(&self.outcome) {
            return Err(Error::MissingRequiredRole(Role::Outcome));
        }
        if !set(&self.exposure) {
            return Err(Error::MissingRequiredRole(Role::Exposure));
        }
        if self.mediators.is_empty() {
            return Err(Error::MissingRequiredRole(Role::Mediator));
        }
        Ok(())
    }

    pub fn template(&self) -> Template {
        Template::select(self.has_basec(), self.has_postc())
    }

    fn names_for(&self, symbol: Symbol) -> Vec<String> {
        match symbol {
            Symbol::A => self.exposure.iter().cloned().collect(),
            Symbol::M => self.mediators.clone(),
            Symbol::Y => self.outcome.iter().cloned().collect(),
            Symbol::C => self.basec.clone().unwrap_or_default(),
            Symbol::L => self.postc.clone().unwrap_or_default(),
        }
    }

    /// Validate, then build the `DagSpec`.
    pub fn spec(&self) -> Result<DagSpec> {
        self.validate()?;
        let template = self.template();
        let bindings = template
            .symbols()
            .into_iter()
            .map(|s| VariableBinding::new(s, self.names_for(s), self.coordinates.get(s)))
            .collect();
        let spec = DagSpec {
            template,
            bindings,
            edges: template.edges(),
        };
        tracing::debug!(
            template = template.name(),
            nodes = spec.bindings.len(),
            edges = spec.edges.len(),
            "selected causal template"
        );
        Ok(spec)
    }

    /// Validate, then build the `DagSpec` and its caption.
    pub fn spec_with_caption(&self) -> Result<(DagSpec, Caption)> {
        let spec = self.spec()?;
        let caption = Caption::build(&spec.bindings, self.caption.width)?;
        Ok((spec, caption))
    }
}

// ─── DagSpec ─────────────────────────────────────────────────────────────────

/// Structure and placement for one plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DagSpec {
    pub template: Template,
    /// One binding per present symbol, in caption order.
    pub bindings: Vec<VariableBinding>,
    pub edges: Vec<Edge>,
}

impl DagSpec {
    pub fn nodes(&self) -> Vec<Symbol> {
        self.bindings.iter().map(|b| b.symbol).collect()
    }

    pub fn binding(&self, symbol: Symbol) -> Option<&VariableBinding> {
        self.bindings.iter().find(|b| b.symbol == symbol)
    }

    /// Points for the present symbols only.
    pub fn coordinate_map(&self) -> BTreeMap<Symbol, Point> {
        self.bindings.iter().map(|b| (b.symbol, b.point)).collect()
    }

    pub fn to_graph(&self) -> CausalGraph {
        let mut g = CausalGraph::new();
        for s in self.nodes() {
            g.add_node(s);
        }
        for e in &self.edges {
            g.add_edge(e.from, e.to);
        }
        g
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_dag.rs"]
mod tests;
