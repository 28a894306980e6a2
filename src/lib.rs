//! mediation-dag: causal DAG plots for mediation analysis.
//!
//! Public API: `render_mediation_dag()`, `build_plot()`, `render_to_string()`.
//!
//! A plot has an exposure (A), an outcome (Y), one or more mediators (M)
//! and, optionally, baseline confounders (C) and post-exposure confounders
//! (L). Which of the two confounder groups are present picks one of four
//! fixed causal templates; the nodes are placed at caller-supplied points
//! and a caption lists the real variable names behind each symbol.

pub mod config;
pub mod dag;
pub mod error;
pub mod graph;
pub mod renderers;
pub mod roles;
pub mod wrap;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::io::Write;

pub use crate::config::{CaptionStyle, Coordinates, DagConfig, Point, RenderOptions};
pub use crate::dag::{Caption, DagSpec, Edge, MediationDag, Template};
pub use crate::error::{Error, RenderError, Result, WrapError};
pub use crate::renderers::{OutputFormat, Plot, Renderer, Theme};
pub use crate::roles::{Role, Symbol};

/// A plot together with what the renderer drew for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlot {
    pub plot: Plot,
    pub output: String,
}

/// Build the plot object: template, coordinates, blank theme and caption.
///
/// Fails with `Error::MissingRequiredRole` before anything else runs when
/// outcome, exposure or mediator is unset.
pub fn build_plot(dag: &MediationDag) -> Result<Plot> {
    let (spec, caption) = dag.spec_with_caption()?;
    Ok(Plot::new(spec, dag.options.clone())
        .with_theme(Theme::Blank)
        .with_caption(caption, dag.caption.clone()))
}

/// Build, render and display a mediation DAG.
///
/// The rendered output is written to `device`; the plot is also returned
/// so callers can keep composing with it. Nothing is written on error.
pub fn render_mediation_dag<W: Write + ?Sized>(
    dag: &MediationDag,
    renderer: &dyn Renderer,
    device: &mut W,
) -> Result<RenderedPlot> {
    let plot = build_plot(dag)?;
    let output = renderer.render(&plot)?;
    device.write_all(output.as_bytes())?;
    device.flush()?;
    tracing::info!(
        renderer = renderer.name(),
        template = plot.spec.template.name(),
        bytes = output.len(),
        "displayed mediation dag"
    );
    Ok(RenderedPlot { plot, output })
}

/// Build and render a mediation DAG without displaying it.
pub fn render_to_string(dag: &MediationDag, format: OutputFormat) -> Result<String> {
    let plot = build_plot(dag)?;
    Ok(format.renderer().render(&plot)?)
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
