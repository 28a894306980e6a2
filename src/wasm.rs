//! WASM bindings for mediation-dag.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.
//! Name lists are passed as comma-separated strings.

use wasm_bindgen::prelude::*;

use crate::{MediationDag, OutputFormat, render_to_string};

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render a mediation DAG as Unicode text with default settings.
#[wasm_bindgen]
pub fn render(outcome: &str, exposure: &str, mediators: &str) -> Result<String, JsError> {
    let dag = MediationDag::new(outcome, exposure, split_names(mediators));
    render_to_string(&dag, OutputFormat::Text).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a mediation DAG with confounders and a chosen output format.
///
/// - `basec` / `postc`: comma-separated names, or empty string for none
/// - `format`: "text", "svg" or "json"
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    outcome: &str,
    exposure: &str,
    mediators: &str,
    basec: &str,
    postc: &str,
    caption_width: usize,
    format: &str,
) -> Result<String, JsError> {
    let format: OutputFormat = format.parse().map_err(|e: String| JsError::new(&e))?;
    let mut dag = MediationDag::new(outcome, exposure, split_names(mediators))
        .caption_width(caption_width);
    if !basec.is_empty() {
        dag = dag.basec(split_names(basec));
    }
    if !postc.is_empty() {
        dag = dag.postc(split_names(postc));
    }
    render_to_string(&dag, format).map_err(|e| JsError::new(&e.to_string()))
}
