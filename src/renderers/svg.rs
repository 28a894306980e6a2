//! SVG renderer. Draws a plot as a standalone SVG document.
//!
//! Nodes are circles labelled with their symbol, edges are straight lines
//! with an arrowhead marker, and the caption sits under the panel.

use std::collections::BTreeMap;

use super::{Bounds, Plot, Renderer, Theme};
use crate::config::Point;
use crate::error::RenderError;
use crate::roles::Symbol;

// ── Constants ────────────────────────────────────────────────────────────────

const UNIT: f64 = 100.0;
const PADDING: f64 = 40.0;
const NODE_RADIUS: f64 = 18.0;
const FONT_SIZE: f64 = 16.0;
const FONT_FAMILY: &str = "sans-serif";
const PANEL_FILL: &str = "#ebebeb";
/// Rough advance width of one caption character, as a fraction of font size.
const CHAR_ADVANCE: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.3;
/// Grid lines along one axis stop at `MAX_GRID_LINES + 1`.
pub const MAX_GRID_LINES: usize = 100;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct Frame {
    bounds: Bounds,
    unit: f64,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        PADDING + (x - self.bounds.min_x) * self.unit
    }

    fn py(&self, y: f64) -> f64 {
        PADDING + (self.bounds.max_y - y) * self.unit
    }

    fn panel_width(&self) -> f64 {
        2.0 * PADDING + self.bounds.width() * self.unit
    }

    fn panel_height(&self) -> f64 {
        2.0 * PADDING + self.bounds.height() * self.unit
    }
}

// ── Theme ────────────────────────────────────────────────────────────────────

/// Whole-number grid positions in `[min, max]`: one per unit, or evenly
/// spaced whole steps once the span passes `MAX_GRID_LINES` units.
fn grid_ticks(min: f64, max: f64) -> Vec<f64> {
    let start = min.ceil();
    let span = max - start;
    if !(span.is_finite() && span >= 0.0) {
        return Vec::new();
    }
    let step = (span / MAX_GRID_LINES as f64).ceil().max(1.0);
    let count = ((span / step).floor() as usize).min(MAX_GRID_LINES);
    (0..=count).map(|i| start + i as f64 * step).collect()
}

fn render_background(theme: Theme, frame: &Frame, w: f64, h: f64) -> Vec<String> {
    match theme {
        Theme::Blank => vec![format!(
            r#"<rect width="{w:.1}" height="{h:.1}" fill="white"/>"#
        )],
        Theme::Grid => {
            let pw = frame.panel_width();
            let ph = frame.panel_height();
            let b = frame.bounds;
            let mut parts = vec![
                format!(r#"<rect width="{w:.1}" height="{h:.1}" fill="white"/>"#),
                format!(r#"<rect class="panel" width="{pw:.1}" height="{ph:.1}" fill="{PANEL_FILL}"/>"#),
            ];
            for x in grid_ticks(b.min_x, b.max_x) {
                let sx = frame.px(x);
                parts.push(format!(
                    r#"<line class="grid" x1="{sx:.1}" y1="0.0" x2="{sx:.1}" y2="{ph:.1}" stroke="white"/>"#
                ));
            }
            for y in grid_ticks(b.min_y, b.max_y) {
                let sy = frame.py(y);
                parts.push(format!(
                    r#"<line class="grid" x1="0.0" y1="{sy:.1}" x2="{pw:.1}" y2="{sy:.1}" stroke="white"/>"#
                ));
            }
            parts
        }
    }
}

// ── Edges ────────────────────────────────────────────────────────────────────

fn render_edge(frame: &Frame, from: Symbol, a: Point, to: Symbol, b: Point, r: f64) -> Option<String> {
    let (x0, y0) = (frame.px(a.x), frame.py(a.y));
    let (x1, y1) = (frame.px(b.x), frame.py(b.y));
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= 2.0 * r {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    let (sx, sy) = (x0 + ux * r, y0 + uy * r);
    let (ex, ey) = (x1 - ux * r, y1 - uy * r);
    Some(format!(
        r#"<line class="edge" data-from="{from}" data-to="{to}" x1="{sx:.1}" y1="{sy:.1}" x2="{ex:.1}" y2="{ey:.1}" stroke="black" stroke-width="1.5" marker-end="url(#arrowhead)"/>"#
    ))
}

// ── Nodes ────────────────────────────────────────────────────────────────────

fn render_node(frame: &Frame, symbol: Symbol, p: Point, plot: &Plot) -> String {
    let cx = frame.px(p.x);
    let cy = frame.py(p.y);
    let opts = &plot.options;
    let text_fill = if opts.node {
        &opts.text_color
    } else {
        &opts.node_color
    };
    let mut parts = vec![format!(r#"<g class="node" id="node-{symbol}">"#)];
    if opts.node {
        parts.push(format!(
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{NODE_RADIUS:.1}" fill="{}"/>"#,
            opts.node_color
        ));
    }
    parts.push(format!(
        r#"<text x="{cx:.1}" y="{cy:.1}" dominant-baseline="central" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE:.1}" fill="{text_fill}">{symbol}</text>"#
    ));
    parts.push("</g>".to_string());
    parts.join("\n")
}

// ── Caption ──────────────────────────────────────────────────────────────────

fn render_caption(plot: &Plot, top: f64, svg_w: f64) -> Option<String> {
    let rows = plot.caption.rows();
    if rows.is_empty() {
        return None;
    }
    let style = &plot.caption_style;
    let size = style.size;
    let (x, anchor) = if style.left_aligned {
        (PADDING, "start")
    } else {
        (svg_w - PADDING, "end")
    };
    let font_style = if style.italic { "italic" } else { "normal" };
    let tspans: String = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let dy = if i == 0 { 0.0 } else { size * LINE_HEIGHT };
            format!(r#"<tspan x="{x:.1}" dy="{dy:.1}">{}</tspan>"#, escape(row))
        })
        .collect();
    let y = top + size;
    Some(format!(
        r#"<text class="caption" x="{x:.1}" y="{y:.1}" text-anchor="{anchor}" font-family="{FONT_FAMILY}" font-size="{size:.1}" font-style="{font_style}" fill="black">{tspans}</text>"#
    ))
}

fn caption_extent(plot: &Plot) -> (f64, f64) {
    let rows = plot.caption.rows();
    if rows.is_empty() {
        return (0.0, 0.0);
    }
    let size = plot.caption_style.size;
    let longest = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let w = 2.0 * PADDING + longest as f64 * size * CHAR_ADVANCE;
    let h = rows.len() as f64 * size * LINE_HEIGHT + PADDING / 2.0;
    (w, h)
}

// ── Public Renderer ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, plot: &Plot) -> Result<String, RenderError> {
        plot.check_style()?;
        let points: BTreeMap<Symbol, Point> = plot.finite_points()?;
        let frame = Frame {
            bounds: Bounds::of(points.values()),
            unit: UNIT * plot.options.scale,
        };

        let (cap_w, cap_h) = caption_extent(plot);
        let svg_w = frame.panel_width().max(cap_w);
        let svg_h = frame.panel_height() + cap_h;

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_w:.1}" height="{svg_h:.1}" viewBox="0 0 {svg_w:.1} {svg_h:.1}">"#
            ),
            "<defs>".to_string(),
            r#"  <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto">"#.to_string(),
            r#"    <polygon points="0 0, 10 3.5, 0 7" fill="black"/>"#.to_string(),
            "  </marker>".to_string(),
            "</defs>".to_string(),
        ];
        parts.extend(render_background(plot.theme, &frame, svg_w, svg_h));

        let radius = if plot.options.node {
            NODE_RADIUS
        } else {
            FONT_SIZE * CHAR_ADVANCE
        };
        for e in &plot.spec.edges {
            let (Some(&a), Some(&b)) = (points.get(&e.from), points.get(&e.to)) else {
                continue;
            };
            if let Some(svg) = render_edge(&frame, e.from, a, e.to, b, radius) {
                parts.push(svg);
            }
        }

        let order = plot
            .graph()
            .topological_order()
            .unwrap_or_else(|| plot.spec.nodes());
        for symbol in order {
            if let Some(&p) = points.get(&symbol) {
                parts.push(render_node(&frame, symbol, p, plot));
            }
        }

        if let Some(caption) = render_caption(plot, frame.panel_height(), svg_w) {
            parts.push(caption);
        }

        parts.push("</svg>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
