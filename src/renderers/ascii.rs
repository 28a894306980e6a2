//! Unicode/ASCII text renderer.
//!
//! Data coordinates are scaled onto a character grid (y grows upward in
//! data, downward on screen). Edges are straight rasterised strokes ending
//! in an arrowhead just outside the target node. The caption goes below
//! the drawing.

use std::collections::BTreeMap;

use super::canvas::{Canvas, Rect, line_cells};
use super::charset::{BoxChars, CharSet, StrokeChars};
use super::{Bounds, Plot, Renderer, Theme};
use crate::config::Point;
use crate::error::RenderError;
use crate::roles::Symbol;

// ─── Constants ────────────────────────────────────────────────────────────────

const COLS_PER_UNIT: f64 = 10.0;
const ROWS_PER_UNIT: f64 = 4.0;
const MARGIN_COLS: i64 = 4;
const MARGIN_ROWS: i64 = 2;
const NODE_WIDTH: i64 = 5;
const NODE_HEIGHT: i64 = 3;
/// Largest canvas (columns times rows) the renderer will allocate.
pub const MAX_CELLS: usize = 1 << 20;

// ─── Placement ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Placed {
    col: i64,
    row: i64,
    rect: Rect,
}

/// Grid size for a layout, checked against `MAX_CELLS` in floating point
/// so no cast happens on an out-of-range value.
fn grid_extent(b: &Bounds, scale: f64) -> Result<(f64, f64), RenderError> {
    let cols = (b.width() * COLS_PER_UNIT * scale).round() + (2 * MARGIN_COLS + 1) as f64;
    let rows = (b.height() * ROWS_PER_UNIT * scale).round() + (2 * MARGIN_ROWS + 1) as f64;
    if !(cols * rows <= MAX_CELLS as f64) {
        return Err(RenderError::GridTooLarge {
            cols,
            rows,
            limit: MAX_CELLS,
        });
    }
    Ok((cols, rows))
}

fn place_nodes(
    points: &BTreeMap<Symbol, Point>,
    scale: f64,
    draw_node: bool,
) -> Result<BTreeMap<Symbol, Placed>, RenderError> {
    let b = Bounds::of(points.values());
    grid_extent(&b, scale)?;
    let (w, h) = if draw_node {
        (NODE_WIDTH, NODE_HEIGHT)
    } else {
        (1, 1)
    };
    Ok(points
        .iter()
        .map(|(&s, p)| {
            let col = MARGIN_COLS + ((p.x - b.min_x) * COLS_PER_UNIT * scale).round() as i64;
            let row = MARGIN_ROWS + ((b.max_y - p.y) * ROWS_PER_UNIT * scale).round() as i64;
            let rect = Rect::centered(col, row, w, h);
            (s, Placed { col, row, rect })
        })
        .collect())
}

fn canvas_dimensions(placed: &BTreeMap<Symbol, Placed>) -> (usize, usize) {
    let max_col = placed.values().map(|p| p.col).max().unwrap_or(0);
    let max_row = placed.values().map(|p| p.row).max().unwrap_or(0);
    let extent = |max: i64, margin: i64| {
        usize::try_from(max.saturating_add(margin).saturating_add(1)).unwrap_or(0)
    };
    (extent(max_col, MARGIN_COLS), extent(max_row, MARGIN_ROWS))
}

// ─── Painting ─────────────────────────────────────────────────────────────────

fn paint_edge(canvas: &mut Canvas, from: &Placed, to: &Placed, sc: &StrokeChars) {
    let cells: Vec<(i64, i64)> = line_cells(from.col, from.row, to.col, to.row)
        .into_iter()
        .filter(|&(c, r)| !from.rect.contains(c, r) && !to.rect.contains(c, r))
        .collect();
    let Some((&(hc, hr), body)) = cells.split_last() else {
        return;
    };
    let (dx, dy) = (to.col - from.col, to.row - from.row);
    let stroke = sc.stroke(dx, dy);
    for &(c, r) in body {
        canvas.set(c, r, stroke);
    }
    canvas.set(hc, hr, sc.arrow(dx, dy));
}

fn paint_node(canvas: &mut Canvas, placed: &Placed, symbol: Symbol, draw_node: bool) {
    canvas.fill_rect(placed.rect, ' ');
    if draw_node {
        let bc = BoxChars::for_charset(canvas.charset);
        canvas.draw_box(placed.rect, &bc);
    }
    canvas.set(placed.col, placed.row, symbol.letter());
}

fn caption_block(plot: &Plot, drawing_width: usize) -> String {
    let rows = plot.caption.rows();
    if rows.is_empty() {
        return String::new();
    }
    let width = rows
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or(0)
        .max(drawing_width);
    let mut out = String::from("\n");
    for row in rows {
        if plot.caption_style.left_aligned {
            out.push_str(&row);
        } else {
            let pad = width.saturating_sub(row.chars().count());
            out.push_str(&" ".repeat(pad));
            out.push_str(&row);
        }
        out.push('\n');
    }
    out
}

// ─── Public Renderer ──────────────────────────────────────────────────────────

/// Draws a plot as Unicode box-drawing art, or plain ASCII when the
/// plot's `unicode` option is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for AsciiRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, plot: &Plot) -> Result<String, RenderError> {
        plot.check_style()?;
        let points = plot.finite_points()?;
        let opts = &plot.options;
        let cs = CharSet::from_unicode_flag(opts.unicode);

        let placed = place_nodes(&points, opts.scale, opts.node)?;
        let (width, height) = canvas_dimensions(&placed);
        let mut canvas = Canvas::new(width, height, cs);

        if plot.theme == Theme::Grid {
            let frame = BoxChars::frame(cs);
            canvas.draw_box(Rect::new(0, 0, width as i64, height as i64), &frame);
        }

        let sc = StrokeChars::for_charset(cs);
        for e in &plot.spec.edges {
            if let (Some(a), Some(b)) = (placed.get(&e.from), placed.get(&e.to)) {
                paint_edge(&mut canvas, a, b, &sc);
            }
        }

        let graph = plot.graph();
        let order = graph
            .topological_order()
            .unwrap_or_else(|| plot.spec.nodes());
        for symbol in order {
            if let Some(p) = placed.get(&symbol) {
                paint_node(&mut canvas, p, symbol, opts.node);
            }
        }

        let mut out = canvas.render_to_string();
        out.push_str(&caption_block(plot, width));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
