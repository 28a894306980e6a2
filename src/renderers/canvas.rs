//! Canvas: a 2D character grid the text renderer paints on.

use super::charset::{BoxChars, CharSet};

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on a cell.
    pub fn centered(col: i64, row: i64, width: i64, height: i64) -> Self {
        Self::new(col - width / 2, row - height / 2, width, height)
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }
}

// ─── Line rasterising ─────────────────────────────────────────────────────────

/// Cells on the straight segment from `(c0, r0)` to `(c1, r1)`, inclusive.
pub fn line_cells(c0: i64, r0: i64, c1: i64, r1: i64) -> Vec<(i64, i64)> {
    let dc = c1 - c0;
    let dr = r1 - r0;
    let steps = dc.abs().max(dr.abs());
    if steps == 0 {
        return vec![(c0, r0)];
    }
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let c = c0 as f64 + dc as f64 * t;
            let r = r0 as f64 + dr as f64 * t;
            (c.round() as i64, r.round() as i64)
        })
        .collect()
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
///
/// Writes outside the grid are silently dropped.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn index(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        if col < 0 || row < 0 {
            return None;
        }
        let (c, r) = (col as usize, row as usize);
        (c < self.width && r < self.height).then_some((c, r))
    }

    pub fn get(&self, col: i64, row: i64) -> char {
        match self.index(col, row) {
            Some((c, r)) => self.cells[r][c],
            None => ' ',
        }
    }

    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        if let Some((c, r)) = self.index(col, row) {
            self.cells[r][c] = ch;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char) {
        for row in rect.y..rect.bottom() {
            for col in rect.x..rect.right() {
                self.set(col, row, ch);
            }
        }
    }

    /// Draw a box outline.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
        for col in (x0 + 1)..x1 {
            self.set(col, y0, bc.horizontal);
            self.set(col, y1, bc.horizontal);
        }
        for row in (y0 + 1)..y1 {
            self.set(x0, row, bc.vertical);
            self.set(x1, row, bc.vertical);
        }
    }

    /// Write a string starting at (col, row), clipped to the grid.
    pub fn write_str(&mut self, col: i64, row: i64, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.set(col + i as i64, row, ch);
        }
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
