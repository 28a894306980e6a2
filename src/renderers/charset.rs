//! Character sets for node boxes, edge strokes and arrowheads.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// Corners and sides of a node box.
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    /// Dotted frame drawn around the panel by the grid theme.
    pub fn frame(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '┄',
                vertical: '┆',
            },
            CharSet::Ascii => Self {
                top_left: '.',
                top_right: '.',
                bottom_left: '\'',
                bottom_right: '\'',
                horizontal: '.',
                vertical: ':',
            },
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }
}

// ─── Strokes ─────────────────────────────────────────────────────────────────

/// Characters used to draw a straight edge and its head.
pub struct StrokeChars {
    pub horizontal: char,
    pub vertical: char,
    /// Going down-right (or up-left) on screen.
    pub diag_down: char,
    /// Going up-right (or down-left) on screen.
    pub diag_up: char,
    pub arrow_right: char,
    pub arrow_left: char,
    pub arrow_down: char,
    pub arrow_up: char,
}

impl StrokeChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            diag_down: '╲',
            diag_up: '╱',
            arrow_right: '►',
            arrow_left: '◄',
            arrow_down: '▼',
            arrow_up: '▲',
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            diag_down: '\\',
            diag_up: '/',
            arrow_right: '>',
            arrow_left: '<',
            arrow_down: 'v',
            arrow_up: '^',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Stroke for a segment with screen deltas `(dx, dy)`; rows grow downward.
    ///
    /// A segment counts as horizontal or vertical when its slope is at most
    /// 1:2 the other way, so shallow edges stay readable.
    pub fn stroke(&self, dx: i64, dy: i64) -> char {
        let (ax, ay) = (dx.abs(), dy.abs());
        if ay * 2 <= ax {
            self.horizontal
        } else if ax * 2 <= ay {
            self.vertical
        } else if (dx > 0) == (dy > 0) {
            self.diag_down
        } else {
            self.diag_up
        }
    }

    /// Arrowhead pointing along the dominant axis of `(dx, dy)`.
    pub fn arrow(&self, dx: i64, dy: i64) -> char {
        if dx.abs() >= dy.abs() {
            if dx >= 0 {
                self.arrow_right
            } else {
                self.arrow_left
            }
        } else if dy > 0 {
            self.arrow_down
        } else {
            self.arrow_up
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
