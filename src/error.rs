//! Error types.

use crate::roles::{Role, Symbol};

/// Errors raised by the text-wrapping step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WrapError {
    #[error("wrap width must be at least 1")]
    ZeroWidth,
}

/// Errors raised by a renderer while drawing a plot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// A node position is NaN or infinite.
    #[error("coordinate for {symbol} is not finite: ({x}, {y})")]
    NonFiniteCoordinate { symbol: Symbol, x: f64, y: f64 },

    #[error("caption size must be a positive number, got {0}")]
    InvalidCaptionSize(f64),

    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f64),

    /// The scaled layout does not fit on a character grid of `limit` cells.
    #[error("drawing needs a {cols} x {rows} grid, more than {limit} cells")]
    GridTooLarge { cols: f64, rows: f64, limit: usize },

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Top-level error for building and displaying a mediation DAG.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Outcome, exposure or mediator was not supplied.
    #[error("missing required role: {0}")]
    MissingRequiredRole(Role),

    #[error(transparent)]
    Wrap(#[from] WrapError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
