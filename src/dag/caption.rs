//! Role caption: one line per present role, in A, M, Y, C, L order.

use serde::Serialize;

use crate::error::WrapError;
use crate::roles::{Role, Symbol, VariableBinding};
use crate::wrap::wrap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionLine {
    pub symbol: Symbol,
    pub role: Role,
    pub names: Vec<String>,
    /// The comma-joined names after wrapping.
    pub wrapped: Vec<String>,
}

impl CaptionLine {
    pub fn prefix(&self) -> String {
        format!("{} ({}): ", self.symbol, self.role)
    }

    /// e.g. `M (Mediator): diet, activity`; wrapped rows are joined by newlines.
    pub fn text(&self) -> String {
        format!("{}{}", self.prefix(), self.wrapped.join("\n"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Caption {
    pub lines: Vec<CaptionLine>,
}

impl Caption {
    pub fn build(bindings: &[VariableBinding], width: usize) -> Result<Self, WrapError> {
        let mut lines = Vec::with_capacity(bindings.len());
        for symbol in Symbol::CAPTION_ORDER {
            let Some(b) = bindings.iter().find(|b| b.symbol == symbol) else {
                continue;
            };
            lines.push(CaptionLine {
                symbol,
                role: b.role(),
                names: b.names.clone(),
                wrapped: wrap(&b.joined_names(), width)?,
            });
        }
        tracing::debug!(lines = lines.len(), width, "assembled caption");
        Ok(Self { lines })
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.lines.iter().map(|l| l.symbol).collect()
    }

    pub fn line(&self, symbol: Symbol) -> Option<&CaptionLine> {
        self.lines.iter().find(|l| l.symbol == symbol)
    }

    /// Physical text rows as they should be drawn.
    pub fn rows(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|l| {
                l.text()
                    .split('\n')
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(CaptionLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_caption.rs"]
mod tests;
