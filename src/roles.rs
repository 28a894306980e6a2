//! Variable roles in a mediation-analysis DAG.
//!
//! Each role is drawn as one node, labelled by a short structural symbol
//! (A, M, Y, C, L). The real variable names only appear in the caption.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Point;

// ─── Role ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Exposure,
    Mediator,
    Outcome,
    BaselineConfounder,
    PostExposureConfounder,
}

impl Role {
    /// Human readable name used in caption lines.
    pub fn name(self) -> &'static str {
        match self {
            Role::Exposure => "Exposure",
            Role::Mediator => "Mediator",
            Role::Outcome => "Outcome",
            Role::BaselineConfounder => "Baseline Confounder",
            Role::PostExposureConfounder => "Post-exposure Confounder",
        }
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Role::Exposure => Symbol::A,
            Role::Mediator => Symbol::M,
            Role::Outcome => Symbol::Y,
            Role::BaselineConfounder => Symbol::C,
            Role::PostExposureConfounder => Symbol::L,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Structural node symbol. Declaration order is the caption order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    A, // exposure
    M, // mediator(s)
    Y, // outcome
    C, // baseline confounder(s)
    L, // post-exposure confounder(s)
}

impl Symbol {
    pub const CAPTION_ORDER: [Symbol; 5] = [Symbol::A, Symbol::M, Symbol::Y, Symbol::C, Symbol::L];

    pub fn letter(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::M => 'M',
            Symbol::Y => 'Y',
            Symbol::C => 'C',
            Symbol::L => 'L',
        }
    }

    pub fn role(self) -> Role {
        match self {
            Symbol::A => Role::Exposure,
            Symbol::M => Role::Mediator,
            Symbol::Y => Role::Outcome,
            Symbol::C => Role::BaselineConfounder,
            Symbol::L => Role::PostExposureConfounder,
        }
    }

    /// Whether the symbol appears in every template.
    pub fn is_required(self) -> bool {
        matches!(self, Symbol::A | Symbol::M | Symbol::Y)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ─── VariableBinding ─────────────────────────────────────────────────────────

/// A symbol bound to caller-supplied variable names and one plotting point.
///
/// Several names bound to one symbol share the point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableBinding {
    pub symbol: Symbol,
    pub names: Vec<String>,
    pub point: Point,
}

impl VariableBinding {
    pub fn new(symbol: Symbol, names: Vec<String>, point: Point) -> Self {
        Self {
            symbol,
            names,
            point,
        }
    }

    pub fn role(&self) -> Role {
        self.symbol.role()
    }

    /// Names joined with ", " in the order they were supplied.
    pub fn joined_names(&self) -> String {
        self.names.join(", ")
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_roles.rs"]
mod tests;
