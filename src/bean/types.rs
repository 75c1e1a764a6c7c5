//! Bean data types: deflection mode and the errors a descent can raise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a bean decides whether to deflect at each peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeanMode {
    /// Fair coin flip at every peg; skill level is ignored.
    Luck,
    /// Deflect right until `skill_level` deflections have happened, then hold.
    Skill,
}

impl BeanMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Luck => "luck",
            Self::Skill => "skill",
        }
    }

    /// Parse a mode from its command-line name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "luck" => Some(Self::Luck),
            "skill" => Some(Self::Skill),
            _ => None,
        }
    }
}

impl std::fmt::Display for BeanMode {
    fn fmt(&self, f:&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by beans and the machine that drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeanError {
    /// A step moved the bean past the last peg row or the last slot.
    #[error("bean out of bounds at ({x}, {y}) on a {slot_count}-slot board")]
    OutOfBounds {
        x: usize,
        y: usize,
        slot_count: usize,
    },

    #[error("slot count must be at least 1, got {0}")]
    InvalidSlotCount(usize),

    /// A bean built for one board was loaded into a machine of another size.
    #[error("bean built for {found} slots cannot run on a {expected}-slot machine")]
    SlotCountMismatch { expected: usize, found: usize },
}
