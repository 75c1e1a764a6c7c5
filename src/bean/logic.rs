//! Bean trajectory: skill roll at creation and per-peg deflection.

use super::types::{BeanError, BeanMode};
use crate::constants::{DEFLECT_PROBABILITY, PEG_CHOICES};
use crate::random::RandomSource;
use tracing::warn;

/// A single bean falling through the pegboard.
///
/// `y` counts pegs passed and `x` counts rightward deflections, so
/// `0 <= x <= y` always holds. After `slot_count - 1` steps the bean sits
/// in the bottom row and `x` is its landing slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bean {
    x: usize,
    y: usize,
    slot_count: usize,
    mode: BeanMode,
    skill_level: usize,
}

impl Bean {
    /// Create a bean at the top of a `slot_count`-slot board.
    ///
    /// Consumes exactly one gaussian draw for the skill level, in both modes.
    pub fn new(
        slot_count: usize,
        mode: BeanMode,
        rng: &mut impl RandomSource,
    ) -> Result<Self, BeanError> {
        if slot_count < 1 {
            return Err(BeanError::InvalidSlotCount(slot_count));
        }
        let skill_level = skill_level_from_draw(slot_count, rng.next_gaussian());
        Ok(Self {
            x: 0,
            y: 0,
            slot_count,
            mode,
            skill_level,
        })
    }

    /// Create a bean with a known skill level, clamped to the board.
    pub fn with_skill_level(
        slot_count: usize,
        mode: BeanMode,
        skill_level: usize,
    ) -> Result<Self, BeanError> {
        if slot_count < 1 {
            return Err(BeanError::InvalidSlotCount(slot_count));
        }
        Ok(Self {
            x: 0,
            y: 0,
            slot_count,
            mode,
            skill_level: skill_level.min(slot_count - 1),
        })
    }

    pub fn x_pos(&self) -> usize {
        self.x
    }

    pub fn y_pos(&self) -> usize {
        self.y
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn mode(&self) -> BeanMode {
        self.mode
    }

    pub fn skill_level(&self) -> usize {
        self.skill_level
    }

    /// Whether the bean has passed every peg row.
    pub fn at_bottom(&self) -> bool {
        self.y + 1 >= self.slot_count
    }

    /// Return the bean to the top of the board. Mode and skill are kept.
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Fall one row, deflecting right or holding.
    ///
    /// Luck beans draw `next_bit(2)` and move right on 1. Skill beans move
    /// right while `x < skill_level` and draw nothing. Stepping past the
    /// bottom row is an error and leaves the bean faulted.
    pub fn advance_step(&mut self, rng: &mut impl RandomSource) -> Result<(), BeanError> {
        self.y += 1;

        let deflect = match self.mode {
            BeanMode::Luck => rng.next_bit(PEG_CHOICES) == 1,
            BeanMode::Skill => self.x < self.skill_level,
        };
        if deflect {
            self.x += 1;
        }

        if self.x >= self.slot_count || self.y >= self.slot_count {
            warn!(
                x = self.x,
                y = self.y,
                slot_count = self.slot_count,
                "bean stepped past the bottom row"
            );
            return Err(BeanError::OutOfBounds {
                x: self.x,
                y: self.y,
                slot_count: self.slot_count,
            });
        }
        Ok(())
    }
}

/// Map a standard normal draw to a skill level.
///
/// Normal approximation of Binomial(slot_count - 1, 0.5): scale by
/// `sqrt(n * p * (1 - p))`, shift by `(slot_count - 1) * p`, round half up,
/// then clamp to `[0, slot_count - 1]`.
pub fn skill_level_from_draw(slot_count: usize, draw: f64) -> usize {
    let max_level = slot_count.saturating_sub(1);
    let average = max_level as f64 * DEFLECT_PROBABILITY;
    let std_dev = (slot_count as f64 * DEFLECT_PROBABILITY * (1.0 - DEFLECT_PROBABILITY)).sqrt();

    let raw = (draw * std_dev + average + 0.5).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= max_level as f64 {
        max_level
    } else {
        raw as usize
    }
}
