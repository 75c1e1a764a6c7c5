//! Bean machine: drops a batch of beans one row apart and collects them in slots.
//!
//! At most one bean occupies each peg row. Every step moves all in-flight
//! beans down a row (bottom first), lands the bean in the last row, and
//! feeds the next waiting bean in at the top.

use crate::bean::{Bean, BeanError, BeanMode};
use crate::random::RandomSource;
use std::collections::VecDeque;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct Machine {
    slot_count: usize,
    /// Beans not yet dropped, in drop order.
    remaining: VecDeque<Bean>,
    /// Indexed by row (`y`).
    in_flight: Vec<Option<Bean>>,
    /// Indexed by slot (`x`).
    slots: Vec<Vec<Bean>>,
}

impl Machine {
    pub fn new(slot_count: usize) -> Result<Self, BeanError> {
        if slot_count < 1 {
            return Err(BeanError::InvalidSlotCount(slot_count));
        }
        Ok(Self {
            slot_count,
            remaining: VecDeque::new(),
            in_flight: vec![None; slot_count],
            slots: vec![Vec::new(); slot_count],
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Clear the board and queue `beans` for dropping. The first bean enters
    /// the top row immediately.
    pub fn reset(&mut self, beans: Vec<Bean>) -> Result<(), BeanError> {
        if let Some(bad) = beans.iter().find(|b| b.slot_count() != self.slot_count) {
            return Err(BeanError::SlotCountMismatch {
                expected: self.slot_count,
                found: bad.slot_count(),
            });
        }

        self.in_flight.iter_mut().for_each(|row| *row = None);
        self.slots.iter_mut().for_each(Vec::clear);
        self.remaining = beans
            .into_iter()
            .map(|mut bean| {
                bean.reset();
                bean
            })
            .collect();

        debug!(
            slot_count = self.slot_count,
            beans = self.remaining.len(),
            "machine reset"
        );
        self.insert_next();
        Ok(())
    }

    /// Create `bean_count` fresh beans from `rng` and reset the machine with them.
    pub fn load(
        &mut self,
        bean_count: usize,
        mode: BeanMode,
        rng: &mut impl RandomSource,
    ) -> Result<(), BeanError> {
        let beans = (0..bean_count)
            .map(|_| Bean::new(self.slot_count, mode, rng))
            .collect::<Result<Vec<_>, _>>()?;
        self.reset(beans)
    }

    /// Scoop up every bean (landed, in flight and waiting) and drop them all
    /// again. Beans keep their skill levels.
    pub fn repeat(&mut self) {
        let mut beans: Vec<Bean> = self.slots.iter_mut().flat_map(std::mem::take).collect();
        beans.extend(self.in_flight.iter_mut().filter_map(Option::take));
        beans.extend(self.remaining.drain(..));

        for bean in &mut beans {
            bean.reset();
        }
        self.remaining = beans.into();
        debug!(beans = self.remaining.len(), "repeating drop");
        self.insert_next();
    }

    /// Advance the board one step. Returns `false` once nothing is left to move.
    pub fn advance_step(&mut self, rng: &mut impl RandomSource) -> Result<bool, BeanError> {
        let mut changed = false;
        let bottom = self.slot_count - 1;

        if let Some(bean) = self.in_flight[bottom].take() {
            trace!(slot = bean.x_pos(), "bean landed");
            self.slots[bean.x_pos()].push(bean);
            changed = true;
        }

        for row in (0..bottom).rev() {
            if let Some(mut bean) = self.in_flight[row].take() {
                bean.advance_step(rng)?;
                self.in_flight[row + 1] = Some(bean);
                changed = true;
            }
        }

        if self.insert_next() {
            changed = true;
        }
        Ok(changed)
    }

    /// Step until the board is empty. Returns the number of steps that moved
    /// something.
    pub fn run_to_completion(&mut self, rng: &mut impl RandomSource) -> Result<u64, BeanError> {
        let mut steps = 0;
        while self.advance_step(rng)? {
            steps += 1;
        }
        Ok(steps)
    }

    /// Keep the lower half of the landed beans (rounding the kept half up),
    /// discarding beans from the highest slots first.
    pub fn lower_half(&mut self) {
        let discard = self.landed_bean_count() / 2;
        Self::discard_from(self.slots.iter_mut().rev(), discard);
    }

    /// Keep the upper half of the landed beans (rounding the kept half up),
    /// discarding beans from the lowest slots first.
    pub fn upper_half(&mut self) {
        let discard = self.landed_bean_count() / 2;
        Self::discard_from(self.slots.iter_mut(), discard);
    }

    fn discard_from<'a>(slots: impl Iterator<Item = &'a mut Vec<Bean>>, mut discard: usize) {
        for slot in slots {
            if discard == 0 {
                break;
            }
            let take = discard.min(slot.len());
            slot.truncate(slot.len() - take);
            discard -= take;
        }
    }

    pub fn remaining_bean_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn in_flight_bean_count(&self) -> usize {
        self.in_flight.iter().filter(|row| row.is_some()).count()
    }

    /// X position of the bean in `row`, if any.
    pub fn in_flight_bean_x_pos(&self, row: usize) -> Option<usize> {
        self.in_flight.get(row)?.as_ref().map(Bean::x_pos)
    }

    /// Number of beans in `slot`; 0 for out-of-range slots.
    pub fn slot_bean_count(&self, slot: usize) -> usize {
        self.slots.get(slot).map_or(0, Vec::len)
    }

    pub fn slot_counts(&self) -> Vec<usize> {
        self.slots.iter().map(Vec::len).collect()
    }

    pub fn landed_bean_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// Landed beans with the slot each one sits in.
    pub fn landed_beans(&self) -> impl Iterator<Item = (usize, &Bean)> {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(slot, beans)| beans.iter().map(move |bean| (slot, bean)))
    }

    /// Mean slot index over landed beans, 0.0 when no bean has landed.
    pub fn average_slot_bean_count(&self) -> f64 {
        let landed = self.landed_bean_count();
        if landed == 0 {
            return 0.0;
        }
        let weighted: usize = self
            .slots
            .iter()
            .enumerate()
            .map(|(slot, beans)| slot * beans.len())
            .sum();
        weighted as f64 / landed as f64
    }

    fn insert_next(&mut self) -> bool {
        match self.remaining.pop_front() {
            Some(bean) => {
                self.in_flight[0] = Some(bean);
                true
            }
            None => false,
        }
    }
}
