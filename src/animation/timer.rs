use crate::foundation::error::{FaceError, FaceResult};

/// Variant index and flip schedule for one timed feature.
///
/// `holds[i]` is how many ticks variant `i` stays on screen (the table wraps when there are more
/// variants than entries). A flip is due once `tick >= next_change`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureTimer {
    index: usize,
    next_change: u64,
    variants: usize,
    holds: Vec<u64>,
}

impl FeatureTimer {
    /// Start on variant 0; the first flip is due after variant 0's hold.
    pub fn new(variants: usize, holds: Vec<u64>) -> FaceResult<Self> {
        if holds.is_empty() {
            return Err(FaceError::validation("feature timer needs at least one hold"));
        }
        if holds.contains(&0) {
            return Err(FaceError::validation("feature hold durations must be > 0 ticks"));
        }
        let next_change = holds[0];
        Ok(Self {
            index: 0,
            next_change,
            variants: variants.max(1),
            holds,
        })
    }

    /// Start on variant 0 at rest; the first flip fires on the first poll.
    pub fn rested(variants: usize, holds: Vec<u64>) -> FaceResult<Self> {
        let mut timer = Self::new(variants, holds)?;
        timer.next_change = 0;
        Ok(timer)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next_change(&self) -> u64 {
        self.next_change
    }

    pub fn hold(&self, index: usize) -> u64 {
        self.holds[index % self.holds.len()]
    }

    pub fn is_due(&self, tick: u64) -> bool {
        tick >= self.next_change
    }

    /// Flip to the next variant if due at `tick` and reschedule. Returns whether the index changed.
    pub fn poll(&mut self, tick: u64) -> bool {
        if !self.is_due(tick) {
            return false;
        }
        let prev = self.index;
        self.index = (self.index + 1) % self.variants;
        self.next_change = tick + self.hold(self.index);
        prev != self.index
    }

    /// Force variant 0 and clear the schedule so the next poll flips immediately.
    /// Returns whether the index changed.
    pub fn rest(&mut self) -> bool {
        let prev = self.index;
        self.index = 0;
        self.next_change = 0;
        prev != 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
