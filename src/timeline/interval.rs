use std::cmp::Ordering;

use crate::foundation::{
    core::Tick,
    error::{TweenlineError, TweenlineResult},
};

/// Where a tick falls relative to a [`TimeInterval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickRelation {
    /// The tick comes before the interval starts.
    Before,
    /// The interval is active at the tick.
    During,
    /// The interval is over by the tick.
    After,
}

/// Closed tick range `[start, end]` with `start <= end`.
///
/// Activity is half-open: a non-degenerate interval is active on `[start, end)`, while a
/// degenerate one (`start == end`, an instantaneous change) is active only on its own tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TimeInterval {
    start: Tick,
    end: Tick,
}

impl TimeInterval {
    pub fn new(start: Tick, end: Tick) -> TweenlineResult<Self> {
        if start > end {
            return Err(TweenlineError::invalid_range(format!(
                "interval start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Validate signed endpoints coming from an untyped source.
    pub fn from_signed(start: i64, end: i64) -> TweenlineResult<Self> {
        Self::new(Tick::from_signed(start)?, Tick::from_signed(end)?)
    }

    pub fn start(self) -> Tick {
        self.start
    }

    pub fn end(self) -> Tick {
        self.end
    }

    pub fn len_ticks(self) -> u64 {
        self.end.since(self.start)
    }

    pub fn is_instant(self) -> bool {
        self.start == self.end
    }

    pub fn compare_to_tick(self, tick: Tick) -> TickRelation {
        if (self.is_instant() && self.start == tick) || (self.start <= tick && tick < self.end) {
            TickRelation::During
        } else if self.end <= tick {
            TickRelation::After
        } else {
            TickRelation::Before
        }
    }

    pub fn is_active_at(self, tick: Tick) -> bool {
        self.compare_to_tick(tick) == TickRelation::During
    }

    /// True when both intervals share a stretch of time.
    ///
    /// An instant overlaps a span only when it sits strictly inside it; two instants never
    /// overlap, even on the same tick.
    pub fn overlaps(self, other: TimeInterval) -> bool {
        match (self.is_instant(), other.is_instant()) {
            (true, true) => false,
            (true, false) => other.start < self.start && self.start < other.end,
            (false, true) => self.start < other.start && other.start < self.end,
            (false, false) => self.start < other.end && other.start < self.end,
        }
    }

    /// Queue ordering: by start tick, instants ahead of spans that share their start.
    pub fn cmp_start(&self, other: &TimeInterval) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/interval.rs"]
mod tests;
