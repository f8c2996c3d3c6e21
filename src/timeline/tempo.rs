use crate::{
    foundation::{
        core::Tick,
        error::{TweenlineError, TweenlineResult},
    },
    timeline::interval::{TickRelation, TimeInterval},
};

/// Tick-rate override over a range of ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Tempo {
    interval: TimeInterval,
    rate: u32,
}

impl Tempo {
    pub fn new(interval: TimeInterval, rate: i64) -> TweenlineResult<Self> {
        let rate = u32::try_from(rate)
            .ok()
            .filter(|r| *r > 0)
            .ok_or(TweenlineError::InvalidTempo(rate))?;
        Ok(Self { interval, rate })
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }
}

/// Disjoint tempos ordered by start tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct TempoTable {
    tempos: Vec<Tempo>,
}

impl TempoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tempos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tempos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tempo> {
        self.tempos.iter()
    }

    /// Add `tempo`, rejecting it if either of its endpoints is active inside an existing
    /// tempo, or if it swallows an existing tempo's start.
    ///
    /// Boundaries follow [`TimeInterval::compare_to_tick`]: `[3, 5]` then `[5, 10]` is
    /// accepted, while `[5, 10]` then `[3, 5]` is rejected because tick 5 is active in
    /// `[5, 10]`.
    pub fn insert(&self, tempo: Tempo) -> TweenlineResult<TempoTable> {
        let new = tempo.interval;
        for existing in &self.tempos {
            let old = existing.interval;
            let touches = old.is_active_at(new.start())
                || old.is_active_at(new.end())
                || new.is_active_at(old.start());
            if touches {
                return Err(TweenlineError::Overlap {
                    start: new.start(),
                    end: new.end(),
                    existing_start: old.start(),
                    existing_end: old.end(),
                });
            }
            if old.compare_to_tick(new.end()) == TickRelation::Before {
                break;
            }
        }

        let mut tempos = self.tempos.clone();
        let at = tempos.partition_point(|t| t.interval.cmp_start(&new).is_le());
        tempos.insert(at, tempo);
        Ok(Self { tempos })
    }

    /// Rate of the tempo active at `tick`, if one is.
    pub fn rate_at(&self, tick: Tick) -> Option<u32> {
        for tempo in &self.tempos {
            match tempo.interval.compare_to_tick(tick) {
                TickRelation::During => return Some(tempo.rate),
                TickRelation::Before => break,
                TickRelation::After => {}
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TempoTable {
    type Item = &'a Tempo;
    type IntoIter = std::slice::Iter<'a, Tempo>;

    fn into_iter(self) -> Self::IntoIter {
        self.tempos.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/tempo.rs"]
mod tests;
