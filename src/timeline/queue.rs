use crate::{
    foundation::{
        core::Tick,
        error::{TweenlineError, TweenlineResult},
    },
    timeline::{
        interval::TickRelation,
        motion::{Motion, ShapeState},
    },
};

/// Disjoint motions for one shape, ordered by start tick.
///
/// Queues are persistent: [`MotionQueue::insert`] returns a new queue and leaves the receiver
/// untouched, so a rejected insertion never leaves a half-merged queue behind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct MotionQueue {
    motions: Vec<Motion>,
}

impl MotionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Motion> {
        self.motions.iter()
    }

    pub fn as_slice(&self) -> &[Motion] {
        &self.motions
    }

    /// Splice and merge `motion` against every overlapping entry.
    pub fn insert(&self, motion: Motion) -> TweenlineResult<MotionQueue> {
        let incoming = motion.interval();
        let mut kept = Vec::with_capacity(self.motions.len() + 2);
        let mut overlapping = Vec::new();
        let mut folded = false;

        for existing in &self.motions {
            if existing.interval().overlaps(incoming) {
                overlapping.push(*existing);
            } else if incoming.is_instant() && existing.interval() == incoming {
                if *existing == motion {
                    // Same teleport inserted twice.
                    return Ok(self.clone());
                }
                // Teleports on one tick share it like spans share a range.
                kept.push(existing.merge_same_range(&motion)?);
                folded = true;
            } else {
                kept.push(*existing);
            }
        }

        if incoming.is_instant() {
            // An instant overlaps at most one span: the queue is disjoint.
            if let Some(span) = overlapping.first() {
                span.check_absorbs(&motion)?;
                return Ok(self.clone());
            }
            if !folded {
                kept.push(motion);
            }
            return Ok(Self::sorted(kept));
        }

        let mut current = motion;
        for existing in &overlapping {
            if existing.interval().is_instant() {
                current.check_absorbs(existing)?;
                continue;
            }
            let mut pieces = current.combine(existing)?;
            let Some(rightmost) = pieces.pop() else {
                return Err(TweenlineError::invalid_state(format!(
                    "combining [{}, {}] with [{}, {}] produced no motions",
                    current.start_tick(),
                    current.end_tick(),
                    existing.start_tick(),
                    existing.end_tick()
                )));
            };
            kept.extend(pieces);
            current = rightmost;
        }
        kept.push(current);

        Ok(Self::sorted(kept))
    }

    fn sorted(mut motions: Vec<Motion>) -> Self {
        motions.sort_by(|a, b| a.interval().cmp_start(&b.interval()));
        Self { motions }
    }

    /// Motion that is active at `tick`, if any.
    pub fn active_at(&self, tick: Tick) -> Option<&Motion> {
        self.motions
            .iter()
            .take_while(|m| m.start_tick() <= tick)
            .find(|m| m.interval().is_active_at(tick))
    }

    /// Interpolated state at `tick`: the active motion, else one that ends exactly there.
    pub fn sample(&self, tick: Tick) -> Option<ShapeState> {
        self.active_at(tick)
            .or_else(|| self.motions.iter().find(|m| m.end_tick() == tick))
            .map(|m| m.sample(tick))
    }

    /// Smallest motion start or end that is `>= tick`.
    pub fn next_significant_tick(&self, tick: Tick) -> Option<Tick> {
        self.motions
            .iter()
            .flat_map(|m| [m.start_tick(), m.end_tick()])
            .filter(|t| *t >= tick)
            .min()
    }

    pub fn is_finished_by(&self, tick: Tick) -> bool {
        self.motions
            .iter()
            .all(|m| m.interval().compare_to_tick(tick) == TickRelation::After)
    }

    /// First pair of touching motions whose boundary values disagree, as
    /// `(prev_end, next_start)`.
    ///
    /// Motions separated by a gap in time are not compared.
    pub fn find_discontinuity(&self) -> Option<(Tick, Tick)> {
        self.motions
            .windows(2)
            .find(|w| w[0].end_tick() == w[1].start_tick() && !w[1].is_valid_successor(&w[0]))
            .map(|w| (w[0].end_tick(), w[1].start_tick()))
    }
}

impl<'a> IntoIterator for &'a MotionQueue {
    type Item = &'a Motion;
    type IntoIter = std::slice::Iter<'a, Motion>;

    fn into_iter(self) -> Self::IntoIter {
        self.motions.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/queue.rs"]
mod tests;
