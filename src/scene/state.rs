use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::{Bounds, Tick},
        error::{TweenlineError, TweenlineResult},
    },
    scene::shape::{Shape, ShapeId, ShapeKind},
    timeline::{
        interval::TimeInterval,
        motion::{Motion, MotionCommand},
        queue::MotionQueue,
        tempo::{Tempo, TempoTable},
    },
};

/// Lifecycle of an [`AnimationState`]. Mutation is only legal while `Building`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    #[default]
    Building,
    Committed,
}

/// A shape addressed either by handle or by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeRef<'a> {
    Id(ShapeId),
    Name(&'a str),
}

impl From<ShapeId> for ShapeRef<'_> {
    fn from(id: ShapeId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for ShapeRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for ShapeRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl From<&Shape> for ShapeRef<'_> {
    fn from(shape: &Shape) -> Self {
        Self::Id(shape.id)
    }
}

#[derive(Clone, Debug)]
struct ShapeEntry {
    shape: Shape,
    motions: MotionQueue,
}

/// Shapes, their normalized motion queues, the tempo table and the canvas bounds of one
/// animation.
///
/// Shape handles are allocated in increasing order, so iterating `entries` yields shapes in
/// declaration order. Every read returns an owned snapshot.
#[derive(Clone, Debug, Default)]
pub struct AnimationState {
    phase: Phase,
    bounds: Bounds,
    entries: BTreeMap<ShapeId, ShapeEntry>,
    names: BTreeMap<String, ShapeId>,
    tempos: TempoTable,
    next_id: u32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_committed(&self) -> bool {
        self.phase == Phase::Committed
    }

    fn ensure_building(&self, op: &str) -> TweenlineResult<()> {
        match self.phase {
            Phase::Building => Ok(()),
            Phase::Committed => Err(TweenlineError::invalid_state(format!(
                "cannot {op}: animation is already committed"
            ))),
        }
    }

    fn resolve(&self, shape: ShapeRef<'_>) -> TweenlineResult<ShapeId> {
        match shape {
            ShapeRef::Id(id) if self.entries.contains_key(&id) => Ok(id),
            ShapeRef::Id(id) => Err(TweenlineError::UnknownShape(format!("#{}", id.0))),
            ShapeRef::Name(name) => self
                .names
                .get(name)
                .copied()
                .ok_or_else(|| TweenlineError::UnknownShape(name.to_string())),
        }
    }

    pub fn set_bounds(&mut self, x: i32, y: i32, width: i64, height: i64) -> TweenlineResult<()> {
        self.ensure_building("set bounds")?;
        self.bounds = Bounds::new(x, y, width, height)?;
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn declare_shape(
        &mut self,
        name: impl Into<String>,
        kind: ShapeKind,
    ) -> TweenlineResult<ShapeId> {
        self.ensure_building("declare a shape")?;
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TweenlineError::DuplicateShape(name));
        }

        let id = ShapeId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| TweenlineError::invalid_state("shape handles exhausted"))?;
        tracing::debug!(shape = %name, %kind, "declared shape");
        self.names.insert(name.clone(), id);
        self.entries.insert(
            id,
            ShapeEntry {
                shape: Shape { id, name, kind },
                motions: MotionQueue::new(),
            },
        );
        Ok(id)
    }

    /// Remove a shape together with its motions.
    pub fn remove_shape<'a>(&mut self, shape: impl Into<ShapeRef<'a>>) -> TweenlineResult<Shape> {
        self.ensure_building("remove a shape")?;
        let id = self.resolve(shape.into())?;
        let entry = self
            .entries
            .remove(&id)
            .ok_or_else(|| TweenlineError::UnknownShape(format!("#{}", id.0)))?;
        self.names.remove(&entry.shape.name);
        tracing::debug!(shape = %entry.shape.name, motions = entry.motions.len(), "removed shape");
        Ok(entry.shape)
    }

    /// Drop every motion of a shape while keeping the shape declared.
    pub fn clear_motions<'a>(&mut self, shape: impl Into<ShapeRef<'a>>) -> TweenlineResult<()> {
        self.ensure_building("clear motions")?;
        let id = self.resolve(shape.into())?;
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.motions = MotionQueue::new();
        }
        Ok(())
    }

    /// Validate an untyped motion command and merge it into the shape's queue.
    pub fn add_motion<'a>(
        &mut self,
        shape: impl Into<ShapeRef<'a>>,
        cmd: &MotionCommand,
    ) -> TweenlineResult<()> {
        self.ensure_building("add a motion")?;
        let id = self.resolve(shape.into())?;
        self.insert_motion(id, cmd.to_motion()?)
    }

    pub fn insert_motion<'a>(
        &mut self,
        shape: impl Into<ShapeRef<'a>>,
        motion: Motion,
    ) -> TweenlineResult<()> {
        self.ensure_building("add a motion")?;
        let id = self.resolve(shape.into())?;
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| TweenlineError::UnknownShape(format!("#{}", id.0)))?;
        let merged = entry.motions.insert(motion)?;
        tracing::debug!(
            shape = %entry.shape.name,
            start = motion.start_tick().0,
            end = motion.end_tick().0,
            queue_len = merged.len(),
            "inserted motion"
        );
        entry.motions = merged;
        Ok(())
    }

    pub fn add_tempo(&mut self, start: i64, end: i64, rate: i64) -> TweenlineResult<()> {
        self.ensure_building("add a tempo")?;
        if rate <= 0 {
            return Err(TweenlineError::InvalidTempo(rate));
        }
        let tempo = Tempo::new(TimeInterval::from_signed(start, end)?, rate)?;
        self.tempos = self.tempos.insert(tempo)?;
        tracing::debug!(start, end, rate, "inserted tempo");
        Ok(())
    }

    /// Check that touching motions of every shape agree on their shared boundary values,
    /// then freeze the animation.
    ///
    /// On failure the state stays `Building` so the caller can patch motions and retry.
    pub fn commit(&mut self) -> TweenlineResult<()> {
        self.ensure_building("commit")?;
        for entry in self.entries.values() {
            if let Some((prev_end, next_start)) = entry.motions.find_discontinuity() {
                tracing::warn!(
                    shape = %entry.shape.name,
                    prev_end = prev_end.0,
                    next_start = next_start.0,
                    "commit rejected: motion values jump"
                );
                return Err(TweenlineError::Continuity {
                    shape: entry.shape.name.clone(),
                    prev_end,
                    next_start,
                });
            }
        }

        self.phase = Phase::Committed;
        tracing::info!(
            shapes = self.entries.len(),
            motions = self.entries.values().map(|e| e.motions.len()).sum::<usize>(),
            tempos = self.tempos.len(),
            "animation committed"
        );
        Ok(())
    }

    /// Shapes in declaration order.
    pub fn shapes_ordered(&self) -> Vec<Shape> {
        self.entries.values().map(|e| e.shape.clone()).collect()
    }

    pub fn shape<'a>(&self, shape: impl Into<ShapeRef<'a>>) -> TweenlineResult<Shape> {
        let id = self.resolve(shape.into())?;
        self.entry(id).map(|e| e.shape.clone())
    }

    pub fn motions_for<'a>(&self, shape: impl Into<ShapeRef<'a>>) -> TweenlineResult<MotionQueue> {
        let id = self.resolve(shape.into())?;
        self.entry(id).map(|e| e.motions.clone())
    }

    fn entry(&self, id: ShapeId) -> TweenlineResult<&ShapeEntry> {
        self.entries
            .get(&id)
            .ok_or_else(|| TweenlineError::UnknownShape(format!("#{}", id.0)))
    }

    pub(crate) fn queues(&self) -> impl Iterator<Item = (&Shape, &MotionQueue)> {
        self.entries.values().map(|e| (&e.shape, &e.motions))
    }

    pub fn tempo_at(&self, tick: Tick) -> Option<u32> {
        self.tempos.rate_at(tick)
    }

    pub fn tempos(&self) -> TempoTable {
        self.tempos.clone()
    }

    /// True once no motion of any shape is active at or after `tick`.
    pub fn is_finished_by(&self, tick: Tick) -> bool {
        self.entries.values().all(|e| e.motions.is_finished_by(tick))
    }

    /// Smallest motion boundary `>= tick` across all shapes, or `tick` itself if none is left.
    pub fn next_significant_tick(&self, tick: Tick) -> Tick {
        self.entries
            .values()
            .filter_map(|e| e.motions.next_significant_tick(tick))
            .min()
            .unwrap_or(tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
