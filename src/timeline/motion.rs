use std::fmt;

use crate::{
    foundation::{
        core::{Point, Rgb, Size, Tick},
        error::{TweenlineError, TweenlineResult},
    },
    timeline::interval::TimeInterval,
};

/// One of the five animatable shape attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    X,
    Y,
    Width,
    Height,
    Color,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::X,
        Attribute::Y,
        Attribute::Width,
        Attribute::Height,
        Attribute::Color,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::X => "x",
            Attribute::Y => "y",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::Color => "color",
        };
        f.write_str(name)
    }
}

/// Set of attributes a motion changes over its interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChangeMask(u8);

impl ChangeMask {
    pub fn contains(self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn with(self, attr: Attribute) -> Self {
        Self(self.0 | attr.bit())
    }

    pub fn intersection(self, other: ChangeMask) -> ChangeMask {
        Self(self.0 & other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    pub fn first(self) -> Option<Attribute> {
        self.iter().next()
    }
}

/// Position, size and color of a shape at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ShapeState {
    pub position: Point,
    pub size: Size,
    pub color: Rgb,
}

impl ShapeState {
    pub fn new(position: Point, size: Size, color: Rgb) -> Self {
        Self {
            position,
            size,
            color,
        }
    }

    pub fn validate(&self) -> TweenlineResult<()> {
        if !self.position.is_finite() {
            return Err(TweenlineError::invalid_range(format!(
                "position ({}, {}) must be finite",
                self.position.x, self.position.y
            )));
        }
        if !self.size.is_finite() || self.size.width < 0.0 || self.size.height < 0.0 {
            return Err(TweenlineError::invalid_range(format!(
                "size {}x{} must be finite and non-negative",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }

    fn same_attribute(&self, other: &ShapeState, attr: Attribute) -> bool {
        match attr {
            Attribute::X => self.position.x == other.position.x,
            Attribute::Y => self.position.y == other.position.y,
            Attribute::Width => self.size.width == other.size.width,
            Attribute::Height => self.size.height == other.size.height,
            Attribute::Color => self.color == other.color,
        }
    }

    fn copy_attribute(&mut self, src: &ShapeState, attr: Attribute) {
        match attr {
            Attribute::X => self.position.x = src.position.x,
            Attribute::Y => self.position.y = src.position.y,
            Attribute::Width => self.size.width = src.size.width,
            Attribute::Height => self.size.height = src.size.height,
            Attribute::Color => self.color = src.color,
        }
    }
}

/// Timed linear interpolation of every shape attribute from `from` to `to`.
///
/// Motions are values: splicing and merging always build new motions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Motion {
    interval: TimeInterval,
    from: ShapeState,
    to: ShapeState,
}

impl Motion {
    pub fn new(interval: TimeInterval, from: ShapeState, to: ShapeState) -> TweenlineResult<Self> {
        from.validate()?;
        to.validate()?;
        Ok(Self { interval, from, to })
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    pub fn start_tick(&self) -> Tick {
        self.interval.start()
    }

    pub fn end_tick(&self) -> Tick {
        self.interval.end()
    }

    pub fn from(&self) -> &ShapeState {
        &self.from
    }

    pub fn to(&self) -> &ShapeState {
        &self.to
    }

    /// Attributes whose start and end values differ.
    pub fn changes(&self) -> ChangeMask {
        Attribute::ALL
            .into_iter()
            .filter(|a| !self.from.same_attribute(&self.to, *a))
            .fold(ChangeMask::default(), ChangeMask::with)
    }

    /// Clip this motion to `[start, end)`, interpolating the values at the new boundaries.
    ///
    /// Returns `None` when the request is zero-width or misses the motion entirely. An
    /// instantaneous motion survives only a request that strictly contains its tick, and is
    /// returned unchanged.
    pub fn splice(&self, start: Tick, end: Tick) -> Option<Motion> {
        let (own_start, own_end) = (self.interval.start(), self.interval.end());
        if own_end <= start || own_start >= end || start == end {
            return None;
        }
        if self.interval.is_instant() {
            return Some(*self);
        }

        let new_start = start.max(own_start);
        let new_end = end.min(own_end);
        Some(Self {
            interval: TimeInterval::new(new_start, new_end).ok()?,
            from: self.state_after(new_start.since(own_start)),
            to: self.state_before_end(own_end.since(new_end)),
        })
    }

    /// Fold `other`, which must cover the identical tick range, into one motion.
    ///
    /// Each attribute comes from whichever motion changes it. Attributes neither motion
    /// changes must agree.
    pub fn merge_same_range(&self, other: &Motion) -> TweenlineResult<Motion> {
        if self.interval != other.interval {
            return Err(TweenlineError::invalid_range(format!(
                "cannot merge [{}, {}] with [{}, {}]: ranges differ",
                self.start_tick(),
                self.end_tick(),
                other.start_tick(),
                other.end_tick()
            )));
        }

        let mine = self.changes();
        let theirs = other.changes();
        if let Some(attribute) = mine.intersection(theirs).first() {
            return Err(self.conflict(attribute));
        }

        let mut merged = *self;
        for attr in Attribute::ALL {
            if theirs.contains(attr) {
                merged.from.copy_attribute(&other.from, attr);
                merged.to.copy_attribute(&other.to, attr);
            } else if !mine.contains(attr) && !self.from.same_attribute(&other.from, attr) {
                return Err(TweenlineError::UnchangedFieldConflict {
                    attribute: attr,
                    start: self.start_tick(),
                    end: self.end_tick(),
                });
            }
        }
        Ok(merged)
    }

    /// Split two overlapping spans at each other's boundaries and merge the shared stretch.
    ///
    /// Yields one to three disjoint motions ordered by start tick.
    pub fn combine(&self, other: &Motion) -> TweenlineResult<Vec<Motion>> {
        let (a, b) = (self.interval, other.interval);
        if a.is_instant() || b.is_instant() || !a.overlaps(b) {
            return Err(TweenlineError::invalid_range(format!(
                "cannot combine [{}, {}] with [{}, {}]: spans do not overlap",
                a.start(),
                a.end(),
                b.start(),
                b.end()
            )));
        }

        let left_start = a.start().min(b.start());
        let right_end = a.end().max(b.end());
        let mid_start = a.start().max(b.start());
        let mid_end = a.end().min(b.end());

        if let (Some(x), Some(y)) = (
            self.splice(mid_start, mid_end),
            other.splice(mid_start, mid_end),
        ) && let Some(attribute) = x.changes().intersection(y.changes()).first()
        {
            return Err(x.conflict(attribute));
        }

        let mut out = Vec::with_capacity(3);
        for (s, e) in [
            (left_start, mid_start),
            (mid_start, mid_end),
            (mid_end, right_end),
        ] {
            match (self.splice(s, e), other.splice(s, e)) {
                (Some(x), Some(y)) => out.push(x.merge_same_range(&y)?),
                (Some(x), None) | (None, Some(x)) => out.push(x),
                (None, None) => {}
            }
        }
        Ok(out)
    }

    /// Check that `instant`, lying strictly inside this span, can be dropped without losing
    /// information.
    pub(crate) fn check_absorbs(&self, instant: &Motion) -> TweenlineResult<()> {
        if let Some(attribute) = instant.changes().first() {
            return Err(self.conflict(attribute));
        }
        let span_changes = self.changes();
        for attr in Attribute::ALL {
            if !span_changes.contains(attr) && !self.from.same_attribute(&instant.from, attr) {
                return Err(TweenlineError::UnchangedFieldConflict {
                    attribute: attr,
                    start: self.start_tick(),
                    end: self.end_tick(),
                });
            }
        }
        Ok(())
    }

    /// True when this motion starts exactly where `prev` ends.
    pub fn is_valid_successor(&self, prev: &Motion) -> bool {
        self.from == prev.to
    }

    /// Interpolated state at `tick`, clamped into this motion's range.
    pub fn sample(&self, tick: Tick) -> ShapeState {
        let tick = tick.clamp(self.start_tick(), self.end_tick());
        if tick == self.end_tick() {
            return self.to;
        }
        self.state_after(tick.since(self.start_tick()))
    }

    fn conflict(&self, attribute: Attribute) -> TweenlineError {
        TweenlineError::MergeConflict {
            attribute,
            start: self.start_tick(),
            end: self.end_tick(),
        }
    }

    // Geometry moves at a fractional per-tick rate; color channels step by the truncated
    // integer rate.
    fn state_after(&self, ticks: u64) -> ShapeState {
        if ticks == 0 {
            return self.from;
        }
        let dur = self.interval.len_ticks();
        let fwd = |a: f64, b: f64| a + float_rate(a, b, dur) * ticks as f64;
        let rates = channel_rates(self.from.color, self.to.color, dur);
        let base = self.from.color.channels();
        ShapeState {
            position: Point::new(
                fwd(self.from.position.x, self.to.position.x),
                fwd(self.from.position.y, self.to.position.y),
            ),
            size: Size::new(
                fwd(self.from.size.width, self.to.size.width),
                fwd(self.from.size.height, self.to.size.height),
            ),
            color: Rgb::from_clamped(std::array::from_fn(|i| {
                step_channel(base[i], rates[i], ticks, 1)
            })),
        }
    }

    fn state_before_end(&self, ticks: u64) -> ShapeState {
        if ticks == 0 {
            return self.to;
        }
        let dur = self.interval.len_ticks();
        // Geometry is measured from the start, so it matches `state_after` bit for bit at
        // the same tick.
        let elapsed = dur.saturating_sub(ticks);
        let fwd = |a: f64, b: f64| a + float_rate(a, b, dur) * elapsed as f64;
        let rates = channel_rates(self.from.color, self.to.color, dur);
        let base = self.to.color.channels();
        ShapeState {
            position: Point::new(
                fwd(self.from.position.x, self.to.position.x),
                fwd(self.from.position.y, self.to.position.y),
            ),
            size: Size::new(
                fwd(self.from.size.width, self.to.size.width),
                fwd(self.from.size.height, self.to.size.height),
            ),
            color: Rgb::from_clamped(std::array::from_fn(|i| {
                step_channel(base[i], rates[i], ticks, -1)
            })),
        }
    }
}

fn float_rate(from: f64, to: f64, dur: u64) -> f64 {
    (to - from) / dur as f64
}

fn channel_rates(from: Rgb, to: Rgb, dur: u64) -> [i64; 3] {
    let dur = i64::try_from(dur).unwrap_or(i64::MAX);
    let (from, to) = (from.channels(), to.channels());
    std::array::from_fn(|i| i64::from(to[i] - from[i]) / dur)
}

fn step_channel(base: i32, rate: i64, ticks: u64, sign: i64) -> i32 {
    let ticks = i64::try_from(ticks).unwrap_or(i64::MAX);
    let stepped = i64::from(base).saturating_add(sign * rate.saturating_mul(ticks));
    stepped.clamp(0, 255) as i32
}

/// Untyped motion command as it arrives from a builder or document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionCommand {
    pub start_tick: i64,
    pub end_tick: i64,
    pub start_x: f64,
    pub end_x: f64,
    pub start_y: f64,
    pub end_y: f64,
    pub start_w: f64,
    pub end_w: f64,
    pub start_h: f64,
    pub end_h: f64,
    pub start_rgb: [i32; 3],
    pub end_rgb: [i32; 3],
}

impl MotionCommand {
    pub fn to_motion(&self) -> TweenlineResult<Motion> {
        let interval = TimeInterval::from_signed(self.start_tick, self.end_tick)?;
        let from = ShapeState::new(
            Point::new(self.start_x, self.start_y),
            Size::new(self.start_w, self.start_h),
            Rgb::from_channels(self.start_rgb)?,
        );
        let to = ShapeState::new(
            Point::new(self.end_x, self.end_y),
            Size::new(self.end_w, self.end_h),
            Rgb::from_channels(self.end_rgb)?,
        );
        Motion::new(interval, from, to)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/motion.rs"]
mod tests;
