use std::fmt;

use crate::foundation::error::{TweenlineError, TweenlineResult};

pub use kurbo::{Point, Size};

/// Discrete unit of animation time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    /// Validate a signed tick coming from an untyped source.
    pub fn from_signed(raw: i64) -> TweenlineResult<Self> {
        u64::try_from(raw)
            .map(Tick)
            .map_err(|_| TweenlineError::invalid_range(format!("tick {raw} is negative")))
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from signed channel values, rejecting anything outside `[0, 255]`.
    pub fn from_channels(raw: [i32; 3]) -> TweenlineResult<Self> {
        let channel = |v: i32| {
            u8::try_from(v).map_err(|_| {
                TweenlineError::invalid_range(format!("color channel {v} is outside [0, 255]"))
            })
        };
        Ok(Self {
            r: channel(raw[0])?,
            g: channel(raw[1])?,
            b: channel(raw[2])?,
        })
    }

    pub fn channels(self) -> [i32; 3] {
        [i32::from(self.r), i32::from(self.g), i32::from(self.b)]
    }

    /// Inverse of [`Rgb::channels`] for values already known to lie in range.
    pub(crate) fn from_clamped(raw: [i32; 3]) -> Self {
        fn clamp(v: i32) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self {
            r: clamp(raw[0]),
            g: clamp(raw[1]),
            b: clamp(raw[2]),
        }
    }
}

/// Canvas bounding box the animation is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i64, height: i64) -> TweenlineResult<Self> {
        let dim = |v: i64, what: &str| {
            u32::try_from(v).map_err(|_| {
                TweenlineError::invalid_range(format!("canvas {what} {v} must be in [0, u32::MAX]"))
            })
        };
        Ok(Self {
            x,
            y,
            width: dim(width, "width")?,
            height: dim(height, "height")?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
