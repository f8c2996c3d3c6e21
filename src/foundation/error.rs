use crate::{foundation::core::Tick, timeline::motion::Attribute};

/// Convenience result type used across Tweenline.
pub type TweenlineResult<T> = Result<T, TweenlineError>;

/// Every way building or reading an animation can fail.
#[derive(thiserror::Error, Debug)]
pub enum TweenlineError {
    /// Negative tick, inverted interval, out-of-gamut color or invalid geometry.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A shape name or handle that was never declared, or was removed.
    #[error("unknown shape: '{0}'")]
    UnknownShape(String),

    /// A shape name declared twice.
    #[error("duplicate shape: '{0}' is already declared")]
    DuplicateShape(String),

    /// A textual shape kind that does not name a [`crate::ShapeKind`].
    #[error("unsupported shape kind: '{0}'")]
    UnsupportedShapeKind(String),

    /// Two motions change the same attribute over a shared tick range.
    #[error("merge conflict: two motions change {attribute} during ticks [{start}, {end}]")]
    MergeConflict {
        attribute: Attribute,
        start: Tick,
        end: Tick,
    },

    /// Two motions hold different values for an attribute neither of them changes.
    #[error(
        "unchanged field conflict: motions disagree on static {attribute} during ticks [{start}, {end}]"
    )]
    UnchangedFieldConflict {
        attribute: Attribute,
        start: Tick,
        end: Tick,
    },

    /// A tempo range touching an existing one.
    #[error(
        "tempo overlap: [{start}, {end}] touches existing tempo [{existing_start}, {existing_end}]"
    )]
    Overlap {
        start: Tick,
        end: Tick,
        existing_start: Tick,
        existing_end: Tick,
    },

    /// A tempo rate that is not a positive 32-bit tick rate.
    #[error("invalid tempo: rate must be in [1, {max}], got {0}", max = u32::MAX)]
    InvalidTempo(i64),

    /// An operation not allowed in the animation's current phase.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Touching motions of one shape disagree on their boundary values at commit.
    #[error(
        "continuity error: shape '{shape}' jumps between the motion ending at tick {prev_end} and the motion starting at tick {next_start}"
    )]
    Continuity {
        shape: String,
        prev_end: Tick,
        next_start: Tick,
    },

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenlineError {
    /// Build a [`TweenlineError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`TweenlineError::InvalidState`] value.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Build a [`TweenlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
