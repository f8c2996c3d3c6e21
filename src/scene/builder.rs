use crate::{
    foundation::error::{TweenlineError, TweenlineResult},
    scene::{shape::ShapeKind, state::AnimationState},
    timeline::motion::MotionCommand,
};

/// Fluent construction of a committed [`AnimationState`].
///
/// Every step validates eagerly, so the first bad declaration is reported where it was made.
#[derive(Debug, Default)]
pub struct AnimationBuilder {
    state: AnimationState,
}

impl AnimationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(mut self, x: i32, y: i32, width: i64, height: i64) -> TweenlineResult<Self> {
        self.state.set_bounds(x, y, width, height)?;
        Ok(self)
    }

    /// Declare a shape from its textual kind (`"rectangle"`, `"ellipse"`, `"plus"`).
    pub fn shape(mut self, name: impl Into<String>, kind: &str) -> TweenlineResult<Self> {
        let kind: ShapeKind = kind.parse()?;
        self.state.declare_shape(name, kind)?;
        Ok(self)
    }

    pub fn motion(mut self, shape: &str, cmd: MotionCommand) -> TweenlineResult<Self> {
        self.state.add_motion(shape, &cmd)?;
        Ok(self)
    }

    pub fn tempo(mut self, start: i64, end: i64, rate: i64) -> TweenlineResult<Self> {
        self.state.add_tempo(start, end, rate)?;
        Ok(self)
    }

    /// Commit and hand out the frozen state.
    pub fn build(mut self) -> TweenlineResult<AnimationState> {
        self.state.commit()?;
        Ok(self.state)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoundsDoc {
    pub x: i32,
    pub y: i32,
    pub width: i64,
    pub height: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShapeDoc {
    pub name: String,
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionDoc {
    pub shape: String,
    #[serde(flatten)]
    pub command: MotionCommand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TempoDoc {
    pub start: i64,
    pub end: i64,
    pub rate: i64,
}

/// Serializable description of an animation, replayed through [`AnimationBuilder`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDoc {
    #[serde(default)]
    pub bounds: Option<BoundsDoc>,
    #[serde(default)]
    pub shapes: Vec<ShapeDoc>,
    #[serde(default)]
    pub motions: Vec<MotionDoc>,
    #[serde(default)]
    pub tempos: Vec<TempoDoc>,
}

impl AnimationDoc {
    pub fn from_json_str(s: &str) -> TweenlineResult<Self> {
        serde_json::from_str(s).map_err(|e| TweenlineError::serde(e.to_string()))
    }

    pub fn to_json_string(&self) -> TweenlineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TweenlineError::serde(e.to_string()))
    }

    /// Declare shapes, then motions, then tempos, and commit.
    pub fn build(&self) -> TweenlineResult<AnimationState> {
        let mut b = AnimationBuilder::new();
        if let Some(bounds) = self.bounds {
            b = b.bounds(bounds.x, bounds.y, bounds.width, bounds.height)?;
        }
        for shape in &self.shapes {
            b = b.shape(shape.name.clone(), &shape.kind)?;
        }
        for motion in &self.motions {
            b = b.motion(&motion.shape, motion.command)?;
        }
        for tempo in &self.tempos {
            b = b.tempo(tempo.start, tempo.end, tempo.rate)?;
        }
        b.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
