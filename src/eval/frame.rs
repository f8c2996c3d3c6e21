use crate::{
    foundation::{
        core::Tick,
        error::{TweenlineError, TweenlineResult},
    },
    scene::{shape::ShapeKind, state::AnimationState},
    timeline::motion::ShapeState,
};

/// Everything a renderer needs to draw one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    pub tick: Tick,
    pub tempo: Option<u32>, // None: no override, playback keeps its own rate
    pub shapes: Vec<EvaluatedShape>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedShape {
    pub name: String,
    pub kind: ShapeKind,
    pub state: ShapeState,
}

pub struct Evaluator;

impl Evaluator {
    /// Sample every shape with a motion at `tick`, in declaration order.
    #[tracing::instrument(skip(state))]
    pub fn eval_tick(state: &AnimationState, tick: Tick) -> TweenlineResult<EvaluatedFrame> {
        if !state.is_committed() {
            return Err(TweenlineError::invalid_state(
                "cannot evaluate an animation that is not committed",
            ));
        }

        let shapes = state
            .queues()
            .filter_map(|(shape, motions)| {
                motions.sample(tick).map(|s| EvaluatedShape {
                    name: shape.name.clone(),
                    kind: shape.kind,
                    state: s,
                })
            })
            .collect();

        Ok(EvaluatedFrame {
            tick,
            tempo: state.tempo_at(tick),
            shapes,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
