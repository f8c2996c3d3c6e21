//! Tweenline normalizes tick-based shape animations.
//!
//! Clients declare shapes and feed in motion commands that may overlap in time. Each motion
//! is spliced and merged into its shape's queue so that, once everything is ingested, every
//! shape has a time-ordered, non-overlapping list of composite linear motions.
//!
//! # Pipeline overview
//!
//! 1. **Declare**: shapes, canvas bounds and tempo overrides go into an [`AnimationState`]
//!    (directly, via [`AnimationBuilder`], or from a JSON [`AnimationDoc`]).
//! 2. **Merge**: every [`MotionCommand`] is validated into a [`Motion`] and merged into its
//!    shape's [`MotionQueue`]; conflicting changes to one attribute are rejected.
//! 3. **Commit**: touching motions must agree on their boundary values; the state freezes.
//! 4. **Read**: renderers pull queue snapshots, tempo lookups and per-tick
//!    [`EvaluatedFrame`]s.
//!
//! Everything is single-threaded and deterministic for a given input order.
#![forbid(unsafe_code)]

mod eval;
mod foundation;
mod scene;
mod timeline;

pub use eval::frame::{EvaluatedFrame, EvaluatedShape, Evaluator};
pub use foundation::core::{Bounds, Point, Rgb, Size, Tick};
pub use foundation::error::{TweenlineError, TweenlineResult};
pub use scene::builder::{AnimationBuilder, AnimationDoc, BoundsDoc, MotionDoc, ShapeDoc, TempoDoc};
pub use scene::shape::{Shape, ShapeId, ShapeKind};
pub use scene::state::{AnimationState, Phase, ShapeRef};
pub use timeline::interval::{TickRelation, TimeInterval};
pub use timeline::motion::{Attribute, ChangeMask, Motion, MotionCommand, ShapeState};
pub use timeline::queue::MotionQueue;
pub use timeline::tempo::{Tempo, TempoTable};
