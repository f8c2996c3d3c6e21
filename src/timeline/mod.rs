pub mod interval;
pub mod motion;
pub mod queue;
pub mod tempo;
